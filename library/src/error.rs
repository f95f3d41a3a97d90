use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Element {0} not found")]
    ElementNotFound(Uuid),
    #[error("No '{property}' track on element {element}")]
    TrackNotFound { element: Uuid, property: String },
    #[error("Track '{property}' already exists on element {element}")]
    TrackAlreadyExists { element: Uuid, property: String },
    #[error("Keyframe index {index} out of bounds for track '{property}'")]
    KeyframeIndexOutOfBounds { property: String, index: usize },
    #[error("Invalid keyframe: {0}")]
    InvalidKeyframe(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Runtime error: {0}")]
    Runtime(String),
}
