pub mod element_handler;
pub mod keyframe_handler;
pub mod lock_helpers;
pub mod track_handler;

pub use element_handler::ElementHandler;
pub use keyframe_handler::{KeyframeHandler, KeyframeUpdate};
pub use track_handler::TrackHandler;
