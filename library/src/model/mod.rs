pub mod element;
pub mod keyframe;
pub mod preset;
pub mod project;
pub mod property;
pub mod track;

pub use element::{CanvasElement, ElementKind, Position, Size};
pub use keyframe::Keyframe;
pub use preset::PresetSchema;
pub use project::{Project, ProjectData, ProjectSettings};
pub use property::PropertyValue;
pub use track::{AnimationConfig, FillMode, Iterations, PlayDirection, Track};
