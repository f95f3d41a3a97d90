//! Storage boundary for projects and presets.
//!
//! The core never performs I/O itself; the session/service layer hands the
//! data to an adapter. `StorageAdapter` is the required capability; hosts
//! that can push live updates additionally implement `LiveSync`, a separate
//! trait rather than optional methods on one wide interface.

pub mod file;
pub mod memory;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EditorError;
use crate::model::preset::PresetSchema;
use crate::model::project::Project;

pub use file::FileStorage;
pub use memory::MemoryStorage;

pub trait StorageAdapter {
    fn save_project(&mut self, project: &Project) -> Result<(), EditorError>;
    fn load_project(&self, id: Uuid) -> Result<Option<Project>, EditorError>;
    fn list_projects(&self) -> Result<Vec<Project>, EditorError>;
    fn delete_project(&mut self, id: Uuid) -> Result<(), EditorError>;

    fn save_preset(&mut self, preset: &PresetSchema) -> Result<(), EditorError>;
    fn load_preset(&self, id: &str) -> Result<Option<PresetSchema>, EditorError>;
    fn list_presets(&self) -> Result<Vec<PresetSchema>, EditorError>;
    fn delete_preset(&mut self, id: &str) -> Result<(), EditorError>;
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Create,
    Update,
    Delete,
}

/// One remote mutation, exchanged by live-sync capable adapters.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Change {
    pub id: String,
    pub kind: ChangeKind,
    /// Path of the mutated entity, e.g. an element id.
    pub target: String,
    pub value: serde_json::Value,
    pub timestamp: u64,
}

/// Optional collaboration capability.
pub trait LiveSync {
    fn subscribe_to_project(
        &mut self,
        id: Uuid,
        callback: Box<dyn Fn(&[Change]) + Send>,
    ) -> Result<(), EditorError>;

    fn push_changes(&mut self, id: Uuid, changes: &[Change]) -> Result<(), EditorError>;
}
