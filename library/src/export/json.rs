//! Lossless project JSON for storage and re-import.

use log::error;

use crate::error::EditorError;
use crate::model::project::Project;

pub struct JsonExporter;

impl JsonExporter {
    /// Serialize the full project, tracks and keyframes verbatim.
    pub fn export(project: &Project) -> Result<String, EditorError> {
        Ok(serde_json::to_string_pretty(project)?)
    }

    /// Parse a previously exported project.
    pub fn import(json: &str) -> Result<Project, EditorError> {
        Project::load(json).map_err(|err| {
            error!("Failed to parse project JSON: {err}");
            err
        })
    }
}
