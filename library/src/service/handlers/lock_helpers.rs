//! Helper functions for acquiring project locks with consistent error handling.

use crate::error::EditorError;
use crate::model::project::Project;
use std::sync::{Arc, RwLock};

/// Execute a function with a write lock on the project.
pub fn with_project_write<F, R>(project: &Arc<RwLock<Project>>, f: F) -> Result<R, EditorError>
where
    F: FnOnce(&mut Project) -> Result<R, EditorError>,
{
    let mut proj = project
        .write()
        .map_err(|_| EditorError::Runtime("Lock Poisoned".to_string()))?;
    f(&mut proj)
}

/// Execute a function with a read lock on the project.
pub fn with_project_read<F, R>(project: &Arc<RwLock<Project>>, f: F) -> Result<R, EditorError>
where
    F: FnOnce(&Project) -> Result<R, EditorError>,
{
    let proj = project
        .read()
        .map_err(|_| EditorError::Runtime("Lock Poisoned".to_string()))?;
    f(&proj)
}
