//! Element CRUD and scene-tree operations.
//!
//! All mutations go through the shared project lock; failures are surfaced
//! as recoverable `EditorError`s so callers can decide whether to warn or
//! ignore.

use std::sync::{Arc, RwLock};

use log::{debug, warn};
use uuid::Uuid;

use crate::error::EditorError;
use crate::model::element::CanvasElement;
use crate::model::project::Project;
use crate::service::handlers::lock_helpers::{with_project_read, with_project_write};

pub struct ElementHandler;

impl ElementHandler {
    /// Insert an element, appending it to its parent's children.
    ///
    /// A dangling `parent_id` is cleared with a warning rather than
    /// rejected, matching the editor's forgiving authoring flow.
    pub fn add_element(
        project: &Arc<RwLock<Project>>,
        mut element: CanvasElement,
    ) -> Result<Uuid, EditorError> {
        with_project_write(project, |proj| {
            if let Some(parent_id) = element.parent_id {
                if !proj.has_element(parent_id) {
                    warn!("Parent element {parent_id} does not exist");
                    element.parent_id = None;
                }
            }
            element.order = proj.children_of(element.parent_id).len() as u32;
            let id = element.id;
            debug!("Adding element {id}");
            proj.data.elements.push(element);
            proj.touch();
            Ok(id)
        })
    }

    pub fn get_element(
        project: &Arc<RwLock<Project>>,
        id: Uuid,
    ) -> Result<Option<CanvasElement>, EditorError> {
        with_project_read(project, |proj| Ok(proj.get_element(id).cloned()))
    }

    pub fn get_elements(project: &Arc<RwLock<Project>>) -> Result<Vec<CanvasElement>, EditorError> {
        with_project_read(project, |proj| Ok(proj.data.elements.clone()))
    }

    /// Apply an in-place update to one element.
    pub fn update_element<F>(
        project: &Arc<RwLock<Project>>,
        id: Uuid,
        update: F,
    ) -> Result<(), EditorError>
    where
        F: FnOnce(&mut CanvasElement),
    {
        with_project_write(project, |proj| {
            let element = proj
                .get_element_mut(id)
                .ok_or(EditorError::ElementNotFound(id))?;
            update(element);
            proj.touch();
            Ok(())
        })
    }

    /// Delete an element and all of its descendants.
    ///
    /// Ownership is tree-shaped, so the element's animation config, tracks
    /// and keyframes go with it. Returns every removed id so the session
    /// can clear its selection.
    pub fn remove_element(
        project: &Arc<RwLock<Project>>,
        id: Uuid,
    ) -> Result<Vec<Uuid>, EditorError> {
        with_project_write(project, |proj| {
            if !proj.has_element(id) {
                return Err(EditorError::ElementNotFound(id));
            }
            let mut removed = descendants_of(proj, id);
            removed.push(id);
            proj.data.elements.retain(|e| !removed.contains(&e.id));
            proj.touch();
            debug!("Removed element {id} and {} descendants", removed.len() - 1);
            Ok(removed)
        })
    }

    /// Clone an element (without its children) next to the original. The
    /// copy gets a fresh id and lands at the end of its siblings.
    pub fn duplicate_element(
        project: &Arc<RwLock<Project>>,
        id: Uuid,
    ) -> Result<Uuid, EditorError> {
        with_project_write(project, |proj| {
            let source = proj
                .get_element(id)
                .ok_or(EditorError::ElementNotFound(id))?;
            let mut copy = source.clone();
            copy.id = Uuid::new_v4();
            copy.name = copy.name.map(|name| format!("{name} copy"));
            copy.order = proj.children_of(copy.parent_id).len() as u32;
            let new_id = copy.id;
            proj.data.elements.push(copy);
            proj.touch();
            Ok(new_id)
        })
    }

    pub fn children(
        project: &Arc<RwLock<Project>>,
        parent: Option<Uuid>,
    ) -> Result<Vec<CanvasElement>, EditorError> {
        with_project_read(project, |proj| {
            Ok(proj.children_of(parent).into_iter().cloned().collect())
        })
    }

    pub fn ancestors(
        project: &Arc<RwLock<Project>>,
        id: Uuid,
    ) -> Result<Vec<Uuid>, EditorError> {
        with_project_read(project, |proj| Ok(ancestors_of(proj, id)))
    }

    pub fn descendants(
        project: &Arc<RwLock<Project>>,
        id: Uuid,
    ) -> Result<Vec<Uuid>, EditorError> {
        with_project_read(project, |proj| Ok(descendants_of(proj, id)))
    }

    pub fn is_descendant_of(
        project: &Arc<RwLock<Project>>,
        id: Uuid,
        ancestor: Uuid,
    ) -> Result<bool, EditorError> {
        with_project_read(project, |proj| Ok(ancestors_of(proj, id).contains(&ancestor)))
    }

    /// Reparent an element. Reparenting under one of the element's own
    /// descendants would detach the subtree from the root, so cycles are
    /// rejected.
    pub fn set_parent(
        project: &Arc<RwLock<Project>>,
        id: Uuid,
        new_parent: Option<Uuid>,
    ) -> Result<(), EditorError> {
        with_project_write(project, |proj| Self::set_parent_locked(proj, id, new_parent))
    }

    /// Reparent and position an element among its new siblings.
    pub fn move_element(
        project: &Arc<RwLock<Project>>,
        id: Uuid,
        new_parent: Option<Uuid>,
        new_order: Option<u32>,
    ) -> Result<(), EditorError> {
        with_project_write(project, |proj| {
            Self::set_parent_locked(proj, id, new_parent)?;

            match new_order {
                Some(new_order) => {
                    // Shift siblings at or after the insertion point.
                    let sibling_ids: Vec<Uuid> = proj
                        .children_of(new_parent)
                        .iter()
                        .filter(|e| e.id != id)
                        .map(|e| e.id)
                        .collect();
                    for (index, sibling_id) in sibling_ids.iter().enumerate() {
                        let order = if index as u32 >= new_order {
                            index as u32 + 1
                        } else {
                            index as u32
                        };
                        if let Some(sibling) = proj.get_element_mut(*sibling_id) {
                            sibling.order = order;
                        }
                    }
                    if let Some(element) = proj.get_element_mut(id) {
                        element.order = new_order;
                    }
                }
                None => {
                    let end = proj.children_of(new_parent).len() as u32 - 1;
                    if let Some(element) = proj.get_element_mut(id) {
                        element.order = end;
                    }
                }
            }
            proj.touch();
            Ok(())
        })
    }

    fn set_parent_locked(
        proj: &mut Project,
        id: Uuid,
        new_parent: Option<Uuid>,
    ) -> Result<(), EditorError> {
        if !proj.has_element(id) {
            return Err(EditorError::ElementNotFound(id));
        }
        if let Some(parent_id) = new_parent {
            if !proj.has_element(parent_id) {
                return Err(EditorError::ElementNotFound(parent_id));
            }
            if parent_id == id || ancestors_of(proj, parent_id).contains(&id) {
                return Err(EditorError::InvalidArgument(format!(
                    "Cannot parent {id} under {parent_id}: would create a cycle"
                )));
            }
        }
        let order = proj
            .children_of(new_parent)
            .iter()
            .filter(|e| e.id != id)
            .count() as u32;
        let element = proj
            .get_element_mut(id)
            .ok_or(EditorError::ElementNotFound(id))?;
        element.parent_id = new_parent;
        element.order = order;
        proj.touch();
        Ok(())
    }
}

fn ancestors_of(proj: &Project, id: Uuid) -> Vec<Uuid> {
    let mut ancestors = Vec::new();
    let mut current = proj.get_element(id).and_then(|e| e.parent_id);
    while let Some(parent_id) = current {
        if ancestors.contains(&parent_id) {
            break; // corrupt tree, do not loop forever
        }
        ancestors.push(parent_id);
        current = proj.get_element(parent_id).and_then(|e| e.parent_id);
    }
    ancestors
}

fn descendants_of(proj: &Project, id: Uuid) -> Vec<Uuid> {
    let mut descendants = Vec::new();
    let mut queue: Vec<Uuid> = proj.children_of(Some(id)).iter().map(|e| e.id).collect();
    while let Some(child) = queue.pop() {
        descendants.push(child);
        queue.extend(proj.children_of(Some(child)).iter().map(|e| e.id));
    }
    descendants
}
