//! Facade over the shared project model.
//!
//! Owns the `Arc<RwLock<Project>>` and delegates mutations to the handlers.
//! There are no ambient singletons: every editing surface receives this
//! service (or the session wrapping it) explicitly.

use std::sync::{Arc, RwLock};

use log::info;
use uuid::Uuid;

use crate::error::EditorError;
use crate::model::element::{CanvasElement, ElementKind};
use crate::model::keyframe::Keyframe;
use crate::model::preset::PresetSchema;
use crate::model::project::Project;
use crate::model::property::PropertyValue;
use crate::model::track::{AnimationConfig, Track};
use crate::service::handlers::{
    ElementHandler, KeyframeHandler, KeyframeUpdate, TrackHandler,
};

pub struct EditorService {
    project: Arc<RwLock<Project>>,
}

impl Clone for EditorService {
    fn clone(&self) -> Self {
        Self {
            project: Arc::clone(&self.project),
        }
    }
}

impl EditorService {
    pub fn new() -> Self {
        Self::with_project(Project::new("Untitled Project"))
    }

    pub fn with_project(project: Project) -> Self {
        Self {
            project: Arc::new(RwLock::new(project)),
        }
    }

    pub fn project_handle(&self) -> Arc<RwLock<Project>> {
        Arc::clone(&self.project)
    }

    // --- Project lifecycle ---

    pub fn load_project(&self, json: &str) -> Result<Project, EditorError> {
        let new_project = Project::load(json)?;
        let mut project_write = self
            .project
            .write()
            .map_err(|_| EditorError::Runtime("Lock Poisoned".to_string()))?;
        *project_write = new_project.clone();
        info!("Loaded project '{}'", new_project.name);
        Ok(new_project)
    }

    pub fn save_project(&self) -> Result<String, EditorError> {
        let project_read = self
            .project
            .read()
            .map_err(|_| EditorError::Runtime("Lock Poisoned".to_string()))?;
        project_read.save()
    }

    pub fn create_new_project(&self, name: &str) -> Result<Project, EditorError> {
        let new_project = Project::new(name);
        let mut project_write = self
            .project
            .write()
            .map_err(|_| EditorError::Runtime("Lock Poisoned".to_string()))?;
        *project_write = new_project.clone();
        Ok(new_project)
    }

    // --- Elements ---

    pub fn create_element(&self, kind: ElementKind) -> Result<Uuid, EditorError> {
        ElementHandler::add_element(&self.project, CanvasElement::new(kind))
    }

    pub fn add_element(&self, element: CanvasElement) -> Result<Uuid, EditorError> {
        ElementHandler::add_element(&self.project, element)
    }

    pub fn get_element(&self, id: Uuid) -> Result<Option<CanvasElement>, EditorError> {
        ElementHandler::get_element(&self.project, id)
    }

    pub fn get_elements(&self) -> Result<Vec<CanvasElement>, EditorError> {
        ElementHandler::get_elements(&self.project)
    }

    pub fn update_element<F>(&self, id: Uuid, update: F) -> Result<(), EditorError>
    where
        F: FnOnce(&mut CanvasElement),
    {
        ElementHandler::update_element(&self.project, id, update)
    }

    /// Delete an element with its subtree; returns every removed id.
    pub fn remove_element(&self, id: Uuid) -> Result<Vec<Uuid>, EditorError> {
        ElementHandler::remove_element(&self.project, id)
    }

    pub fn duplicate_element(&self, id: Uuid) -> Result<Uuid, EditorError> {
        ElementHandler::duplicate_element(&self.project, id)
    }

    pub fn children(&self, parent: Option<Uuid>) -> Result<Vec<CanvasElement>, EditorError> {
        ElementHandler::children(&self.project, parent)
    }

    pub fn root_elements(&self) -> Result<Vec<CanvasElement>, EditorError> {
        ElementHandler::children(&self.project, None)
    }

    pub fn set_parent(&self, id: Uuid, parent: Option<Uuid>) -> Result<(), EditorError> {
        ElementHandler::set_parent(&self.project, id, parent)
    }

    pub fn move_element(
        &self,
        id: Uuid,
        new_parent: Option<Uuid>,
        new_order: Option<u32>,
    ) -> Result<(), EditorError> {
        ElementHandler::move_element(&self.project, id, new_parent, new_order)
    }

    pub fn is_descendant_of(&self, id: Uuid, ancestor: Uuid) -> Result<bool, EditorError> {
        ElementHandler::is_descendant_of(&self.project, id, ancestor)
    }

    /// Set one style property on an element.
    pub fn set_style(
        &self,
        id: Uuid,
        property: &str,
        value: PropertyValue,
    ) -> Result<(), EditorError> {
        ElementHandler::update_element(&self.project, id, |element| {
            element.style.insert(property.to_string(), value);
        })
    }

    /// Replace an element's animation wholesale (project load, preset apply).
    pub fn set_animation(&self, id: Uuid, animation: AnimationConfig) -> Result<(), EditorError> {
        ElementHandler::update_element(&self.project, id, |element| {
            element.animation = animation;
        })
    }

    pub fn apply_preset(&self, id: Uuid, preset: &PresetSchema) -> Result<(), EditorError> {
        info!("Applying preset '{}' to element {id}", preset.id);
        self.set_animation(id, preset.animation.clone())
    }

    // --- Tracks ---

    pub fn add_track(
        &self,
        element_id: Uuid,
        property: &str,
        duration: f64,
    ) -> Result<(), EditorError> {
        TrackHandler::add_track(&self.project, element_id, property, duration)
    }

    pub fn remove_track(&self, element_id: Uuid, property: &str) -> Result<(), EditorError> {
        TrackHandler::remove_track(&self.project, element_id, property)
    }

    pub fn get_tracks(&self, element_id: Uuid) -> Result<Vec<Track>, EditorError> {
        TrackHandler::get_tracks(&self.project, element_id)
    }

    pub fn set_track_durations(
        &self,
        element_id: Uuid,
        duration: f64,
    ) -> Result<(), EditorError> {
        TrackHandler::set_track_durations(&self.project, element_id, duration)
    }

    // --- Keyframes ---

    pub fn add_keyframe(
        &self,
        element_id: Uuid,
        property: &str,
        keyframe: Keyframe,
    ) -> Result<(), EditorError> {
        KeyframeHandler::add_keyframe(&self.project, element_id, property, keyframe)
    }

    pub fn update_keyframe(
        &self,
        element_id: Uuid,
        property: &str,
        index: usize,
        update: KeyframeUpdate,
    ) -> Result<(), EditorError> {
        KeyframeHandler::update_keyframe(&self.project, element_id, property, index, update)
    }

    pub fn remove_keyframe(
        &self,
        element_id: Uuid,
        property: &str,
        index: usize,
    ) -> Result<(), EditorError> {
        KeyframeHandler::remove_keyframe(&self.project, element_id, property, index)
    }
}

impl Default for EditorService {
    fn default() -> Self {
        Self::new()
    }
}
