//! One editing session: the project service, the playback clock and the
//! selection, owned together and passed explicitly to whoever needs them.

use log::warn;
use uuid::Uuid;

use crate::error::EditorError;
use crate::evaluation::snapshot::{StyleSnapshot, StyleSnapshotBuilder};
use crate::model::keyframe::Keyframe;
use crate::model::project::Project;
use crate::model::property::PropertyValue;
use crate::service::editor_service::EditorService;
use crate::timeline::TimelineClock;

pub struct EditorSession {
    service: EditorService,
    clock: TimelineClock,
    selected: Vec<Uuid>,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::with_project(Project::new("Untitled Project"))
    }

    pub fn with_project(project: Project) -> Self {
        Self {
            service: EditorService::with_project(project),
            clock: TimelineClock::new(),
            selected: Vec::new(),
        }
    }

    pub fn service(&self) -> &EditorService {
        &self.service
    }

    pub fn clock(&self) -> &TimelineClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut TimelineClock {
        &mut self.clock
    }

    /// Load a project and reset session state: the playhead rewinds and the
    /// selection clears, since neither survives a model swap.
    pub fn load_project(&mut self, json: &str) -> Result<Project, EditorError> {
        let project = self.service.load_project(json)?;
        self.clock.stop();
        self.selected.clear();
        Ok(project)
    }

    /// Advance the playhead by a frame delta (milliseconds).
    pub fn tick(&mut self, delta_ms: f64) {
        self.clock.tick(delta_ms);
    }

    /// Add a track using the session's timeline duration, the way the
    /// timeline panel does it.
    pub fn add_track(&self, element_id: Uuid, property: &str) -> Result<(), EditorError> {
        self.service
            .add_track(element_id, property, self.clock.duration())
    }

    /// Insert a keyframe for `property` at the current playhead position.
    pub fn add_keyframe_at_playhead(
        &self,
        element_id: Uuid,
        property: &str,
        value: PropertyValue,
    ) -> Result<(), EditorError> {
        let keyframe = Keyframe::new(self.clock.progress(), value);
        self.service.add_keyframe(element_id, property, keyframe)
    }

    // --- Selection ---

    pub fn selected_ids(&self) -> &[Uuid] {
        &self.selected
    }

    pub fn first_selected(&self) -> Option<Uuid> {
        self.selected.first().copied()
    }

    pub fn is_selected(&self, id: Uuid) -> bool {
        self.selected.contains(&id)
    }

    /// Select elements. Unknown ids are skipped with a warning; `multi`
    /// appends to the selection instead of replacing it.
    pub fn select(&mut self, ids: &[Uuid], multi: bool) -> Result<(), EditorError> {
        let mut valid = Vec::new();
        for id in ids {
            if self.service.get_element(*id)?.is_some() {
                valid.push(*id);
            } else {
                warn!("Element {id} does not exist");
            }
        }
        if valid.is_empty() {
            return Ok(());
        }
        if multi {
            for id in valid {
                if !self.selected.contains(&id) {
                    self.selected.push(id);
                }
            }
        } else {
            self.selected = valid;
        }
        Ok(())
    }

    pub fn deselect(&mut self, ids: &[Uuid]) {
        self.selected.retain(|id| !ids.contains(id));
    }

    pub fn toggle_selection(&mut self, id: Uuid) -> Result<(), EditorError> {
        if self.is_selected(id) {
            self.deselect(&[id]);
            Ok(())
        } else {
            self.select(&[id], true)
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Delete an element and drop it (and its subtree) from the selection.
    pub fn remove_element(&mut self, id: Uuid) -> Result<(), EditorError> {
        let removed = self.service.remove_element(id)?;
        self.selected.retain(|sel| !removed.contains(sel));
        Ok(())
    }

    // --- Sampling ---

    /// Resolve one element's style at the current playhead.
    ///
    /// A single read guard covers the whole read-evaluate cycle, so the
    /// snapshot observes one consistent model state. A missing element
    /// yields an empty snapshot.
    pub fn sample(&self, element_id: Uuid) -> Result<StyleSnapshot, EditorError> {
        let handle = self.service.project_handle();
        let proj = handle
            .read()
            .map_err(|_| EditorError::Runtime("Lock Poisoned".to_string()))?;
        Ok(proj
            .get_element(element_id)
            .map(|element| StyleSnapshotBuilder::build(&element.animation.tracks, self.clock.progress()))
            .unwrap_or_default())
    }

    /// Resolve every element's style at the current playhead under one read
    /// guard: all snapshots of a frame observe the same time and model
    /// state (no tearing within a frame).
    pub fn sample_all(&self) -> Result<Vec<(Uuid, StyleSnapshot)>, EditorError> {
        let handle = self.service.project_handle();
        let proj = handle
            .read()
            .map_err(|_| EditorError::Runtime("Lock Poisoned".to_string()))?;
        let progress = self.clock.progress();
        Ok(proj
            .data
            .elements
            .iter()
            .map(|element| {
                (
                    element.id,
                    StyleSnapshotBuilder::build(&element.animation.tracks, progress),
                )
            })
            .collect())
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
