//! In-memory adapter: the default for tests and headless use.

use std::collections::HashMap;

use uuid::Uuid;

use crate::error::EditorError;
use crate::model::preset::PresetSchema;
use crate::model::project::Project;
use crate::storage::StorageAdapter;

#[derive(Default)]
pub struct MemoryStorage {
    projects: HashMap<Uuid, Project>,
    presets: HashMap<String, PresetSchema>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageAdapter for MemoryStorage {
    fn save_project(&mut self, project: &Project) -> Result<(), EditorError> {
        self.projects.insert(project.id, project.clone());
        Ok(())
    }

    fn load_project(&self, id: Uuid) -> Result<Option<Project>, EditorError> {
        Ok(self.projects.get(&id).cloned())
    }

    fn list_projects(&self) -> Result<Vec<Project>, EditorError> {
        let mut projects: Vec<Project> = self.projects.values().cloned().collect();
        // Most recently updated first; id as tie-break keeps listing stable.
        projects.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(a.id.cmp(&b.id)));
        Ok(projects)
    }

    fn delete_project(&mut self, id: Uuid) -> Result<(), EditorError> {
        self.projects.remove(&id);
        Ok(())
    }

    fn save_preset(&mut self, preset: &PresetSchema) -> Result<(), EditorError> {
        self.presets.insert(preset.id.clone(), preset.clone());
        Ok(())
    }

    fn load_preset(&self, id: &str) -> Result<Option<PresetSchema>, EditorError> {
        Ok(self.presets.get(id).cloned())
    }

    fn list_presets(&self) -> Result<Vec<PresetSchema>, EditorError> {
        let mut presets: Vec<PresetSchema> = self.presets.values().cloned().collect();
        presets.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(presets)
    }

    fn delete_preset(&mut self, id: &str) -> Result<(), EditorError> {
        self.presets.remove(id);
        Ok(())
    }
}
