//! JSON-files-on-disk adapter, the desktop analog of the web editor's
//! local storage.
//!
//! Layout under the root directory: `projects/<uuid>.json` and
//! `presets/<id>.json`. Unreadable files are skipped with a warning when
//! listing; they never abort the whole listing.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use uuid::Uuid;

use crate::error::EditorError;
use crate::model::preset::PresetSchema;
use crate::model::project::Project;
use crate::storage::StorageAdapter;

pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, EditorError> {
        let root = root.into();
        fs::create_dir_all(root.join("projects"))?;
        fs::create_dir_all(root.join("presets"))?;
        Ok(Self { root })
    }

    fn project_path(&self, id: Uuid) -> PathBuf {
        self.root.join("projects").join(format!("{id}.json"))
    }

    fn preset_path(&self, id: &str) -> PathBuf {
        self.root.join("presets").join(format!("{id}.json"))
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>, EditorError> {
    if !path.exists() {
        return Ok(None);
    }
    let json = fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&json)?))
}

fn list_json<T: serde::de::DeserializeOwned>(dir: &Path) -> Result<Vec<T>, EditorError> {
    let mut items = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().is_none_or(|ext| ext != "json") {
            continue;
        }
        match fs::read_to_string(&path).map_err(EditorError::from).and_then(
            |json| serde_json::from_str::<T>(&json).map_err(EditorError::from),
        ) {
            Ok(item) => items.push(item),
            Err(err) => warn!("Skipping unreadable file {}: {err}", path.display()),
        }
    }
    Ok(items)
}

impl StorageAdapter for FileStorage {
    fn save_project(&mut self, project: &Project) -> Result<(), EditorError> {
        let json = serde_json::to_string_pretty(project)?;
        fs::write(self.project_path(project.id), json)?;
        Ok(())
    }

    fn load_project(&self, id: Uuid) -> Result<Option<Project>, EditorError> {
        read_json(&self.project_path(id))
    }

    fn list_projects(&self) -> Result<Vec<Project>, EditorError> {
        let mut projects: Vec<Project> = list_json(&self.root.join("projects"))?;
        projects.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(a.id.cmp(&b.id)));
        Ok(projects)
    }

    fn delete_project(&mut self, id: Uuid) -> Result<(), EditorError> {
        let path = self.project_path(id);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn save_preset(&mut self, preset: &PresetSchema) -> Result<(), EditorError> {
        if preset.id.is_empty() || !preset.id.chars().all(is_safe_id_char) {
            return Err(EditorError::Storage(format!(
                "Preset id '{}' is not filesystem-safe",
                preset.id
            )));
        }
        let json = serde_json::to_string_pretty(preset)?;
        fs::write(self.preset_path(&preset.id), json)?;
        Ok(())
    }

    fn load_preset(&self, id: &str) -> Result<Option<PresetSchema>, EditorError> {
        if !id.chars().all(is_safe_id_char) {
            return Ok(None);
        }
        read_json(&self.preset_path(id))
    }

    fn list_presets(&self) -> Result<Vec<PresetSchema>, EditorError> {
        let mut presets: Vec<PresetSchema> = list_json(&self.root.join("presets"))?;
        presets.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(presets)
    }

    fn delete_preset(&mut self, id: &str) -> Result<(), EditorError> {
        if !id.chars().all(is_safe_id_char) {
            return Ok(());
        }
        let path = self.preset_path(id);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

fn is_safe_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}
