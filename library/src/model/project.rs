use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{
    CANVAS_DEFAULT_BACKGROUND_COLOR, CANVAS_DEFAULT_GRID_SIZE, CANVAS_DEFAULT_HEIGHT,
    CANVAS_DEFAULT_WIDTH,
};
use crate::error::EditorError;
use crate::model::element::CanvasElement;

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSettings {
    #[serde(default = "default_canvas_width")]
    pub canvas_width: f64,
    #[serde(default = "default_canvas_height")]
    pub canvas_height: f64,
    #[serde(default = "default_background_color")]
    pub background_color: String,
    #[serde(default = "default_grid_size")]
    pub grid_size: f64,
    #[serde(default = "default_show_grid")]
    pub show_grid: bool,
    #[serde(default = "default_show_ruler")]
    pub show_ruler: bool,
}

fn default_canvas_width() -> f64 {
    CANVAS_DEFAULT_WIDTH
}

fn default_canvas_height() -> f64 {
    CANVAS_DEFAULT_HEIGHT
}

fn default_background_color() -> String {
    CANVAS_DEFAULT_BACKGROUND_COLOR.to_string()
}

fn default_grid_size() -> f64 {
    CANVAS_DEFAULT_GRID_SIZE
}

fn default_show_grid() -> bool {
    true
}

fn default_show_ruler() -> bool {
    true
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_DEFAULT_WIDTH,
            canvas_height: CANVAS_DEFAULT_HEIGHT,
            background_color: CANVAS_DEFAULT_BACKGROUND_COLOR.to_string(),
            grid_size: CANVAS_DEFAULT_GRID_SIZE,
            show_grid: true,
            show_ruler: true,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct ProjectData {
    #[serde(default)]
    pub elements: Vec<CanvasElement>,
    #[serde(default)]
    pub settings: ProjectSettings,
}

/// A saved editing project: metadata plus the element tree.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: u64,
    #[serde(default)]
    pub updated_at: u64,
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub data: ProjectData,
}

fn default_version() -> u32 {
    1
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

impl Project {
    pub fn new(name: &str) -> Self {
        let now = now_ms();
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            created_at: now,
            updated_at: now,
            version: 1,
            data: ProjectData::default(),
        }
    }

    pub fn save(&self) -> Result<String, EditorError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(json: &str) -> Result<Self, EditorError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Bump the modification timestamp. Called by mutating handlers.
    pub fn touch(&mut self) {
        self.updated_at = now_ms();
    }

    pub fn has_element(&self, id: Uuid) -> bool {
        self.data.elements.iter().any(|e| e.id == id)
    }

    pub fn get_element(&self, id: Uuid) -> Option<&CanvasElement> {
        self.data.elements.iter().find(|e| e.id == id)
    }

    pub fn get_element_mut(&mut self, id: Uuid) -> Option<&mut CanvasElement> {
        self.data.elements.iter_mut().find(|e| e.id == id)
    }

    /// Children of `parent` (roots for `None`), sorted by their `order`.
    pub fn children_of(&self, parent: Option<Uuid>) -> Vec<&CanvasElement> {
        let mut children: Vec<&CanvasElement> = self
            .data
            .elements
            .iter()
            .filter(|e| e.parent_id == parent)
            .collect();
        children.sort_by_key(|e| e.order);
        children
    }
}
