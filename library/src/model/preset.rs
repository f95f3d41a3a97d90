use serde::{Deserialize, Serialize};

use crate::model::track::AnimationConfig;

/// A reusable animation preset: a complete `AnimationConfig` applied to an
/// element by replacing its current animation.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct PresetSchema {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub animation: AnimationConfig,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl PresetSchema {
    pub fn new(id: &str, name: &str, category: &str, animation: AnimationConfig) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            description: None,
            animation,
            tags: Vec::new(),
        }
    }
}
