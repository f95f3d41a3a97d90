use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog;
use crate::constants::{ELEMENT_DEFAULT_HEIGHT, ELEMENT_DEFAULT_WIDTH};
use crate::model::property::PropertyValue;
use crate::model::track::AnimationConfig;

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    #[default]
    Div,
    Span,
    Img,
    Custom,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Default for Size {
    fn default() -> Self {
        Self {
            width: ELEMENT_DEFAULT_WIDTH,
            height: ELEMENT_DEFAULT_HEIGHT,
        }
    }
}

/// One element on the canvas.
///
/// Ownership is strictly tree-shaped: an element owns its style map and its
/// `AnimationConfig`, which owns the tracks, which own their keyframes.
/// `parent_id`/`order` place the element in the scene tree; nothing is
/// shared across elements.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CanvasElement {
    pub id: Uuid,
    #[serde(rename = "type", default)]
    pub kind: ElementKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub style: BTreeMap<String, PropertyValue>,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub size: Size,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub locked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub animation: AnimationConfig,
}

fn default_visible() -> bool {
    true
}

impl CanvasElement {
    /// New element with the catalog's authoring defaults as its style.
    pub fn new(kind: ElementKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            name: None,
            style: catalog::default_style(),
            position: Position::default(),
            size: Size::default(),
            visible: true,
            locked: false,
            parent_id: None,
            order: 0,
            animation: AnimationConfig::default(),
        }
    }

    pub fn with_name(kind: ElementKind, name: &str) -> Self {
        let mut element = Self::new(kind);
        element.name = Some(name.to_string());
        element
    }

    pub fn style_value(&self, property: &str) -> Option<&PropertyValue> {
        self.style.get(property)
    }

    /// Numeric style lookup tolerating text values like `"100px"`.
    pub fn style_number(&self, property: &str, default: f64) -> f64 {
        self.style
            .get(property)
            .map(|v| v.to_number_lossy(default))
            .unwrap_or(default)
    }
}
