//! Catalog of animatable CSS properties.
//!
//! The catalog is the single source of truth for unit suffixes, transform
//! membership and authoring defaults. The evaluation and export layers
//! consume it read-only; they never mutate it.

use std::collections::BTreeMap;

use crate::model::property::PropertyValue;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PropertyInput {
    Number,
    Color,
    Text,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum PropertyDefault {
    Number(f64),
    Text(&'static str),
}

impl PropertyDefault {
    pub fn to_value(self) -> PropertyValue {
        match self {
            PropertyDefault::Number(n) => PropertyValue::from(n),
            PropertyDefault::Text(s) => PropertyValue::from(s),
        }
    }
}

/// Static metadata for one animatable CSS property.
#[derive(Clone, Copy, Debug)]
pub struct AnimatableProperty {
    /// Property name as used on tracks (`translateX`, `opacity`, ...).
    pub name: &'static str,
    /// Display label for property panels.
    pub label: &'static str,
    pub input: PropertyInput,
    /// Unit suffix applied to numeric values (`px`, `deg`, or empty).
    pub unit: &'static str,
    pub default_value: PropertyDefault,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    pub group: &'static str,
}

/// All animatable properties, grouped the way the property panel lists them.
pub const ANIMATABLE_PROPERTIES: &[AnimatableProperty] = &[
    // Transform
    AnimatableProperty {
        name: "translateX",
        label: "Translate X",
        input: PropertyInput::Number,
        unit: "px",
        default_value: PropertyDefault::Number(0.0),
        min: None,
        max: None,
        step: Some(1.0),
        group: "Transform",
    },
    AnimatableProperty {
        name: "translateY",
        label: "Translate Y",
        input: PropertyInput::Number,
        unit: "px",
        default_value: PropertyDefault::Number(0.0),
        min: None,
        max: None,
        step: Some(1.0),
        group: "Transform",
    },
    AnimatableProperty {
        name: "scaleX",
        label: "Scale X",
        input: PropertyInput::Number,
        unit: "",
        default_value: PropertyDefault::Number(1.0),
        min: Some(0.0),
        max: None,
        step: Some(0.1),
        group: "Transform",
    },
    AnimatableProperty {
        name: "scaleY",
        label: "Scale Y",
        input: PropertyInput::Number,
        unit: "",
        default_value: PropertyDefault::Number(1.0),
        min: Some(0.0),
        max: None,
        step: Some(0.1),
        group: "Transform",
    },
    AnimatableProperty {
        name: "rotate",
        label: "Rotate",
        input: PropertyInput::Number,
        unit: "deg",
        default_value: PropertyDefault::Number(0.0),
        min: None,
        max: None,
        step: Some(1.0),
        group: "Transform",
    },
    AnimatableProperty {
        name: "skewX",
        label: "Skew X",
        input: PropertyInput::Number,
        unit: "deg",
        default_value: PropertyDefault::Number(0.0),
        min: None,
        max: None,
        step: Some(1.0),
        group: "Transform",
    },
    AnimatableProperty {
        name: "skewY",
        label: "Skew Y",
        input: PropertyInput::Number,
        unit: "deg",
        default_value: PropertyDefault::Number(0.0),
        min: None,
        max: None,
        step: Some(1.0),
        group: "Transform",
    },
    // Layout
    AnimatableProperty {
        name: "width",
        label: "Width",
        input: PropertyInput::Number,
        unit: "px",
        default_value: PropertyDefault::Number(100.0),
        min: Some(0.0),
        max: None,
        step: Some(1.0),
        group: "Layout",
    },
    AnimatableProperty {
        name: "height",
        label: "Height",
        input: PropertyInput::Number,
        unit: "px",
        default_value: PropertyDefault::Number(100.0),
        min: Some(0.0),
        max: None,
        step: Some(1.0),
        group: "Layout",
    },
    // Color
    AnimatableProperty {
        name: "color",
        label: "Text color",
        input: PropertyInput::Color,
        unit: "",
        default_value: PropertyDefault::Text("#000000"),
        min: None,
        max: None,
        step: None,
        group: "Color",
    },
    AnimatableProperty {
        name: "backgroundColor",
        label: "Background color",
        input: PropertyInput::Color,
        unit: "",
        default_value: PropertyDefault::Text("#ffffff"),
        min: None,
        max: None,
        step: None,
        group: "Color",
    },
    AnimatableProperty {
        name: "borderColor",
        label: "Border color",
        input: PropertyInput::Color,
        unit: "",
        default_value: PropertyDefault::Text("#000000"),
        min: None,
        max: None,
        step: None,
        group: "Color",
    },
    // Effects
    AnimatableProperty {
        name: "opacity",
        label: "Opacity",
        input: PropertyInput::Number,
        unit: "",
        default_value: PropertyDefault::Number(1.0),
        min: Some(0.0),
        max: Some(1.0),
        step: Some(0.01),
        group: "Effects",
    },
    AnimatableProperty {
        name: "borderRadius",
        label: "Border radius",
        input: PropertyInput::Number,
        unit: "px",
        default_value: PropertyDefault::Number(0.0),
        min: Some(0.0),
        max: None,
        step: Some(1.0),
        group: "Effects",
    },
    AnimatableProperty {
        name: "boxShadow",
        label: "Box shadow",
        input: PropertyInput::Text,
        unit: "",
        default_value: PropertyDefault::Text("none"),
        min: None,
        max: None,
        step: None,
        group: "Effects",
    },
    AnimatableProperty {
        name: "filter",
        label: "Filter",
        input: PropertyInput::Text,
        unit: "",
        default_value: PropertyDefault::Text("none"),
        min: None,
        max: None,
        step: None,
        group: "Effects",
    },
];

/// Canonical composition order for the CSS transform function family:
/// translate, scale, rotate, skew. Transform functions do not commute, so
/// the snapshot builder and the CSS exporter both emit in this order.
pub const TRANSFORM_PROPERTIES: &[&str] = &[
    "translateX",
    "translateY",
    "scaleX",
    "scaleY",
    "rotate",
    "skewX",
    "skewY",
];

pub fn property_config(name: &str) -> Option<&'static AnimatableProperty> {
    ANIMATABLE_PROPERTIES.iter().find(|p| p.name == name)
}

pub fn is_animatable(name: &str) -> bool {
    property_config(name).is_some()
}

/// Position of `name` in the canonical transform order, `None` for
/// non-transform properties.
pub fn transform_order(name: &str) -> Option<usize> {
    TRANSFORM_PROPERTIES.iter().position(|p| *p == name)
}

pub fn is_transform_property(name: &str) -> bool {
    transform_order(name).is_some()
}

pub fn properties_in_group(group: &str) -> impl Iterator<Item = &'static AnimatableProperty> {
    ANIMATABLE_PROPERTIES.iter().filter(move |p| p.group == group)
}

pub fn property_groups() -> Vec<&'static str> {
    let mut groups = Vec::new();
    for property in ANIMATABLE_PROPERTIES {
        if !groups.contains(&property.group) {
            groups.push(property.group);
        }
    }
    groups
}

/// Authoring defaults for a freshly created element's style map.
pub fn default_style() -> BTreeMap<String, PropertyValue> {
    ANIMATABLE_PROPERTIES
        .iter()
        .map(|p| (p.name.to_string(), p.default_value.to_value()))
        .collect()
}

/// Unit suffix for a property, empty for unknown or unitless properties.
pub fn unit_for(name: &str) -> &'static str {
    property_config(name).map(|p| p.unit).unwrap_or("")
}
