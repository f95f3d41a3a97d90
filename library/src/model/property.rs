use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// A style or keyframe value: a plain number or a CSS text fragment.
///
/// Numbers are unit-less in the model; unit suffixes come from the property
/// catalog when a value is rendered. Text values (colors, keywords,
/// shorthand strings) are carried verbatim and never interpolated.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(untagged)]
pub enum PropertyValue {
    Number(OrderedFloat<f64>),
    Text(String),
}

impl PropertyValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(n) => Some(n.into_inner()),
            PropertyValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s.as_str()),
            PropertyValue::Number(_) => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, PropertyValue::Number(_))
    }

    /// Numeric view that also understands text like `"100px"` or `"1.5"`,
    /// falling back to `default` when nothing parses.
    pub fn to_number_lossy(&self, default: f64) -> f64 {
        match self {
            PropertyValue::Number(n) => n.into_inner(),
            PropertyValue::Text(s) => parse_leading_number(s).unwrap_or(default),
        }
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(OrderedFloat(value))
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

fn parse_leading_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let end = trimmed
        .char_indices()
        .take_while(|(i, c)| {
            c.is_ascii_digit() || *c == '.' || ((*c == '-' || *c == '+') && *i == 0)
        })
        .map(|(i, c)| i + c.len_utf8())
        .last()?;
    trimmed[..end].parse().ok()
}
