use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::animation::EasingFunction;
use crate::constants::{
    ANIMATION_DEFAULT_DELAY, ANIMATION_DEFAULT_DURATION,
};
use crate::model::keyframe::Keyframe;

/// The keyframe timeline for one CSS property on one element.
///
/// Keyframes are kept sorted ascending by time after every mutation; the
/// sort is stable, so keyframes sharing a time keep their insertion order
/// (and the last-inserted one wins point queries).
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Track {
    pub property: String,
    #[serde(default)]
    pub keyframes: Vec<Keyframe>,
    #[serde(default = "default_duration")]
    pub duration: f64,
}

fn default_duration() -> f64 {
    ANIMATION_DEFAULT_DURATION
}

impl Track {
    pub fn new(property: &str, duration: f64) -> Self {
        Self {
            property: property.to_string(),
            keyframes: Vec::new(),
            duration,
        }
    }

    /// Restore the sorted-by-time invariant after an insert or update.
    pub fn sort_keyframes(&mut self) {
        self.keyframes.sort_by_key(|k| k.time);
    }
}

/// `animation-iteration-count`: a positive count or `infinite`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Iterations {
    Count(u32),
    Infinite,
}

impl Default for Iterations {
    fn default() -> Self {
        Iterations::Count(1)
    }
}

impl Iterations {
    pub fn to_css(&self) -> String {
        match self {
            Iterations::Count(n) => n.to_string(),
            Iterations::Infinite => "infinite".to_string(),
        }
    }
}

// JSON form is `number | "infinite"`, matching the exported project format.
impl Serialize for Iterations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Iterations::Count(n) => serializer.serialize_u32(*n),
            Iterations::Infinite => serializer.serialize_str("infinite"),
        }
    }
}

impl<'de> Deserialize<'de> for Iterations {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Count(u32),
            Keyword(String),
        }
        match Raw::deserialize(deserializer)? {
            Raw::Count(n) => Ok(Iterations::Count(n)),
            Raw::Keyword(s) if s == "infinite" => Ok(Iterations::Infinite),
            Raw::Keyword(s) => Err(D::Error::custom(format!(
                "invalid iteration count: {s}"
            ))),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PlayDirection {
    #[default]
    Normal,
    Reverse,
    Alternate,
    AlternateReverse,
}

impl PlayDirection {
    pub fn to_css(&self) -> &'static str {
        match self {
            PlayDirection::Normal => "normal",
            PlayDirection::Reverse => "reverse",
            PlayDirection::Alternate => "alternate",
            PlayDirection::AlternateReverse => "alternate-reverse",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FillMode {
    None,
    #[default]
    Forwards,
    Backwards,
    Both,
}

impl FillMode {
    pub fn to_css(&self) -> &'static str {
        match self {
            FillMode::None => "none",
            FillMode::Forwards => "forwards",
            FillMode::Backwards => "backwards",
            FillMode::Both => "both",
        }
    }
}

/// Timing metadata shared by all tracks of one element's animation.
///
/// Owned exclusively by its element; deleting the element destroys the
/// config together with its tracks and keyframes.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AnimationConfig {
    #[serde(default = "default_duration")]
    pub duration: f64,
    #[serde(default = "default_delay")]
    pub delay: f64,
    #[serde(default)]
    pub iterations: Iterations,
    #[serde(default)]
    pub direction: PlayDirection,
    #[serde(default)]
    pub fill_mode: FillMode,
    #[serde(default)]
    pub easing: EasingFunction,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

fn default_delay() -> f64 {
    ANIMATION_DEFAULT_DELAY
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration: ANIMATION_DEFAULT_DURATION,
            delay: ANIMATION_DEFAULT_DELAY,
            iterations: Iterations::default(),
            direction: PlayDirection::default(),
            fill_mode: FillMode::default(),
            easing: EasingFunction::default(),
            tracks: Vec::new(),
        }
    }
}

impl AnimationConfig {
    pub fn has_track(&self, property: &str) -> bool {
        self.tracks.iter().any(|t| t.property == property)
    }

    pub fn get_track(&self, property: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.property == property)
    }

    pub fn get_track_mut(&mut self, property: &str) -> Option<&mut Track> {
        self.tracks.iter_mut().find(|t| t.property == property)
    }

    /// Total number of keyframes across all tracks.
    pub fn keyframe_count(&self) -> usize {
        self.tracks.iter().map(|t| t.keyframes.len()).sum()
    }
}
