use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::animation::CubicBezier;
use crate::model::property::PropertyValue;

/// One sample point within a track.
///
/// `time` is a relative offset in `[0, 1]` within the track's duration, not
/// an absolute timestamp. `easing` overrides the track default for the
/// segment between this keyframe and the next one.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Keyframe {
    pub time: OrderedFloat<f64>,
    pub value: PropertyValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<CubicBezier>,
}

impl Keyframe {
    pub fn new(time: f64, value: impl Into<PropertyValue>) -> Self {
        Self {
            time: OrderedFloat(time),
            value: value.into(),
            easing: None,
        }
    }

    pub fn with_easing(time: f64, value: impl Into<PropertyValue>, easing: CubicBezier) -> Self {
        Self {
            time: OrderedFloat(time),
            value: value.into(),
            easing: Some(easing),
        }
    }

    pub fn time(&self) -> f64 {
        self.time.into_inner()
    }

    /// A keyframe time must be a finite fraction of the track duration.
    pub fn is_valid_time(time: f64) -> bool {
        time.is_finite() && (0.0..=1.0).contains(&time)
    }
}
