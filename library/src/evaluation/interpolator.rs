use ordered_float::OrderedFloat;

use crate::model::keyframe::Keyframe;
use crate::model::property::PropertyValue;

/// Linear interpolation between two numbers.
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}

/// Evaluate a track's keyframes at `progress` (a `[0, 1]` fraction of the
/// track duration).
///
/// Input keyframes need not be pre-sorted; a working copy of references is
/// sorted ascending by time. The sort is stable, and the bracketing keyframe
/// is picked as the last one with `time <= progress`, so when several
/// keyframes share a time the last-inserted one wins.
///
/// Outside the keyframe range the nearest endpoint value is returned
/// unchanged (clamping, no extrapolation). Numeric pairs interpolate
/// linearly, remapped through the start keyframe's easing curve when one is
/// set. If either endpoint is non-numeric the segment is a step function
/// holding the start value; string values (colors, keywords) are never
/// blended.
pub fn evaluate(keyframes: &[Keyframe], progress: f64) -> Option<PropertyValue> {
    if keyframes.is_empty() || progress.is_nan() {
        return None;
    }

    let mut sorted: Vec<&Keyframe> = keyframes.iter().collect();
    sorted.sort_by_key(|k| k.time);

    let first = sorted[0];
    let last = sorted[sorted.len() - 1];

    // Clamp instead of extrapolating, then bracket. NaN-tolerant comparisons:
    // a malformed time never panics, it just falls back to the first value.
    let mut progress = progress;
    if progress < first.time() {
        progress = first.time();
    }
    if progress > last.time() {
        progress = last.time();
    }

    let Some(current_idx) = sorted.iter().rposition(|k| k.time() <= progress) else {
        return Some(first.value.clone());
    };
    let current = sorted[current_idx];

    if current_idx + 1 >= sorted.len() {
        return Some(current.value.clone());
    }
    let next = sorted[current_idx + 1];

    // Zero-width segment: hold the start value.
    let span = next.time() - current.time();
    if span <= 1e-9 {
        return Some(current.value.clone());
    }
    let t = (progress - current.time()) / span;

    match (&current.value, &next.value) {
        (PropertyValue::Number(start), PropertyValue::Number(end)) => {
            let eased = match &current.easing {
                Some(curve) => curve.apply(t),
                None => t,
            };
            Some(PropertyValue::Number(OrderedFloat(lerp(
                start.into_inner(),
                end.into_inner(),
                eased,
            ))))
        }
        _ => Some(current.value.clone()),
    }
}
