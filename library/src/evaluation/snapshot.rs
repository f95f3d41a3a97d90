use std::collections::BTreeMap;

use crate::catalog;
use crate::evaluation::interpolator;
use crate::model::property::PropertyValue;
use crate::model::track::Track;
use crate::util::format::{format_number, format_with_unit};

/// The fully resolved style of one element at one instant.
///
/// `style` maps plain CSS properties to rendered value text; the transform
/// function family is folded into the single `transform` string.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct StyleSnapshot {
    pub style: BTreeMap<String, String>,
    pub transform: String,
}

impl StyleSnapshot {
    pub fn is_empty(&self) -> bool {
        self.style.is_empty() && self.transform.is_empty()
    }
}

/// Composes per-track interpolated values into style snapshots.
///
/// Stateless by design: the render/tick loop calls `build` on demand, there
/// is no dependency graph to invalidate.
pub struct StyleSnapshotBuilder;

impl StyleSnapshotBuilder {
    /// Evaluate every track at `progress` and compose the result.
    ///
    /// Transform-family properties are emitted in the catalog's canonical
    /// order (translate, scale, rotate, skew) regardless of track order.
    /// Unit suffixes come from the property catalog. Opacity is clamped to
    /// `[0, 1]`; the model authors opacity on that scale already, so the
    /// clamp is the only conversion and it happens only here.
    pub fn build(tracks: &[Track], progress: f64) -> StyleSnapshot {
        let mut style = BTreeMap::new();
        let mut transform_parts: Vec<(usize, String)> = Vec::new();

        for track in tracks {
            let Some(value) = interpolator::evaluate(&track.keyframes, progress) else {
                continue;
            };

            match catalog::transform_order(&track.property) {
                Some(order) => {
                    let argument = render_transform_argument(&track.property, &value);
                    transform_parts.push((order, format!("{}({})", track.property, argument)));
                }
                None => {
                    style.insert(
                        track.property.clone(),
                        render_style_value(&track.property, &value),
                    );
                }
            }
        }

        transform_parts.sort_by_key(|(order, _)| *order);
        let transform = transform_parts
            .into_iter()
            .map(|(_, part)| part)
            .collect::<Vec<_>>()
            .join(" ");

        StyleSnapshot { style, transform }
    }
}

fn render_transform_argument(property: &str, value: &PropertyValue) -> String {
    match value {
        PropertyValue::Number(n) => format_with_unit(n.into_inner(), catalog::unit_for(property)),
        PropertyValue::Text(s) => s.clone(),
    }
}

fn render_style_value(property: &str, value: &PropertyValue) -> String {
    match value {
        PropertyValue::Number(n) => {
            let n = n.into_inner();
            if property == "opacity" {
                format_number(n.clamp(0.0, 1.0))
            } else {
                format_with_unit(n, catalog::unit_for(property))
            }
        }
        PropertyValue::Text(s) => s.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::keyframe::Keyframe;

    fn track(property: &str, keyframes: Vec<Keyframe>) -> Track {
        Track {
            property: property.to_string(),
            keyframes,
            duration: 1000.0,
        }
    }

    #[test]
    fn transform_functions_compose_in_canonical_order() {
        // Authored out of order: rotate before translate.
        let tracks = vec![
            track("rotate", vec![Keyframe::new(0.0, 90.0)]),
            track("translateX", vec![Keyframe::new(0.0, 10.0)]),
            track("scaleX", vec![Keyframe::new(0.0, 2.0)]),
        ];
        let snapshot = StyleSnapshotBuilder::build(&tracks, 0.0);
        assert_eq!(snapshot.transform, "translateX(10px) scaleX(2) rotate(90deg)");
        assert!(snapshot.style.is_empty());
    }

    #[test]
    fn units_come_from_the_catalog() {
        let tracks = vec![
            track("width", vec![Keyframe::new(0.0, 50.0), Keyframe::new(1.0, 150.0)]),
            track("borderRadius", vec![Keyframe::new(0.0, 8.0)]),
        ];
        let snapshot = StyleSnapshotBuilder::build(&tracks, 0.5);
        assert_eq!(snapshot.style.get("width").unwrap(), "100px");
        assert_eq!(snapshot.style.get("borderRadius").unwrap(), "8px");
    }

    #[test]
    fn opacity_is_clamped_to_unit_range() {
        let tracks = vec![track("opacity", vec![Keyframe::new(0.0, 1.4)])];
        let snapshot = StyleSnapshotBuilder::build(&tracks, 0.0);
        assert_eq!(snapshot.style.get("opacity").unwrap(), "1");
    }

    #[test]
    fn empty_tracks_produce_an_empty_snapshot() {
        let tracks = vec![track("opacity", Vec::new())];
        let snapshot = StyleSnapshotBuilder::build(&tracks, 0.5);
        assert!(snapshot.is_empty());
    }
}
