//! Properties of the interpolator and the snapshot builder.

use animator::evaluation::interpolator::evaluate;
use animator::evaluation::snapshot::StyleSnapshotBuilder;
use animator::model::keyframe::Keyframe;
use animator::model::property::PropertyValue;
use animator::model::track::Track;

fn numeric_track(property: &str, points: &[(f64, f64)]) -> Track {
    let mut track = Track::new(property, 1000.0);
    for (time, value) in points {
        track.keyframes.push(Keyframe::new(*time, *value));
    }
    track
}

#[test]
fn test_exact_sample_points_return_exact_values() {
    let points = [(0.0, -180.0), (0.3, 45.0), (0.7, 10.5), (1.0, 0.0)];
    let track = numeric_track("rotate", &points);

    for (time, value) in points {
        assert_eq!(
            evaluate(&track.keyframes, time),
            Some(PropertyValue::from(value)),
            "no interpolation error allowed at t={time}"
        );
    }
}

#[test]
fn test_linear_interpolation_is_monotonic_and_bounded() {
    let track = numeric_track("opacity", &[(0.2, 10.0), (0.8, 90.0)]);

    let mut previous = f64::NEG_INFINITY;
    for step in 0..=20 {
        let progress = 0.2 + 0.6 * (step as f64 / 20.0);
        let value = evaluate(&track.keyframes, progress)
            .and_then(|v| v.as_number())
            .unwrap();
        assert!((10.0..=90.0).contains(&value), "value {value} out of bounds");
        assert!(value >= previous, "not monotonic at progress {progress}");
        previous = value;
    }
}

#[test]
fn test_progress_clamps_outside_keyframe_range() {
    let track = numeric_track("opacity", &[(0.25, 0.3), (0.75, 0.9)]);
    assert_eq!(
        evaluate(&track.keyframes, 0.0),
        Some(PropertyValue::from(0.3))
    );
    assert_eq!(
        evaluate(&track.keyframes, 1.0),
        Some(PropertyValue::from(0.9))
    );
}

#[test]
fn test_opacity_midpoint_scenario() {
    let track = numeric_track("opacity", &[(0.0, 0.0), (1.0, 1.0)]);
    assert_eq!(
        evaluate(&track.keyframes, 0.5),
        Some(PropertyValue::from(0.5))
    );
}

#[test]
fn test_zero_width_segment_holds_start_value() {
    let keyframes = vec![
        Keyframe::new(0.5, 1.0),
        Keyframe::new(0.5, 2.0),
    ];
    // Degenerate segment: no division by zero, last-inserted value wins.
    assert_eq!(evaluate(&keyframes, 0.5), Some(PropertyValue::from(2.0)));
}

#[test]
fn test_mixed_value_types_do_not_blend() {
    let mut track = Track::new("width", 1000.0);
    track.keyframes.push(Keyframe::new(0.0, 10.0));
    track.keyframes.push(Keyframe::new(1.0, "auto"));
    // Numeric-to-text segments hold the start value instead of inventing
    // a blend.
    assert_eq!(
        evaluate(&track.keyframes, 0.5),
        Some(PropertyValue::from(10.0))
    );
}

#[test]
fn test_snapshot_composes_transform_and_plain_properties() {
    let tracks = vec![
        numeric_track("rotate", &[(0.0, 0.0), (1.0, 180.0)]),
        numeric_track("translateX", &[(0.0, 0.0), (1.0, 100.0)]),
        numeric_track("opacity", &[(0.0, 0.0), (1.0, 1.0)]),
    ];

    let snapshot = StyleSnapshotBuilder::build(&tracks, 0.5);
    // Canonical order: translate before rotate, regardless of track order.
    assert_eq!(snapshot.transform, "translateX(50px) rotate(90deg)");
    assert_eq!(snapshot.style.get("opacity").unwrap(), "0.5");
    assert!(snapshot.style.get("transform").is_none());
}

#[test]
fn test_snapshot_of_empty_track_list_is_empty() {
    let snapshot = StyleSnapshotBuilder::build(&[], 0.5);
    assert!(snapshot.is_empty());
}
