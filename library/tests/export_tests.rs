//! CSS/HTML/JSON export contracts.

use animator::animation::CubicBezier;
use animator::export::{CssExporter, HtmlExporter, JsonExporter};
use animator::model::element::{CanvasElement, ElementKind};
use animator::model::keyframe::Keyframe;
use animator::model::project::Project;
use animator::model::property::PropertyValue;
use animator::model::track::{Iterations, PlayDirection, Track};

fn element_with_track(property: &str, points: &[(f64, f64)], duration: f64) -> CanvasElement {
    let mut element = CanvasElement::new(ElementKind::Div);
    element.animation.duration = duration;
    let mut track = Track::new(property, duration);
    for (time, value) in points {
        track.keyframes.push(Keyframe::new(*time, *value));
    }
    element.animation.tracks.push(track);
    element
}

#[test]
fn test_rotate_track_exports_expected_keyframes() {
    let element = element_with_track("rotate", &[(0.0, -180.0), (1.0, 0.0)], 1000.0);
    let name = CssExporter::animation_name(&element);
    let css = CssExporter::generate(std::slice::from_ref(&element));

    assert!(css.contains(&format!("@keyframes {name} {{")), "css:\n{css}");
    assert!(css.contains("0% { transform: rotate(-180deg); }"), "css:\n{css}");
    assert!(css.contains("100% { transform: rotate(0deg); }"), "css:\n{css}");
    assert!(css.contains(&format!("#element-{} {{", element.id)));
    assert!(css.contains("animation-duration: 1000ms;"));
}

#[test]
fn test_usage_rule_carries_animation_config() {
    let mut element = element_with_track("opacity", &[(0.0, 0.0), (1.0, 1.0)], 2500.0);
    element.animation.delay = 300.0;
    element.animation.iterations = Iterations::Infinite;
    element.animation.direction = PlayDirection::AlternateReverse;

    let css = CssExporter::generate(std::slice::from_ref(&element));
    assert!(css.contains(&format!("animation-name: animation-{};", element.id)));
    assert!(css.contains("animation-duration: 2500ms;"));
    assert!(css.contains("animation-timing-function: ease-in-out;"));
    assert!(css.contains("animation-delay: 300ms;"));
    assert!(css.contains("animation-iteration-count: infinite;"));
    assert!(css.contains("animation-direction: alternate-reverse;"));
    assert!(css.contains("animation-fill-mode: forwards;"));
}

#[test]
fn test_elements_without_keyframes_are_omitted_entirely() {
    // No tracks at all.
    let empty = CanvasElement::new(ElementKind::Div);
    // A track whose keyframe list is empty is just as invalid to emit.
    let mut trackless = CanvasElement::new(ElementKind::Div);
    trackless.animation.tracks.push(Track::new("opacity", 1000.0));

    let css = CssExporter::generate(&[empty, trackless]);
    assert!(!css.contains("@keyframes"), "css:\n{css}");
    assert!(!css.contains("#element-"), "no dangling usage rules");
}

#[test]
fn test_generate_is_idempotent() {
    let mut element = element_with_track("translateX", &[(0.0, 0.0), (0.5, 120.0), (1.0, 40.0)], 1000.0);
    let mut opacity = Track::new("opacity", 1000.0);
    opacity.keyframes.push(Keyframe::new(0.0, 1.0));
    opacity.keyframes.push(Keyframe::new(1.0, 0.0));
    element.animation.tracks.push(opacity);

    let elements = [element];
    let first = CssExporter::generate(&elements);
    let second = CssExporter::generate(&elements);
    assert_eq!(first, second, "unchanged model must export byte-identically");
}

#[test]
fn test_multi_track_stops_contain_full_snapshots() {
    // Tracks with different keyframe times: every stop carries the full
    // interpolated style so the exported CSS matches the live preview.
    let mut element = element_with_track("translateX", &[(0.0, 0.0), (1.0, 100.0)], 1000.0);
    let mut opacity = Track::new("opacity", 1000.0);
    opacity.keyframes.push(Keyframe::new(0.5, 0.2));
    element.animation.tracks.push(opacity);

    let css = CssExporter::generate(std::slice::from_ref(&element));
    assert!(
        css.contains("50% { opacity: 0.2; transform: translateX(50px); }"),
        "css:\n{css}"
    );
}

#[test]
fn test_equal_percentage_stops_emit_in_time_order() {
    let mut element = CanvasElement::new(ElementKind::Div);
    let mut track = Track::new("opacity", 1000.0);
    track.keyframes.push(Keyframe::new(0.5, 0.1));
    track.keyframes.push(Keyframe::new(0.5, 0.9));
    element.animation.tracks.push(track);

    let css = CssExporter::generate(std::slice::from_ref(&element));
    // Both stops are present; evaluation is last-wins, so both lines carry
    // the winning value and CSS lets the later line win.
    assert_eq!(css.matches("50% {").count(), 2, "css:\n{css}");
}

#[test]
fn test_segment_easing_is_emitted_at_its_stop() {
    let mut element = CanvasElement::new(ElementKind::Div);
    let mut track = Track::new("opacity", 1000.0);
    track
        .keyframes
        .push(Keyframe::with_easing(0.0, 0.0, CubicBezier::new(0.4, 0.0, 0.2, 1.0)));
    track.keyframes.push(Keyframe::new(1.0, 1.0));
    element.animation.tracks.push(track);

    let css = CssExporter::generate(std::slice::from_ref(&element));
    assert!(
        css.contains("0% { opacity: 0; animation-timing-function: cubic-bezier(0.4, 0, 0.2, 1); }"),
        "css:\n{css}"
    );
}

#[test]
fn test_html_export_wraps_css_and_positions_elements() {
    let mut project = Project::new("Demo");
    let mut element = element_with_track("opacity", &[(0.0, 0.0), (1.0, 1.0)], 1000.0);
    element.position.x = 25.0;
    element.position.y = 75.0;
    element
        .style
        .insert("backgroundColor".to_string(), PropertyValue::from("#ff8800"));
    project.data.elements.push(element);

    let html = HtmlExporter::generate(&project);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("@keyframes"), "embeds the generated CSS");
    assert!(html.contains(&format!("id=\"element-{}\"", project.data.elements[0].id)));
    assert!(html.contains("position: absolute; left: 25px; top: 75px;"));
    assert!(html.contains("width: 100px; height: 100px;"));
    assert!(html.contains("background: #ff8800;"));
}

#[test]
fn test_json_export_roundtrips_the_project() {
    let mut project = Project::new("Roundtrip");
    project
        .data
        .elements
        .push(element_with_track("rotate", &[(0.0, 0.0), (1.0, 360.0)], 1000.0));

    let json = JsonExporter::export(&project).unwrap();
    let restored = JsonExporter::import(&json).unwrap();
    assert_eq!(project, restored);

    assert!(JsonExporter::import("{ not json").is_err());
}
