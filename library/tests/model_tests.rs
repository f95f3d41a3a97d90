use animator::animation::{CubicBezier, EasingFunction};
use animator::model::element::{CanvasElement, ElementKind};
use animator::model::keyframe::Keyframe;
use animator::model::project::Project;
use animator::model::property::PropertyValue;
use animator::model::track::{AnimationConfig, FillMode, Iterations, PlayDirection, Track};

#[test]
fn test_project_serialization_roundtrip() {
    let mut project = Project::new("Test Project");
    project.description = Some("Fixture".to_string());

    let mut element = CanvasElement::with_name(ElementKind::Div, "Hero");
    element.position.x = 40.0;
    element.position.y = 60.0;
    element.animation.duration = 1000.0;
    element.animation.iterations = Iterations::Infinite;
    element.animation.direction = PlayDirection::Alternate;
    element.animation.fill_mode = FillMode::Both;
    element.animation.easing = EasingFunction::EaseOut;

    let mut track = Track::new("opacity", 1000.0);
    track.keyframes.push(Keyframe::new(0.0, 0.0));
    track
        .keyframes
        .push(Keyframe::with_easing(0.5, 0.8, CubicBezier::EASE_IN));
    track.keyframes.push(Keyframe::new(1.0, 1.0));
    element.animation.tracks.push(track);

    let mut color_track = Track::new("backgroundColor", 1000.0);
    color_track.keyframes.push(Keyframe::new(0.0, "#ff0000"));
    color_track.keyframes.push(Keyframe::new(1.0, "#0000ff"));
    element.animation.tracks.push(color_track);

    project.data.elements.push(element);

    let json = project.save().expect("Failed to serialize project");
    let loaded = Project::load(&json).expect("Failed to deserialize project");

    assert_eq!(project, loaded, "Roundtrip failed: projects are not equal");
    assert_eq!(loaded.data.elements.len(), 1);
    assert_eq!(loaded.data.elements[0].animation.tracks.len(), 2);
    assert_eq!(loaded.data.elements[0].animation.keyframe_count(), 5);
}

#[test]
fn test_keyframe_easing_is_optional_in_json() {
    let plain = Keyframe::new(0.25, 10.0);
    let json = serde_json::to_string(&plain).unwrap();
    assert!(
        !json.contains("easing"),
        "plain keyframe should omit easing: {json}"
    );

    let eased = Keyframe::with_easing(0.25, 10.0, CubicBezier::new(0.4, 0.0, 0.2, 1.0));
    let json = serde_json::to_string(&eased).unwrap();
    let back: Keyframe = serde_json::from_str(&json).unwrap();
    assert_eq!(back, eased);
}

#[test]
fn test_iterations_serialize_as_number_or_keyword() {
    let config = AnimationConfig {
        iterations: Iterations::Count(3),
        ..AnimationConfig::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"iterations\":3"), "got: {json}");

    let config = AnimationConfig {
        iterations: Iterations::Infinite,
        ..AnimationConfig::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"iterations\":\"infinite\""), "got: {json}");

    let back: AnimationConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.iterations, Iterations::Infinite);
}

#[test]
fn test_easing_serializes_as_css_text() {
    let json = serde_json::to_string(&EasingFunction::EaseInOut).unwrap();
    assert_eq!(json, "\"ease-in-out\"");

    let curve = EasingFunction::CubicBezier(CubicBezier::new(0.4, 0.0, 0.2, 1.0));
    let json = serde_json::to_string(&curve).unwrap();
    let back: EasingFunction = serde_json::from_str(&json).unwrap();
    assert_eq!(back, curve);
}

#[test]
fn test_config_defaults_fill_missing_fields() {
    // A minimal stored track/config must load with the documented defaults.
    let track: Track = serde_json::from_str(r#"{ "property": "opacity" }"#).unwrap();
    assert_eq!(track.property, "opacity");
    assert!(track.keyframes.is_empty());
    assert_eq!(track.duration, 3000.0);

    let config: AnimationConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config.duration, 3000.0);
    assert_eq!(config.delay, 0.0);
    assert_eq!(config.iterations, Iterations::Count(1));
    assert_eq!(config.direction, PlayDirection::Normal);
    assert_eq!(config.fill_mode, FillMode::Forwards);
    assert_eq!(config.easing, EasingFunction::EaseInOut);
}

#[test]
fn test_property_value_accepts_numbers_and_text() {
    let number: PropertyValue = serde_json::from_str("42.5").unwrap();
    assert_eq!(number.as_number(), Some(42.5));

    let text: PropertyValue = serde_json::from_str("\"#18a058\"").unwrap();
    assert_eq!(text.as_text(), Some("#18a058"));
}

#[test]
fn test_element_style_defaults_come_from_catalog() {
    let element = CanvasElement::new(ElementKind::Div);
    assert_eq!(
        element.style.get("opacity"),
        Some(&PropertyValue::from(1.0))
    );
    assert_eq!(
        element.style.get("backgroundColor"),
        Some(&PropertyValue::from("#ffffff"))
    );
    assert_eq!(element.style_number("width", 0.0), 100.0);
}
