//! Generation of standards-compliant `@keyframes` and usage rules.
//!
//! Stops are evaluated through the same interpolator and snapshot builder
//! as the live preview, so the exported CSS matches what the canvas shows
//! at every sampled time point.

use crate::animation::CubicBezier;
use crate::evaluation::snapshot::StyleSnapshotBuilder;
use crate::model::element::CanvasElement;
use crate::model::project::Project;
use crate::model::track::Track;
use crate::util::format::format_number;

pub struct CssExporter;

impl CssExporter {
    /// Generate the stylesheet for a set of elements.
    ///
    /// Elements without any keyframe contribute nothing: an empty
    /// `@keyframes` block is invalid CSS, so both the block and its usage
    /// rule are omitted. Output is deterministic; repeated calls on an
    /// unchanged model are byte-identical.
    pub fn generate(elements: &[CanvasElement]) -> String {
        let mut css = String::new();
        for element in elements {
            let Some(block) = keyframes_block(element) else {
                continue;
            };
            css.push_str(&block);
            css.push('\n');
            css.push_str(&usage_rule(element));
            css.push('\n');
        }
        css
    }

    pub fn generate_project(project: &Project) -> String {
        Self::generate(&project.data.elements)
    }

    /// Animation name derived from the element id: stable across calls,
    /// never regenerated randomly.
    pub fn animation_name(element: &CanvasElement) -> String {
        format!("animation-{}", element.id)
    }
}

fn keyframes_block(element: &CanvasElement) -> Option<String> {
    let tracks = &element.animation.tracks;

    // One stop per keyframe across all tracks, ascending. Duplicate times
    // are kept: equal-percentage lines are emitted in time order and CSS
    // lets the later one win, matching the evaluator's last-wins tie-break.
    let mut stops: Vec<f64> = tracks
        .iter()
        .flat_map(|t| t.keyframes.iter().map(|k| k.time()))
        .collect();
    stops.sort_by(|a, b| a.total_cmp(b));
    if stops.is_empty() {
        return None;
    }

    let mut block = format!("@keyframes {} {{\n", CssExporter::animation_name(element));
    for progress in &stops {
        let snapshot = StyleSnapshotBuilder::build(tracks, *progress);

        let mut parts: Vec<String> = snapshot
            .style
            .iter()
            .map(|(property, value)| format!("{}: {};", css_property_name(property), value))
            .collect();
        if !snapshot.transform.is_empty() {
            parts.push(format!("transform: {};", snapshot.transform));
        }
        if let Some(easing) = stop_easing(tracks, *progress) {
            parts.push(format!("animation-timing-function: {};", easing.to_css()));
        }

        let percentage = (progress * 100.0).round();
        block.push_str(&format!(
            "  {}% {{ {} }}\n",
            format_number(percentage),
            parts.join(" ")
        ));
    }
    block.push_str("}\n");
    Some(block)
}

fn usage_rule(element: &CanvasElement) -> String {
    let animation = &element.animation;
    format!(
        "#element-{id} {{\n  animation-name: {name};\n  animation-duration: {duration}ms;\n  animation-timing-function: {easing};\n  animation-delay: {delay}ms;\n  animation-iteration-count: {iterations};\n  animation-direction: {direction};\n  animation-fill-mode: {fill_mode};\n}}\n",
        id = element.id,
        name = CssExporter::animation_name(element),
        duration = format_number(animation.duration),
        easing = animation.easing.to_css(),
        delay = format_number(animation.delay),
        iterations = animation.iterations.to_css(),
        direction = animation.direction.to_css(),
        fill_mode = animation.fill_mode.to_css(),
    )
}

/// Per-segment easing override active at a stop, if any keyframe sitting
/// exactly on that time carries one (last one wins, like evaluation).
///
/// A stop-level `animation-timing-function` applies to every property until
/// the next stop; per-property easing across misaligned tracks cannot be
/// expressed in a single `@keyframes` block, so aligned keyframes are the
/// supported case.
fn stop_easing(tracks: &[Track], progress: f64) -> Option<CubicBezier> {
    let mut found = None;
    for track in tracks {
        for keyframe in &track.keyframes {
            if keyframe.time() == progress {
                if let Some(easing) = keyframe.easing {
                    found = Some(easing);
                }
            }
        }
    }
    found
}

/// Model property names are camelCase (`backgroundColor`); CSS wants
/// kebab-case (`background-color`).
fn css_property_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_names_are_kebab_cased() {
        assert_eq!(css_property_name("backgroundColor"), "background-color");
        assert_eq!(css_property_name("opacity"), "opacity");
        assert_eq!(css_property_name("borderRadius"), "border-radius");
    }
}
