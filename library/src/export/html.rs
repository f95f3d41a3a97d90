//! Standalone HTML preview: the generated CSS plus absolutely positioned
//! element markup.

use crate::constants::ELEMENT_DEFAULT_BACKGROUND;
use crate::export::css::CssExporter;
use crate::model::project::Project;
use crate::util::format::format_number;

pub struct HtmlExporter;

impl HtmlExporter {
    pub fn generate(project: &Project) -> String {
        let css = CssExporter::generate(&project.data.elements);

        let mut html = String::from(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"UTF-8\">\n  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n  <title>CSS Animation</title>\n  <style>\n",
        );
        html.push_str(&css);
        html.push_str("  </style>\n</head>\n<body>\n");

        for element in &project.data.elements {
            // Width/height/background resolve from the authored style,
            // falling back to the element box and the default fill.
            let width = element.style_number("width", element.size.width);
            let height = element.style_number("height", element.size.height);
            let background = element
                .style_value("backgroundColor")
                .and_then(|v| v.as_text())
                .unwrap_or(ELEMENT_DEFAULT_BACKGROUND);

            html.push_str(&format!(
                "  <div id=\"element-{id}\" style=\"position: absolute; left: {left}px; top: {top}px; width: {width}px; height: {height}px; background: {background};\"></div>\n",
                id = element.id,
                left = format_number(element.position.x),
                top = format_number(element.position.y),
                width = format_number(width),
                height = format_number(height),
            ));
        }

        html.push_str("</body>\n</html>\n");
        html
    }
}
