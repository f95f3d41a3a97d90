//! Export of the animation model to portable formats.
//!
//! CSS is the primary target; HTML wraps the CSS with element markup for a
//! standalone preview, JSON round-trips the whole project.

pub mod css;
pub mod html;
pub mod json;

pub use css::CssExporter;
pub use html::HtmlExporter;
pub use json::JsonExporter;
