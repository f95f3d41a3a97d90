use std::env;
use std::fs;

use animator::export::{CssExporter, HtmlExporter};
use animator::model::project::Project;
use animator::EditorError;

fn main() -> Result<(), EditorError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cli <project.json> [output-stem]");
        return Err(EditorError::InvalidArgument(
            "missing project file argument".to_string(),
        ));
    }

    let json = fs::read_to_string(&args[1])?;
    let project = Project::load(&json)?;
    let stem = args.get(2).map(String::as_str).unwrap_or("export");

    let css = CssExporter::generate_project(&project);
    fs::write(format!("{stem}.css"), &css)?;

    let html = HtmlExporter::generate(&project);
    fs::write(format!("{stem}.html"), &html)?;

    println!(
        "Exported '{}': {} elements, {} bytes of CSS -> {stem}.css, {stem}.html",
        project.name,
        project.data.elements.len(),
        css.len()
    );
    Ok(())
}
