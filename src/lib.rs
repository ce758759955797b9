//! Drafter renders the built-in smart-helpdesk diagrams to PNG files.
//!
//! Each run is a one-shot, single-pass pipeline with no external input:
//!
//! 1. assemble a built-in [`diagram::Diagram`] from literal constants,
//! 2. validate its structural invariants,
//! 3. compose the SVG scene,
//! 4. rasterize to PNG and write the file.
//!
//! Any failure along the way aborts the run; there is no retry tier.

pub mod builtin;
pub mod canvas;
pub mod color;
pub mod config;
pub mod diagram;
pub mod error;
pub mod export;
pub mod geometry;

mod args;
mod text;

pub use args::Args;
pub use error::DrafterError;

use std::{fs, path::Path};

use log::{debug, info};

use crate::{color::Color, diagram::Diagram, export::svg::Svg};

/// Run the Drafter application.
///
/// Renders the selected built-in diagrams and writes one PNG per diagram
/// into the output directory.
///
/// # Errors
///
/// Returns [`DrafterError`] for:
/// - Configuration loading errors
/// - Diagram validation errors
/// - Rendering and rasterization errors
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), DrafterError> {
    let app_config = config::load_config(args.config.as_ref())?;

    let background = app_config
        .style()
        .background_color()
        .map_err(DrafterError::Config)?
        .unwrap_or_else(|| Color::new("white").expect("'white' is a valid CSS color"));
    let scale = app_config.raster().scale();

    let diagrams = select_diagrams(args.diagram.as_deref())?;

    for diagram in diagrams {
        info!(
            title = diagram.title(),
            output_dir = args.output_dir;
            "Rendering diagram"
        );

        diagram.validate()?;
        debug!(
            entities_len = diagram.entities().len(),
            connections_len = diagram.connections().len();
            "Diagram validated"
        );

        let exporter = Svg::new(background);
        let document = exporter.render_diagram(&diagram)?;

        let png = export::raster::svg_to_png(&document.to_string(), scale)
            .map_err(export::Error::Raster)?;

        let output_path = Path::new(&args.output_dir).join(diagram.canvas().file_name());
        fs::write(&output_path, png)?;

        info!(output_file = output_path.display().to_string(); "PNG exported successfully");
    }

    Ok(())
}

/// Resolves the diagram selector into the diagrams to render.
fn select_diagrams(selector: Option<&str>) -> Result<Vec<Diagram>, DrafterError> {
    match selector {
        None => Ok(vec![builtin::architecture(), builtin::workflow()]),
        Some("architecture") => Ok(vec![builtin::architecture()]),
        Some("workflow") => Ok(vec![builtin::workflow()]),
        Some(other) => Err(DrafterError::Config(format!(
            "unknown diagram `{other}`, expected `architecture` or `workflow`"
        ))),
    }
}
