//! Exporters for rendered diagrams.
//!
//! [`svg`] assembles the SVG scene from a validated diagram; [`raster`]
//! turns that scene into PNG bytes.

pub mod raster;
pub mod svg;

use thiserror::Error;

/// Errors raised while exporting a diagram.
///
/// File writes happen in [`crate::run`] after export, so I/O failures are
/// not represented here.
#[derive(Debug, Error)]
pub enum Error {
    #[error("render error: {0}")]
    Render(String),

    #[error("raster error: {0}")]
    Raster(#[from] raster::RasterError),
}
