//! Error types for Drafter operations.
//!
//! This module provides the main error type [`DrafterError`] which wraps
//! the error conditions that can occur while building, validating, and
//! exporting a diagram. There is no recoverable tier: any error aborts the
//! whole run.

use std::io;

use thiserror::Error;

use crate::diagram::DiagramError;

/// The main error type for Drafter operations.
#[derive(Debug, Error)]
pub enum DrafterError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("diagram error: {0}")]
    Diagram(#[from] DiagramError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for DrafterError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
