//! Optional style configuration loaded from a TOML file.
//!
//! The diagram datasets are compiled in and never configurable; the config
//! file only adjusts ambient rendering options. All types implement
//! [`serde::Deserialize`], and every field falls back to a default so an
//! absent or empty file behaves identically to no file at all.

use std::fs;

use serde::Deserialize;

use crate::{color::Color, error::DrafterError};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Raster output configuration section.
    #[serde(default)]
    raster: RasterConfig,
}

impl AppConfig {
    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the raster configuration.
    pub fn raster(&self) -> &RasterConfig {
        &self.raster
    }
}

/// Visual styling configuration for rendered diagrams.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Canvas background color, as a CSS color string. Defaults to white.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("invalid background color in config: {err}"))
    }
}

/// Raster export configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RasterConfig {
    /// Scale factor applied when rasterizing the SVG scene. 1.0 keeps the
    /// canvas pixel dimensions as authored.
    #[serde(default = "default_scale")]
    scale: f32,
}

fn default_scale() -> f32 {
    1.0
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
        }
    }
}

impl RasterConfig {
    pub fn scale(&self) -> f32 {
        self.scale
    }
}

/// Loads the application configuration.
///
/// With no path, returns the defaults without touching the filesystem.
///
/// # Errors
///
/// Returns [`DrafterError`] when the file cannot be read or is not valid TOML.
pub fn load_config(path: Option<&String>) -> Result<AppConfig, DrafterError> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };

    let content = fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|err| DrafterError::Config(format!("failed to parse `{path}`: {err}")))
}
