//! Configuration types for chart rendering.
//!
//! This module provides configuration structures that control how charts are
//! rendered. All types implement [`serde::Deserialize`] for loading from
//! external sources (the CLI reads them from TOML).
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining style and render
//!   settings.
//! - [`StyleConfig`] - Visual options such as the background color.
//! - [`RenderConfig`] - Rendering options such as the level ceiling.
//!
//! # Example
//!
//! ```
//! # use heddle::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().background_color().unwrap().is_none());
//! ```

use serde::Deserialize;

use heddle_core::{
    color::{ColorParseError, Rgb},
    semantic::LEVEL_MAX,
};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(style: StyleConfig, render: RenderConfig) -> Self {
        Self { style, render }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }
}

/// Visual styling configuration for rendered charts.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background color as six hex digits, with or without a leading `#`.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Creates a style configuration with the given background color string.
    pub fn new(background_color: Option<String>) -> Self {
        Self { background_color }
    }

    /// Returns the parsed background color, or `None` if not configured.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured string is not a six-hex-digit
    /// color. Callers fall back to the default background rather than
    /// failing the render.
    pub fn background_color(&self) -> Result<Option<Rgb>, ColorParseError> {
        self.background_color
            .as_deref()
            .map(str::parse)
            .transpose()
    }
}

/// Rendering configuration for compiled charts.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RenderConfig {
    /// Deepest process level to render; deeper statements are omitted.
    #[serde(default)]
    level_limit: Option<u32>,
}

impl RenderConfig {
    /// Creates a render configuration with the given level ceiling.
    pub fn new(level_limit: Option<u32>) -> Self {
        Self { level_limit }
    }

    /// Returns the level ceiling, clamped to `[1, LEVEL_MAX]`.
    ///
    /// Unconfigured means no truncation.
    pub fn level_limit(&self) -> u32 {
        self.level_limit
            .map(|limit| limit.clamp(1, LEVEL_MAX))
            .unwrap_or(LEVEL_MAX)
    }
}
