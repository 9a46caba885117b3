//! Heddle - a compiler for an indentation-based process-chart notation.
//!
//! Chart sources describe a program's processes and the data they read and
//! write; Heddle compiles each module into a two-column flow diagram —
//! process steps on the left, data items on the right, color-coded wires
//! between them — serialized as a single SVG document.

pub mod config;

mod error;
mod render;

pub use heddle_core::{color, draw, geometry, semantic};
pub use heddle_parser::{ModuleSource, error::ParseError};

pub use error::HeddleError;

use log::{debug, info, trace};

use heddle_core::{color::DEFAULT_BACKGROUND, semantic::Chart};

use config::AppConfig;

/// Builder for compiling and rendering charts.
///
/// Holds the application configuration and drives the pipeline from raw
/// source to SVG. Rendering is pure and synchronous: the same source and
/// configuration always produce byte-identical output.
///
/// # Examples
///
/// ```
/// use heddle::{ChartBuilder, config::AppConfig};
///
/// let source = "\\module demo\nstep one \\out x\n";
///
/// let builder = ChartBuilder::new(AppConfig::default());
/// let chart = builder.compile(source, None).expect("Failed to compile");
/// let svg = builder.render_svg(&chart);
/// assert!(svg.starts_with("<svg"));
/// ```
#[derive(Default)]
pub struct ChartBuilder {
    config: AppConfig,
}

impl ChartBuilder {
    /// Create a new chart builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Segment source text into its modules.
    ///
    /// Returns an empty list when the source holds no module markers.
    pub fn modules(&self, source: &str) -> Vec<ModuleSource> {
        heddle_parser::split_modules(source)
    }

    /// Compile one module of the source into its chart model.
    ///
    /// With `module` set, the named module is compiled; otherwise the first
    /// module in the source is.
    ///
    /// # Errors
    ///
    /// Returns [`HeddleError::NoModules`] or [`HeddleError::ModuleNotFound`]
    /// when selection fails, and [`HeddleError::Parse`] for malformed
    /// indentation, carrying the source for error reporting.
    pub fn compile(&self, source: &str, module: Option<&str>) -> Result<Chart, HeddleError> {
        info!("Compiling chart");

        let modules = self.modules(source);
        let selected = match module {
            Some(name) => modules
                .into_iter()
                .find(|candidate| candidate.name() == name)
                .ok_or_else(|| HeddleError::ModuleNotFound(name.to_string()))?,
            None => modules.into_iter().next().ok_or(HeddleError::NoModules)?,
        };

        let chart = heddle_parser::build_chart(&selected, self.config.render().level_limit())
            .map_err(|err| HeddleError::new_parse_error(err, source))?;

        debug!(module = chart.name(); "Chart compiled successfully");
        trace!(chart:?; "Compiled chart");

        Ok(chart)
    }

    /// Render a compiled chart to an SVG document string.
    ///
    /// An invalid configured background color is reported and replaced by
    /// the default rather than failing the render.
    pub fn render_svg(&self, chart: &Chart) -> String {
        let background = match self.config.style().background_color() {
            Ok(Some(color)) => color,
            Ok(None) => DEFAULT_BACKGROUND,
            Err(err) => {
                log::warn!(err = err.to_string(); "Ignoring configured background color");
                DEFAULT_BACKGROUND
            }
        };

        info!(module = chart.name(); "Rendering chart");
        let svg = render::render_chart(chart, background);
        debug!(bytes = svg.len(); "SVG rendered successfully");
        svg
    }
}
