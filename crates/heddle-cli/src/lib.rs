//! CLI logic for the Heddle chart compiler.
//!
//! This module contains the core CLI logic for the Heddle chart compiler.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use heddle::{ChartBuilder, HeddleError};

/// Run the Heddle CLI application
///
/// This function processes the input file through the Heddle pipeline and
/// writes the resulting SVG to the output file. With `--list`, it prints the
/// input's module names instead.
///
/// # Errors
///
/// Returns `HeddleError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Module selection errors
/// - Parsing errors
pub fn run(args: &Args) -> Result<(), HeddleError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing chart"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input file; the pipeline expects newline-normalized text
    let source = fs::read_to_string(&args.input)?.replace("\r\n", "\n");

    let builder = ChartBuilder::new(app_config);

    if args.list {
        for module in builder.modules(&source) {
            println!("{}", module.name());
        }
        return Ok(());
    }

    // Compile the selected module and render it
    let chart = builder.compile(&source, args.module.as_deref())?;
    let svg = builder.render_svg(&chart);

    // Write output file
    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
