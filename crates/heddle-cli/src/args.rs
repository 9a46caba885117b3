//! Command-line argument definitions for the Heddle CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, module selection,
//! configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Heddle chart compiler
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input chart file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Module to render (defaults to the first module in the file)
    #[arg(short, long)]
    pub module: Option<String>,

    /// List the modules in the input file and exit
    #[arg(long)]
    pub list: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
