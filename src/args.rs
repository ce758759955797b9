//! Command-line argument definitions for the Drafter CLI.
//!
//! All diagram data is compiled in, so there is no input path. The arguments
//! only select which built-in diagram to render, where to write the PNG
//! files, and how chatty the logging is.

use clap::Parser;

/// Command-line arguments for the Drafter diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Built-in diagram to render: `architecture` or `workflow`.
    /// Renders both when omitted.
    pub diagram: Option<String>,

    /// Directory the PNG files are written into
    #[arg(short, long, default_value = ".")]
    pub output_dir: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
