//! Command-line interface implementation for Forge.
//! Provides argument parsing and help text formatting using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for Forge.
#[derive(Parser, Debug)]
#[command(author, version, about = "Forge: multi-stage service scaffolding tool", long_about = None)]
pub struct Args {
    /// Directory where the scaffolding is generated and where the
    /// specification document is looked up
    #[arg(value_name = "OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Root directory containing version-specific template sets
    #[arg(short, long, default_value = "templates")]
    pub templates: PathBuf,

    /// Author recorded in generated file headers
    #[arg(short, long, default_value = "")]
    pub author: String,

    /// Build tool task to run against the service descriptor
    #[arg(long, default_value = crate::constants::BUILD_SERVICE_TASK)]
    pub task: String,

    /// Abort the external build after this many seconds
    #[arg(long, value_name = "SECONDS")]
    pub build_timeout: Option<u64>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
/// Every argument has a default, so parsing only fails on malformed
/// input, which clap reports and exits on itself.
///
/// # Returns
/// * `Args` - Parsed command line arguments
pub fn get_args() -> Args {
    Args::parse()
}
