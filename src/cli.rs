use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_PATH;

/// Render the Kaelion framework figures.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Path to config TOML (optional; defaults apply when absent)
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Output directory for the PNG files (overrides config)
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}
