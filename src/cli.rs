//! CLI argument parsing via clap.

use std::path::PathBuf;

use clap::Parser;
use gather::build_info;

/// Localized console front-end for event management.
#[derive(Debug, Parser)]
#[command(name = "gather", version, after_help = build_info::HELP_BUILD_METADATA)]
pub struct Args {
    /// Path to config file (default: ./gather.toml or ~/.config/gather/gather.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Override the locale code used to pick JSON resources (e.g. EN, IT).
    #[arg(short = 'l', long = "locale")]
    pub locale: Option<String>,

    /// Override the directory holding the JSON description files.
    #[arg(long = "resources")]
    pub resources: Option<PathBuf>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}
