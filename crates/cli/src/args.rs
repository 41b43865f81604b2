use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Command-line arguments for scarlet
#[derive(Parser, Debug)]
#[command(name = "scarlet")]
#[command(about = "File loose manga archives into a canonical library layout")]
#[command(version)]
pub struct Args {
    /// Directories to import (default: every subdirectory of `import_dir`)
    pub dirs: Vec<PathBuf>,

    /// Library root (overrides `library_dir`)
    #[arg(short = 'l', long = "library")]
    pub library: Option<PathBuf>,

    /// Hide catalog results that are not manga
    #[arg(
        short = 'L',
        long = "skip-non-manga",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub skip_non_manga: bool,

    /// Configuration file (default: <config dir>/scarlet/config.toml)
    #[arg(short, long, env = "SCARLET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of catalog results to request (overrides `search_limit`)
    #[arg(short = 'n', long)]
    pub limit: Option<u32>,

    /// Print the planned links without touching the library
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
