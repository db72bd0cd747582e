//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Text-to-speech server with server-side playback.
#[derive(Parser)]
#[command(name = "voxplay")]
#[command(about = "Synthesize speech over HTTP and play it on this machine")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Default log filter when `RUST_LOG` is unset.
    pub const fn default_log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
