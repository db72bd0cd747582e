//! `voxplay` command-line interface.
//!
//! `serve` runs the HTTP API; `say` and `voices` talk to the engine
//! directly without a server.
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings for helpers used only by some test modules
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tokio_test as _;

// Used by the main.rs binary
use dotenvy as _;
use tracing_subscriber as _;

pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use commands::{Commands, EngineArgs, PlaybackArgs};
pub use error::CliError;
pub use parser::Cli;
