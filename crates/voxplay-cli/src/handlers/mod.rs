//! Command handlers.
//!
//! Each handler builds what it needs from the parsed arguments and runs one
//! command to completion.

pub mod say;
pub mod serve;
pub mod voices;

use tracing::debug;
use voxplay_core::SynthesisGateway;
use voxplay_voice::load_engine;

use crate::commands::EngineArgs;
use crate::error::CliError;

/// Load the engine in the foreground and wrap it in a gateway.
pub(crate) async fn ready_gateway(args: &EngineArgs) -> Result<SynthesisGateway, CliError> {
    let config = args.to_config()?;
    let engine = load_engine(&config).await?;
    debug!(engine = engine.name(), "Engine loaded");
    Ok(SynthesisGateway::with_engine(engine))
}
