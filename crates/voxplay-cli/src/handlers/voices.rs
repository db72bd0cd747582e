//! Voices command handler.

use super::ready_gateway;
use crate::commands::EngineArgs;
use crate::error::CliError;

/// Print the engine's voices, one per line.
pub async fn execute(engine: &EngineArgs) -> Result<(), CliError> {
    let gateway = ready_gateway(engine).await?;
    let voices = gateway.voices().await?;
    if voices.is_empty() {
        println!("(engine offers no voice selection)");
    }
    for voice in voices {
        println!("{voice}");
    }
    Ok(())
}
