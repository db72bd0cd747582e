//! Core services - orchestration between ports and domain rules.
//!
//! Services here know only port traits, never concrete engines or players.

mod synthesis;

pub use synthesis::{EngineState, SynthesisGateway};
