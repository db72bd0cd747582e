//! Shared application state type.

use crate::bootstrap::AxumContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// An Arc-wrapped `AxumContext` holding the gateway, launcher and registry.
pub type AppState = Arc<AxumContext>;
