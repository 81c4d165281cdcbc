//! # API Route Handlers
//!
//! This module organizes the Axum route handlers for the `supportrag-server`.

pub mod general;
pub mod query;

// Re-export all handlers so the router can reach them under `handlers::`.
pub use general::*;
pub use query::*;

use super::{errors::AppError, state::AppState, types::DebugParams};
