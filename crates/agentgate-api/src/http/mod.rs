//! HTTP interface module.
//!
//! Provides REST endpoints for:
//! - Health checks and service information
//! - Session management
//! - Artifact browsing
//! - Turn output hand-off to plugins
//! - Memory recall

pub mod routes;

pub(crate) mod artifacts;
pub(crate) mod memory;
pub(crate) mod monitoring;
pub(crate) mod sessions;
pub(crate) mod turns;

pub use monitoring::{HealthResponse, InfoResponse};
