//! # AgentGate API
//!
//! HTTP surface of the AgentGate host.
//!
//! - **Monitoring**: `/health`, `/info`, `/livez`, `/list-apps`
//! - **Sessions**: create, list, fetch and delete sessions per app and user
//! - **Artifacts**: browse and delete artifacts stored for a session
//! - **Turns**: hand a finished turn's output to the registered plugins
//! - **Memory**: keyword recall over earlier turns
//! - **Docs**: filtered OpenAPI document at `/openapi.json`

pub mod error;
pub mod http;
pub mod openapi;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use http::routes::{create_router, API_ROUTES};
pub use openapi::{OpenApiBuilder, RouteSpec, SKIPPED_PATH_PATTERNS};
pub use server::{build_app, ApiServer};
pub use state::AppState;
