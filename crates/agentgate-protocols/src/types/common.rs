//! Common utility types.

use std::collections::HashMap;

/// Free-form key/value state attached to sessions and memory entries.
pub type State = HashMap<String, serde_json::Value>;

/// Media type applied to inline data that arrives without one.
pub const DEFAULT_MIME_TYPE: &str = "text/plain";
