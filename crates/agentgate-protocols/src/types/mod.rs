//! Shared data types.

mod common;
mod content;

pub use common::*;
pub use content::*;
