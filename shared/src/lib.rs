//! Shared types for the restaurant POS backend
//!
//! Wire models, the unified error system, and request parsing helpers used
//! by the server and by any Rust client of its HTTP API.

pub mod error;
pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
