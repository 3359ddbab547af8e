//! Error codes, the handler error type, and the JSON error body
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::OrderNotFound).with_detail("order_id", 7);
//! assert_eq!(err.http_status(), http::StatusCode::NOT_FOUND);
//! assert_eq!(err.to_string(), "order not found");
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody};
