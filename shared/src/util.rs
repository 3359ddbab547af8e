//! Request parsing helpers

use crate::error::{AppError, AppResult};

/// Parse a decimal entity id coming from a path segment or query string.
///
/// `field` names the id in the error message, e.g. `"table id"` yields
/// `invalid table id`.
pub fn parse_id(raw: &str, field: &str) -> AppResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| AppError::invalid_format(format!("invalid {}", field)).with_detail("value", raw))
}

/// Parse an optional id: absent or empty means "no filter".
pub fn parse_optional_id(raw: Option<&str>, field: &str) -> AppResult<Option<i64>> {
    match raw {
        None | Some("") => Ok(None),
        Some(value) => parse_id(value, field).map(Some),
    }
}

/// Parse an id that must be present.
pub fn parse_required_id(raw: Option<&str>, field: &str) -> AppResult<i64> {
    match raw {
        None | Some("") => Err(AppError::required(field)),
        Some(value) => parse_id(value, field),
    }
}
