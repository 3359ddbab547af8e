//! Error codes returned in the `code` field of every error body
//!
//! Ranges: 0xxx request problems, 4xxx orders and carts, 7xxx tables,
//! 9xxx server faults.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ---- request ----
    ValidationFailed = 2,
    /// Unknown route or resource
    NotFound = 3,
    /// Malformed id or undecodable body
    InvalidFormat = 6,
    RequiredField = 7,

    // ---- order / cart ----
    OrderNotFound = 4001,
    /// Placement attempted on an empty cart
    OrderEmpty = 4007,
    CartItemNotFound = 4101,

    // ---- table ----
    TableNotFound = 7001,
    /// Opening a table that is already in use
    TableOccupied = 7002,
    TableNoCurrentOrder = 7004,

    // ---- server ----
    InternalError = 9001,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 11] = [
        Self::ValidationFailed,
        Self::NotFound,
        Self::InvalidFormat,
        Self::RequiredField,
        Self::OrderNotFound,
        Self::OrderEmpty,
        Self::CartItemNotFound,
        Self::TableNotFound,
        Self::TableOccupied,
        Self::TableNoCurrentOrder,
        Self::InternalError,
    ];

    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default message, used verbatim as the `error` field
    pub const fn message(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "invalid data",
            Self::NotFound => "not found",
            Self::InvalidFormat => "invalid format",
            Self::RequiredField => "required field missing",
            Self::OrderNotFound => "order not found",
            Self::OrderEmpty => "cart is empty",
            Self::CartItemNotFound => "cart item not found",
            Self::TableNotFound => "table not found",
            Self::TableOccupied => "table already in use",
            Self::TableNoCurrentOrder => "no current order for this table",
            Self::InternalError => "internal error",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// A numeric code with no matching [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown error code {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|c| c.code() == value)
            .ok_or(InvalidErrorCode(value))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
