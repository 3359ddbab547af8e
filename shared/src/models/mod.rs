//! Data models
//!
//! Shared between the server and HTTP clients. All ids are `i64`; money is
//! `rust_decimal::Decimal` serialized as a JSON number.

pub mod cart;
pub mod category;
pub mod dining_table;
pub mod dish;
pub mod order;

// Re-exports
pub use cart::*;
pub use category::*;
pub use dining_table::*;
pub use dish::*;
pub use order::*;
