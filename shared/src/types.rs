//! Common types for the shared crate
//!
//! Entity identifiers are plain `i64` values allocated from monotonic counters
//! owned by the server; the aliases keep signatures readable.

/// Category identifier
pub type CategoryId = i64;
/// Dish identifier
pub type DishId = i64;
/// Dining table identifier
pub type TableId = i64;
/// Cart item identifier
pub type CartItemId = i64;
/// Order identifier
pub type OrderId = i64;
/// Order item identifier
pub type OrderItemId = i64;
