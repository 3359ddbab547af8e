//! Cart Model
//!
//! A cart is the per-table list of dishes selected but not yet ordered.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{CartItemId, DishId, TableId};

/// Cart item entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: CartItemId,
    pub table_id: TableId,
    pub dish_id: DishId,
    pub quantity: i32,
    #[serde(default)]
    pub remark: String,
}

/// Add cart item payload
///
/// Missing fields decode as zero/empty so that validation reports them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartItemCreate {
    #[serde(default)]
    pub table_id: TableId,
    #[serde(default)]
    pub dish_id: DishId,
    #[serde(default)]
    pub quantity: i32,
    #[serde(default)]
    pub remark: String,
}

/// Update cart item payload
///
/// An empty `remark` leaves the stored remark untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartItemUpdate {
    #[serde(default)]
    pub quantity: Option<i32>,
    #[serde(default)]
    pub remark: Option<String>,
}

/// Cart line joined with catalog data for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: CartItemId,
    pub dish_id: DishId,
    pub dish_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: i32,
    pub remark: String,
    /// price × quantity
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

/// Cart of one table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartView {
    pub table_id: TableId,
    pub items: Vec<CartLine>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}
