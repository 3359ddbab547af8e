//! Dish Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{CategoryId, DishId};

/// Dish entity (菜品)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: DishId,
    pub category_id: CategoryId,
    pub name: String,
    /// Unit price in currency unit
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Image path or URL
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub is_recommended: bool,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

fn default_true() -> bool {
    true
}
