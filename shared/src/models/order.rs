//! Order Model
//!
//! Orders are frozen snapshots: dish names and prices are copied from the
//! catalog when the order is placed.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{DishId, OrderId, OrderItemId, TableId};

/// Order status
///
/// Any caller-supplied string is accepted by the status endpoint; strings
/// outside the five known statuses are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    #[default]
    Placed,
    Cooking,
    Served,
    Paid,
    Canceled,
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Placed => "PLACED",
            Self::Cooking => "COOKING",
            Self::Served => "SERVED",
            Self::Paid => "PAID",
            Self::Canceled => "CANCELED",
            Self::Other(s) => s.as_str(),
        }
    }

    /// Whether this is one of the five statuses the kitchen/cashier flow knows
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for OrderStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "PLACED" => Self::Placed,
            "COOKING" => Self::Cooking,
            "SERVED" => Self::Served,
            "PAID" => Self::Paid,
            "CANCELED" => Self::Canceled,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for OrderStatus {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order line snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub dish_id: DishId,
    /// Dish name at placement time
    pub name: String,
    /// Unit price at placement time
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: i32,
    pub remark: String,
}

impl OrderItem {
    pub fn amount(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub table_id: TableId,
    pub people_count: i32,
    pub status: OrderStatus,
    /// Sum of item price × quantity, fixed at placement
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
    pub items: Vec<OrderItem>,
}

/// Place order payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderCreate {
    #[serde(default)]
    pub table_id: TableId,
    #[serde(default)]
    pub people_count: i32,
    #[serde(default)]
    pub customer_name: String,
}

/// Update order status payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    #[serde(default)]
    pub status: String,
}

/// Payment confirmation payload (every field optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentInput {
    #[serde(default)]
    pub pay_method: String,
    #[serde(default)]
    pub transaction_id: String,
}

/// Result of a recorded payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub order: Order,
    pub pay_method: String,
    pub transaction_id: String,
}

/// Bill projection of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBill {
    pub order_id: OrderId,
    pub table_id: TableId,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub status: OrderStatus,
}

impl From<&Order> for OrderBill {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.id,
            table_id: order.table_id,
            total_amount: order.total_amount,
            status: order.status.clone(),
        }
    }
}
