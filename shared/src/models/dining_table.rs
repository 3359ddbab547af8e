//! Dining Table Model

use serde::{Deserialize, Serialize};

use crate::types::{OrderId, TableId};

/// Table occupancy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableStatus {
    #[default]
    Free,
    Using,
}

/// Dining table entity (桌台)
///
/// `current_order_id` links the unpaid order placed at this table. A table can
/// be `Using` without a linked order: opened but not yet ordered, or paid but
/// not yet closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: TableId,
    pub name: String,
    #[serde(default)]
    pub status: TableStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_order_id: Option<OrderId>,
    #[serde(default)]
    pub people_count: i32,
}

impl DiningTable {
    /// A free table with nobody seated
    pub fn free(id: TableId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            status: TableStatus::Free,
            current_order_id: None,
            people_count: 0,
        }
    }

    pub fn is_using(&self) -> bool {
        self.status == TableStatus::Using
    }
}

/// Open table payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableOpen {
    #[serde(default)]
    pub people_count: i32,
}
