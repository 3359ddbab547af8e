//! Consistency audit over the store's cross-entity invariants

use serde::Serialize;
use shared::types::{CartItemId, OrderId, TableId};

use super::PosStore;

/// A single invariant violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConsistencyIssue {
    /// Table links an order id that is not in the ledger
    DanglingOrderLink { table_id: TableId, order_id: OrderId },
    /// Table links an order that was placed at another table
    OrderTableMismatch {
        table_id: TableId,
        order_id: OrderId,
        order_table_id: TableId,
    },
    /// FREE table still carries an order link
    FreeTableLinked { table_id: TableId, order_id: OrderId },
    NonPositiveQuantity { cart_item_id: CartItemId, quantity: i32 },
    /// Cart item belongs to a table that does not exist
    OrphanCartItem { cart_item_id: CartItemId, table_id: TableId },
}

/// Counters for health reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub tables: usize,
    pub occupied_tables: usize,
    pub cart_items: usize,
    pub orders: usize,
}

impl PosStore {
    pub fn stats(&self) -> StoreStats {
        let state = self.state.lock();
        StoreStats {
            tables: state.tables.len(),
            occupied_tables: state.tables.values().filter(|t| t.is_using()).count(),
            cart_items: state.cart_items.len(),
            orders: state.orders.len(),
        }
    }

    /// Check every table link and cart item, returning all violations found
    pub fn consistency_issues(&self) -> Vec<ConsistencyIssue> {
        let state = self.state.lock();
        let mut issues = Vec::new();

        for table in state.tables.values() {
            let Some(order_id) = table.current_order_id else {
                continue;
            };
            if !table.is_using() {
                issues.push(ConsistencyIssue::FreeTableLinked {
                    table_id: table.id,
                    order_id,
                });
            }
            match state.orders.get(&order_id) {
                None => issues.push(ConsistencyIssue::DanglingOrderLink {
                    table_id: table.id,
                    order_id,
                }),
                Some(order) if order.table_id != table.id => {
                    issues.push(ConsistencyIssue::OrderTableMismatch {
                        table_id: table.id,
                        order_id,
                        order_table_id: order.table_id,
                    })
                }
                Some(_) => {}
            }
        }

        for item in state.cart_items.values() {
            if item.quantity <= 0 {
                issues.push(ConsistencyIssue::NonPositiveQuantity {
                    cart_item_id: item.id,
                    quantity: item.quantity,
                });
            }
            if !state.tables.contains_key(&item.table_id) {
                issues.push(ConsistencyIssue::OrphanCartItem {
                    cart_item_id: item.id,
                    table_id: item.table_id,
                });
            }
        }

        if !issues.is_empty() {
            tracing::warn!(count = issues.len(), "Store consistency issues detected");
        }
        issues
    }
}
