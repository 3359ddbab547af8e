//! POS Store - 桌台、购物车、订单的内存数据仓库
//!
//! # 设计
//!
//! - 所有可变状态 (桌台、购物车条目、订单、ID 计数器) 放在一个 [`PosState`] 中，
//!   由一把互斥锁保护；每个操作在一个临界区内完成，不存在中间状态
//! - 菜单 ([`Catalog`]) 只读，单独加锁；加锁顺序固定为 store → catalog
//! - 桌台按种子顺序保存 (IndexMap)；购物车条目和订单 ID 单调递增，BTreeMap 按 ID 迭代即为插入顺序
//!
//! ```text
//! add_cart_item ──┐
//!                 ├──► Mutex<PosState> ──► place_order ──► Order (snapshot)
//! open/close ─────┘                              │
//!                                                └──► table.current_order_id
//! ```

mod cart;
mod consistency;
mod error;
mod orders;
mod tables;

#[cfg(test)]
mod tests;

pub use consistency::{ConsistencyIssue, StoreStats};
pub use error::{StoreError, StoreResult};

use indexmap::IndexMap;
use parking_lot::Mutex;
use shared::models::{CartItem, DiningTable, Order};
use shared::types::{CartItemId, OrderId, TableId};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::catalog::{Catalog, SeedData};

/// Per-entity id counters, allocated inside the same critical section as the
/// mutation that consumes them
#[derive(Debug, Default)]
struct IdCounters {
    cart_item: i64,
    order: i64,
    order_item: i64,
}

impl IdCounters {
    fn next_cart_item(&mut self) -> CartItemId {
        self.cart_item += 1;
        self.cart_item
    }

    fn next_order(&mut self) -> OrderId {
        self.order += 1;
        self.order
    }

    fn next_order_item(&mut self) -> i64 {
        self.order_item += 1;
        self.order_item
    }
}

/// Mutable state guarded by the store lock
#[derive(Debug, Default)]
struct PosState {
    tables: IndexMap<TableId, DiningTable>,
    cart_items: BTreeMap<CartItemId, CartItem>,
    orders: BTreeMap<OrderId, Order>,
    ids: IdCounters,
}

/// In-memory POS store
///
/// Clone 只复制引用，所有克隆共享同一份状态
#[derive(Clone)]
pub struct PosStore {
    catalog: Catalog,
    state: Arc<Mutex<PosState>>,
}

impl std::fmt::Debug for PosStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("PosStore")
            .field("catalog", &self.catalog)
            .field("tables", &state.tables.len())
            .field("cart_items", &state.cart_items.len())
            .field("orders", &state.orders.len())
            .finish()
    }
}

impl PosStore {
    pub fn new(catalog: Catalog, tables: Vec<DiningTable>) -> Self {
        let state = PosState {
            tables: tables.into_iter().map(|t| (t.id, t)).collect(),
            ..Default::default()
        };
        Self {
            catalog,
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn from_seed(seed: &SeedData) -> Self {
        Self::new(Catalog::from_seed(seed), seed.dining_tables())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
