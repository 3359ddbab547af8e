//! Table registry operations

use shared::models::{DiningTable, TableStatus};
use shared::types::{OrderId, TableId};

use super::{PosState, PosStore, StoreError, StoreResult};

impl PosState {
    pub(super) fn table_mut(&mut self, table_id: TableId) -> StoreResult<&mut DiningTable> {
        self.tables
            .get_mut(&table_id)
            .ok_or(StoreError::TableNotFound(table_id))
    }

    /// Seat an order at a table: USING, headcount overwritten, order linked
    ///
    /// Returns false when the table does not exist.
    pub(super) fn link_order(&mut self, table_id: TableId, order_id: OrderId, people_count: i32) -> bool {
        match self.tables.get_mut(&table_id) {
            Some(table) => {
                table.status = TableStatus::Using;
                table.people_count = people_count;
                table.current_order_id = Some(order_id);
                true
            }
            None => false,
        }
    }

    /// Clear the table's order link, leaving occupancy untouched
    ///
    /// Returns the order id that was linked, if any.
    pub(super) fn unlink_order(&mut self, table_id: TableId) -> Option<OrderId> {
        self.tables
            .get_mut(&table_id)
            .and_then(|table| table.current_order_id.take())
    }
}

impl PosStore {
    /// 全部桌台 (按种子顺序)
    pub fn list_tables(&self) -> Vec<DiningTable> {
        self.state.lock().tables.values().cloned().collect()
    }

    pub fn get_table(&self, table_id: TableId) -> StoreResult<DiningTable> {
        self.state
            .lock()
            .tables
            .get(&table_id)
            .cloned()
            .ok_or(StoreError::TableNotFound(table_id))
    }

    /// 开台
    ///
    /// 已在使用中的桌台返回 [`StoreError::TableOccupied`]，状态不变。
    /// 人数不做下限校验。
    pub fn open_table(&self, table_id: TableId, people_count: i32) -> StoreResult<DiningTable> {
        let mut state = self.state.lock();
        let table = state.table_mut(table_id)?;
        if table.is_using() {
            return Err(StoreError::TableOccupied(table_id));
        }

        table.status = TableStatus::Using;
        table.people_count = people_count;
        let table = table.clone();

        tracing::info!(table_id, table_name = %table.name, people_count, "Table opened");
        Ok(table)
    }

    /// 清台
    ///
    /// 无条件重置为空闲，解除订单关联，并丢弃该桌未下单的购物车条目
    pub fn close_table(&self, table_id: TableId) -> StoreResult<DiningTable> {
        let mut state = self.state.lock();
        let table = state.table_mut(table_id)?;
        let previous_order = table.current_order_id.take();
        table.status = TableStatus::Free;
        table.people_count = 0;
        let table = table.clone();

        let discarded = state.clear_cart_for_table(table_id);

        tracing::info!(
            table_id,
            table_name = %table.name,
            previous_order = ?previous_order,
            discarded_cart_items = discarded,
            "Table closed"
        );
        Ok(table)
    }
}
