//! Cart operations, scoped by table

use rust_decimal::Decimal;
use shared::models::{CartItem, CartItemCreate, CartItemUpdate, CartLine, CartView};
use shared::types::{CartItemId, TableId};

use super::{PosState, PosStore, StoreError, StoreResult};

impl PosState {
    /// Cart items of one table in insertion order
    pub(super) fn cart_items_for(&self, table_id: TableId) -> Vec<CartItem> {
        self.cart_items
            .values()
            .filter(|item| item.table_id == table_id)
            .cloned()
            .collect()
    }

    /// Remove every cart item of a table, returning how many were removed
    pub(super) fn clear_cart_for_table(&mut self, table_id: TableId) -> usize {
        let before = self.cart_items.len();
        self.cart_items.retain(|_, item| item.table_id != table_id);
        before - self.cart_items.len()
    }
}

impl PosStore {
    /// 查看购物车，关联菜单名称和价格
    ///
    /// 不校验桌台是否存在：未知桌台返回空购物车。
    /// 菜单中找不到的菜品显示为空名称、零价格。
    pub fn get_cart(&self, table_id: TableId) -> CartView {
        let items = self.state.lock().cart_items_for(table_id);

        let mut total = Decimal::ZERO;
        let items: Vec<CartLine> = items
            .into_iter()
            .map(|item| {
                let snapshot = self.catalog.dish_snapshot(item.dish_id).unwrap_or_default();
                let amount = snapshot.price * Decimal::from(item.quantity);
                total += amount;
                CartLine {
                    id: item.id,
                    dish_id: item.dish_id,
                    dish_name: snapshot.name,
                    price: snapshot.price,
                    quantity: item.quantity,
                    remark: item.remark,
                    amount,
                }
            })
            .collect();

        CartView {
            table_id,
            items,
            total,
        }
    }

    /// 加入购物车
    ///
    /// 桌台必须存在 (否则视为请求数据错误)；菜品 ID 不校验
    pub fn add_cart_item(&self, input: CartItemCreate) -> StoreResult<CartItem> {
        if input.table_id == 0 || input.dish_id == 0 || input.quantity <= 0 {
            return Err(StoreError::invalid("invalid data"));
        }

        let mut state = self.state.lock();
        if !state.tables.contains_key(&input.table_id) {
            return Err(StoreError::UnknownTable(input.table_id));
        }

        let item = CartItem {
            id: state.ids.next_cart_item(),
            table_id: input.table_id,
            dish_id: input.dish_id,
            quantity: input.quantity,
            remark: input.remark,
        };
        state.cart_items.insert(item.id, item.clone());

        tracing::debug!(
            cart_item_id = item.id,
            table_id = item.table_id,
            dish_id = item.dish_id,
            quantity = item.quantity,
            "Cart item added"
        );
        Ok(item)
    }

    /// 修改购物车条目
    ///
    /// 空备注视为"不修改"，不会清空已有备注
    pub fn update_cart_item(&self, item_id: CartItemId, update: CartItemUpdate) -> StoreResult<CartItem> {
        let mut state = self.state.lock();
        let item = state
            .cart_items
            .get_mut(&item_id)
            .ok_or(StoreError::CartItemNotFound(item_id))?;

        match update.quantity {
            Some(quantity) if quantity <= 0 => {
                return Err(StoreError::invalid("quantity must be > 0"));
            }
            Some(quantity) => item.quantity = quantity,
            None => {}
        }
        if let Some(remark) = update.remark.filter(|r| !r.is_empty()) {
            item.remark = remark;
        }

        tracing::debug!(cart_item_id = item_id, quantity = item.quantity, "Cart item updated");
        Ok(item.clone())
    }

    pub fn delete_cart_item(&self, item_id: CartItemId) -> StoreResult<()> {
        let mut state = self.state.lock();
        let item = state
            .cart_items
            .remove(&item_id)
            .ok_or(StoreError::CartItemNotFound(item_id))?;

        tracing::debug!(cart_item_id = item_id, table_id = item.table_id, "Cart item deleted");
        Ok(())
    }
}
