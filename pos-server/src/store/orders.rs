//! Order ledger and the placement transaction

use chrono::Utc;
use rust_decimal::Decimal;
use shared::models::{Order, OrderBill, OrderCreate, OrderItem, OrderStatus, PaymentInput, PaymentReceipt};
use shared::types::{OrderId, TableId};

use super::{PosStore, StoreError, StoreResult};

impl PosStore {
    /// 下单 - 把一张桌台的购物车转成订单
    ///
    /// 读取购物车、生成订单快照、清空购物车、关联桌台在同一个临界区内完成。
    /// 所有校验都在第一次修改之前，之后的步骤不会失败，所以不存在部分提交。
    ///
    /// 菜单里找不到的菜品按空名称、零价格记入订单。
    pub fn place_order(&self, input: OrderCreate) -> StoreResult<Order> {
        if input.table_id == 0 || input.people_count <= 0 {
            return Err(StoreError::invalid("invalid data"));
        }
        let table_id = input.table_id;

        let mut state = self.state.lock();

        let cart = state.cart_items_for(table_id);
        if cart.is_empty() {
            return Err(StoreError::EmptyCart(table_id));
        }

        let order_id = state.ids.next_order();
        let mut total_amount = Decimal::ZERO;
        let mut items = Vec::with_capacity(cart.len());
        for line in cart {
            // 价格在此刻冻结，之后菜单改价不影响订单
            let snapshot = self.catalog.dish_snapshot(line.dish_id).unwrap_or_default();
            let item = OrderItem {
                id: state.ids.next_order_item(),
                order_id,
                dish_id: line.dish_id,
                name: snapshot.name,
                price: snapshot.price,
                quantity: line.quantity,
                remark: line.remark,
            };
            total_amount += item.amount();
            items.push(item);
        }

        let order = Order {
            id: order_id,
            table_id,
            people_count: input.people_count,
            status: OrderStatus::Placed,
            total_amount,
            created_at: Utc::now(),
            customer_name: Some(input.customer_name).filter(|n| !n.is_empty()),
            paid_at: None,
            items,
        };
        state.orders.insert(order_id, order.clone());

        let cleared = state.clear_cart_for_table(table_id);
        if !state.link_order(table_id, order_id, input.people_count) {
            tracing::warn!(table_id, order_id, "Order placed for unknown table, no table linked");
        }

        tracing::info!(
            order_id,
            table_id,
            people_count = order.people_count,
            items = cleared,
            total = %order.total_amount,
            "Order placed"
        );
        Ok(order)
    }

    pub fn get_order(&self, order_id: OrderId) -> StoreResult<Order> {
        self.state
            .lock()
            .orders
            .get(&order_id)
            .cloned()
            .ok_or(StoreError::OrderNotFound(order_id))
    }

    /// 桌台当前订单
    ///
    /// 桌台未关联订单返回 [`StoreError::NoCurrentOrder`]；
    /// 关联的订单不存在 (不应发生) 返回 [`StoreError::OrderNotFound`]
    pub fn current_order_for_table(&self, table_id: TableId) -> StoreResult<Order> {
        let state = self.state.lock();
        let table = state
            .tables
            .get(&table_id)
            .ok_or(StoreError::TableNotFound(table_id))?;
        let order_id = table
            .current_order_id
            .ok_or(StoreError::NoCurrentOrder(table_id))?;

        match state.orders.get(&order_id) {
            Some(order) => Ok(order.clone()),
            None => {
                tracing::warn!(table_id, order_id, "Table linked to a missing order");
                Err(StoreError::OrderNotFound(order_id))
            }
        }
    }

    /// 修改订单状态
    ///
    /// 不校验状态流转，任何字符串都会被接受 (包括 PAID → PLACED)
    pub fn update_order_status(&self, order_id: OrderId, status: impl Into<OrderStatus>) -> StoreResult<Order> {
        let status = status.into();
        let mut state = self.state.lock();
        let order = state
            .orders
            .get_mut(&order_id)
            .ok_or(StoreError::OrderNotFound(order_id))?;

        let previous = std::mem::replace(&mut order.status, status);
        if !order.status.is_known() {
            tracing::warn!(order_id, status = %order.status, "Order set to unrecognized status");
        }
        tracing::info!(order_id, from = %previous, to = %order.status, "Order status changed");
        Ok(order.clone())
    }

    /// 结账 - 记录支付，不做真实扣款
    ///
    /// 订单标记为 PAID 并清除桌台的当前订单关联 (无论桌台当前关联的是哪张订单)；
    /// 桌台保持使用中，需另行清台。
    pub fn pay_order(&self, order_id: OrderId, payment: PaymentInput) -> StoreResult<PaymentReceipt> {
        let mut state = self.state.lock();
        let order = state
            .orders
            .get_mut(&order_id)
            .ok_or(StoreError::OrderNotFound(order_id))?;

        order.status = OrderStatus::Paid;
        order.paid_at = Some(Utc::now());
        let order = order.clone();

        let unlinked = state.unlink_order(order.table_id);

        tracing::info!(
            order_id,
            table_id = order.table_id,
            pay_method = %payment.pay_method,
            total = %order.total_amount,
            unlinked = ?unlinked,
            "Order paid"
        );
        Ok(PaymentReceipt {
            order,
            pay_method: payment.pay_method,
            transaction_id: payment.transaction_id,
        })
    }

    /// 账单
    pub fn get_bill(&self, order_id: OrderId) -> StoreResult<OrderBill> {
        self.state
            .lock()
            .orders
            .get(&order_id)
            .map(OrderBill::from)
            .ok_or(StoreError::OrderNotFound(order_id))
    }
}
