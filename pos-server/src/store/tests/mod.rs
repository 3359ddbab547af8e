use super::*;
use rust_decimal::Decimal;
use shared::models::{CartItemCreate, CartItemUpdate, OrderCreate, OrderStatus, PaymentInput, TableStatus};

// ========================================================================
// Helpers
// ========================================================================

// Built-in seed: tables 1 A1, 2 A2, 3 B1
// dishes 1 宫保鸡丁 38, 2 鱼香肉丝 32, 3 拍黄瓜 16, 4 可乐 8
const TABLE_A1: TableId = 1;
const TABLE_A2: TableId = 2;
const DISH_GONGBAO: i64 = 1;
const DISH_COLA: i64 = 4;

fn create_test_store() -> PosStore {
    PosStore::from_seed(&SeedData::default())
}

fn add_item(store: &PosStore, table_id: TableId, dish_id: i64, quantity: i32) -> CartItem {
    store
        .add_cart_item(CartItemCreate {
            table_id,
            dish_id,
            quantity,
            remark: String::new(),
        })
        .expect("add cart item")
}

fn place(store: &PosStore, table_id: TableId, people_count: i32) -> StoreResult<Order> {
    store.place_order(OrderCreate {
        table_id,
        people_count,
        customer_name: String::new(),
    })
}

/// Open A1 with 2 people, add 2×宫保鸡丁 and 1×可乐, place the order
fn place_a1_order(store: &PosStore) -> Order {
    store.open_table(TABLE_A1, 2).unwrap();
    add_item(store, TABLE_A1, DISH_GONGBAO, 2);
    add_item(store, TABLE_A1, DISH_COLA, 1);
    place(store, TABLE_A1, 2).unwrap()
}

mod test_flows;
