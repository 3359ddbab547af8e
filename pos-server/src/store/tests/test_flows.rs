use super::*;
use std::collections::HashSet;

#[test]
fn test_full_table_lifecycle() {
    let store = create_test_store();

    // 开台 → 点菜
    store.open_table(TABLE_A1, 2).unwrap();
    add_item(&store, TABLE_A1, DISH_GONGBAO, 2);
    add_item(&store, TABLE_A1, DISH_COLA, 1);
    assert_eq!(store.get_cart(TABLE_A1).total, Decimal::from(84));

    // 下单
    let order = place(&store, TABLE_A1, 2).unwrap();
    assert_eq!(order.total_amount, Decimal::from(84));
    assert!(store.get_cart(TABLE_A1).items.is_empty());
    assert_eq!(store.get_table(TABLE_A1).unwrap().current_order_id, Some(order.id));
    assert_eq!(store.current_order_for_table(TABLE_A1).unwrap(), order);

    // 厨房流转
    store.update_order_status(order.id, OrderStatus::Cooking).unwrap();
    store.update_order_status(order.id, OrderStatus::Served).unwrap();

    // 结账
    let receipt = store.pay_order(order.id, PaymentInput::default()).unwrap();
    assert_eq!(receipt.order.status, OrderStatus::Paid);
    let table = store.get_table(TABLE_A1).unwrap();
    assert_eq!(table.current_order_id, None);
    assert_eq!(table.status, TableStatus::Using);
    assert_eq!(
        store.current_order_for_table(TABLE_A1),
        Err(StoreError::NoCurrentOrder(TABLE_A1))
    );

    // 清台
    let table = store.close_table(TABLE_A1).unwrap();
    assert_eq!(table.status, TableStatus::Free);
    assert_eq!(table.people_count, 0);

    assert_eq!(store.get_bill(order.id).unwrap().status, OrderStatus::Paid);
    assert!(store.consistency_issues().is_empty());

    // 可以重新开台
    store.open_table(TABLE_A1, 3).unwrap();
}

#[test]
fn test_close_before_pay_discards_link_not_order() {
    let store = create_test_store();
    let order = place_a1_order(&store);

    store.close_table(TABLE_A1).unwrap();

    assert_eq!(store.get_order(order.id).unwrap().status, OrderStatus::Placed);
    // 已清台的订单仍可结账，桌台不受影响
    store.pay_order(order.id, PaymentInput::default()).unwrap();
    assert_eq!(store.get_table(TABLE_A1).unwrap().status, TableStatus::Free);
    assert!(store.consistency_issues().is_empty());
}

#[test]
fn test_concurrent_placement_bills_each_item_once() {
    let store = create_test_store();
    const ITEMS_PER_TABLE: usize = 50;

    for table_id in [TABLE_A1, TABLE_A2] {
        for _ in 0..ITEMS_PER_TABLE {
            add_item(&store, table_id, DISH_COLA, 1);
        }
    }

    // 两张桌台各自被多个线程同时下单
    let results: Vec<StoreResult<Order>> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                let table_id = if i % 2 == 0 { TABLE_A1 } else { TABLE_A2 };
                s.spawn(move || place(&store, table_id, 2))
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("placement thread panicked"))
            .collect()
    });

    let orders: Vec<Order> = results.into_iter().filter_map(Result::ok).collect();
    assert_eq!(orders.len(), 2, "exactly one placement per table wins");

    let mut seen_tables = HashSet::new();
    for order in &orders {
        assert!(seen_tables.insert(order.table_id));
        assert_eq!(order.items.len(), ITEMS_PER_TABLE);
        assert_eq!(order.total_amount, Decimal::from(8 * ITEMS_PER_TABLE as i64));
    }

    let stats = store.stats();
    assert_eq!(stats.cart_items, 0);
    assert_eq!(stats.orders, 2);
    assert!(store.consistency_issues().is_empty());
}

#[test]
fn test_concurrent_cart_edits_and_placement() {
    let store = create_test_store();

    let placed: Vec<Order> = std::thread::scope(|s| {
        let adders: Vec<_> = (0..4)
            .map(|_| {
                let store = store.clone();
                s.spawn(move || {
                    for _ in 0..25 {
                        add_item(&store, TABLE_A1, DISH_GONGBAO, 1);
                    }
                })
            })
            .collect();
        let placers: Vec<_> = (0..4)
            .map(|_| {
                let store = store.clone();
                s.spawn(move || {
                    (0..25)
                        .filter_map(|_| place(&store, TABLE_A1, 2).ok())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for h in adders {
            h.join().expect("adder thread panicked");
        }
        placers
            .into_iter()
            .flat_map(|h| h.join().expect("placer thread panicked"))
            .collect()
    });

    // 每个加入的条目要么在某个订单里 (恰好一次)，要么还在购物车里
    let billed: usize = placed.iter().map(|o| o.items.len()).sum();
    let remaining = store.get_cart(TABLE_A1).items.len();
    assert_eq!(billed + remaining, 100);

    let order_item_ids: HashSet<i64> = placed
        .iter()
        .flat_map(|o| o.items.iter().map(|i| i.id))
        .collect();
    assert_eq!(order_item_ids.len(), billed);
}
