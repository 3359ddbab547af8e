//! 错误响应与 HTTP 外围行为

mod common;

use axum::body::Body;
use common::*;
use http::{Method, Request, StatusCode, header};
use serde_json::json;

#[tokio::test]
async fn test_malformed_ids_are_json_400() {
    let app = app();

    let cases = [
        (get(&app, "/api/dishes?category_id=abc").await, "invalid category_id"),
        (post(&app, "/api/tables/x/open", json!({"people_count": 1})).await, "invalid table id"),
        (post_empty(&app, "/api/tables/1.5/close").await, "invalid table id"),
        (get(&app, "/api/tables/abc/current-order").await, "invalid table id"),
        (get(&app, "/api/cart?table_id=one").await, "invalid table_id"),
        (put(&app, "/api/cart/items/abc", json!({"quantity": 1})).await, "invalid id"),
        (delete(&app, "/api/cart/items/abc").await, "invalid id"),
        (get(&app, "/api/orders/abc").await, "invalid id"),
        (get(&app, "/api/orders/abc/bill").await, "invalid id"),
        (post(&app, "/api/orders/abc/status", json!({"status": "PAID"})).await, "invalid id"),
        (post(&app, "/api/orders/abc/pay", json!({})).await, "invalid id"),
    ];

    for (res, message) in cases {
        assert_eq!(res.status, StatusCode::BAD_REQUEST, "{}", message);
        assert_eq!(res.json["error"], message);
        assert!(res.json["code"].is_u64());
    }
}

#[tokio::test]
async fn test_cart_requires_table_id() {
    let app = app();
    let res = get(&app, "/api/cart").await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json["error"], "table_id is required");
}

/// Reading a cart does not check the table, adding to it does.
#[tokio::test]
async fn test_cart_table_existence_asymmetry() {
    let app = app();

    let res = get(&app, "/api/cart?table_id=999").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json["table_id"], 999);
    assert!(res.json["items"].as_array().unwrap().is_empty());

    let res = post(&app, "/api/cart/items", json!({"table_id": 999, "dish_id": 1, "quantity": 1})).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json["error"], "table not found");
    assert_eq!(res.json["details"]["table_id"], 999);
}

#[tokio::test]
async fn test_invalid_bodies() {
    let app = app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/cart/items")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let res = send_raw(&app, request).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json["error"], "invalid body");

    let res = post_empty(&app, "/api/orders").await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json["error"], "invalid body");

    let res = post(&app, "/api/cart/items", json!({"table_id": "1"})).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json["error"], "invalid body");
}

#[tokio::test]
async fn test_validation_errors() {
    let app = app();

    let res = post(&app, "/api/cart/items", json!({"table_id": 1, "dish_id": 1, "quantity": 0})).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json["error"], "invalid data");

    let res = post(&app, "/api/cart/items", json!({"table_id": 1, "dish_id": 1, "quantity": 2})).await;
    let item_id = res.json["id"].as_i64().unwrap();

    let res = put(&app, &format!("/api/cart/items/{}", item_id), json!({"quantity": -1})).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json["error"], "quantity must be > 0");
    let cart = get(&app, "/api/cart?table_id=1").await;
    assert_eq!(cart.json["items"][0]["quantity"], 2);

    let res = post(&app, "/api/orders", json!({"table_id": 1, "people_count": 0})).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json["error"], "invalid data");

    let res = post(&app, "/api/orders", json!({"table_id": 2, "people_count": 2})).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json["error"], "cart is empty");
}

#[tokio::test]
async fn test_not_found_errors() {
    let app = app();

    let cases = [
        (post(&app, "/api/tables/99/open", json!({"people_count": 1})).await, "table not found"),
        (post_empty(&app, "/api/tables/99/close").await, "table not found"),
        (get(&app, "/api/tables/99/current-order").await, "table not found"),
        (get(&app, "/api/tables/2/current-order").await, "no current order for this table"),
        (put(&app, "/api/cart/items/5", json!({"quantity": 1})).await, "cart item not found"),
        (get(&app, "/api/orders/5").await, "order not found"),
        (get(&app, "/api/orders/5/bill").await, "order not found"),
        (post(&app, "/api/orders/5/status", json!({"status": "SERVED"})).await, "order not found"),
        (post_empty(&app, "/api/orders/5/pay").await, "order not found"),
    ];

    for (res, message) in cases {
        assert_eq!(res.status, StatusCode::NOT_FOUND, "{}", message);
        assert_eq!(res.json["error"], message);
    }
}

#[tokio::test]
async fn test_open_occupied_table_is_400() {
    let app = app();
    post(&app, "/api/tables/1/open", json!({"people_count": 2})).await;

    let res = post(&app, "/api/tables/1/open", json!({"people_count": 5})).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json["error"], "table already in use");

    let tables = get(&app, "/api/tables").await;
    assert_eq!(tables.json[0]["people_count"], 2);
}

#[tokio::test]
async fn test_status_accepts_any_string() {
    let app = app();
    post(&app, "/api/cart/items", json!({"table_id": 1, "dish_id": 4, "quantity": 1})).await;
    let order = post(&app, "/api/orders", json!({"table_id": 1, "people_count": 1})).await;
    let uri = format!("/api/orders/{}/status", order.json["id"]);

    let res = post(&app, &uri, json!({"status": "PAID"})).await;
    assert_eq!(res.json["status"], "PAID");
    let res = post(&app, &uri, json!({"status": "PLACED"})).await;
    assert_eq!(res.json["status"], "PLACED");
    let res = post(&app, &uri, json!({"status": "whatever"})).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json["status"], "whatever");
}

#[tokio::test]
async fn test_pay_tolerates_missing_or_bad_body() {
    let app = app();
    post(&app, "/api/cart/items", json!({"table_id": 1, "dish_id": 4, "quantity": 1})).await;
    let order = post(&app, "/api/orders", json!({"table_id": 1, "people_count": 1})).await;
    let uri = format!("/api/orders/{}/pay", order.json["id"]);

    let res = post_empty(&app, &uri).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json["pay_method"], "");
    assert_eq!(res.json["transaction_id"], "");
    assert_eq!(res.json["order"]["status"], "PAID");

    let request = Request::builder()
        .method(Method::POST)
        .uri(&uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("garbage"))
        .unwrap();
    let res = send_raw(&app, request).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json["pay_method"], "");
}

#[tokio::test]
async fn test_responses_disable_caching() {
    let app = app();
    for res in [get(&app, "/api/tables").await, get(&app, "/api/orders/77").await] {
        assert_eq!(
            res.headers[header::CACHE_CONTROL],
            "no-cache, no-store, must-revalidate"
        );
        assert_eq!(res.headers[header::PRAGMA], "no-cache");
        assert_eq!(res.headers[header::EXPIRES], "0");
    }
}

#[tokio::test]
async fn test_cors() {
    let app = app();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/cart/items")
        .header(header::ORIGIN, "http://pad.local")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let res = send_raw(&app, request).await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);
    assert_eq!(res.json, serde_json::Value::Null);
    assert_eq!(res.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    let methods = res.headers[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
    assert!(methods.contains("DELETE"));
    assert_eq!(res.headers[header::CACHE_CONTROL], "no-cache, no-store, must-revalidate");

    let request = Request::builder()
        .uri("/api/categories")
        .header(header::ORIGIN, "http://pad.local")
        .body(Body::empty())
        .unwrap();
    let res = send_raw(&app, request).await;
    assert_eq!(res.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn test_plain_options_is_no_content() {
    let app = app();

    for uri in ["/api/categories", "/api/nope"] {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri(uri)
            .header(header::ORIGIN, "http://pad.local")
            .body(Body::empty())
            .unwrap();
        let res = send_raw(&app, request).await;
        assert_eq!(res.status, StatusCode::NO_CONTENT, "{}", uri);
        assert_eq!(res.json, serde_json::Value::Null);
        assert_eq!(res.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(res.headers[header::EXPIRES], "0");
    }
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = app();
    let res = get(&app, "/api/nope").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.json["error"], "route not found");
    assert_eq!(res.json["code"], 3);
}
