//! Order API 模块
//!
//! # 路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/orders | POST | 购物车下单 |
//! | /api/orders/{id} | GET | 订单详情 |
//! | /api/orders/{id}/status | POST | 修改状态 |
//! | /api/orders/{id}/bill | GET | 账单 |
//! | /api/orders/{id}/pay | POST | 结账 (body 可省略) |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::place))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/status", post(handler::update_status))
        .route("/{id}/bill", get(handler::bill))
        .route("/{id}/pay", post(handler::pay))
}
