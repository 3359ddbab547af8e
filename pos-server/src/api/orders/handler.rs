//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use shared::models::{Order, OrderBill, OrderCreate, OrderStatusUpdate, PaymentInput, PaymentReceipt};

use crate::api::convert::{JsonBody, path_id};
use crate::core::ServerState;
use crate::utils::AppResult;

/// POST /api/orders - 下单
pub async fn place(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<OrderCreate>,
) -> AppResult<Json<Order>> {
    let order = state.store.place_order(payload)?;
    Ok(Json(order))
}

/// GET /api/orders/:id - 订单详情
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let order_id = path_id(&id)?;
    Ok(Json(state.store.get_order(order_id)?))
}

/// POST /api/orders/:id/status - 修改订单状态 (不校验流转)
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<OrderStatusUpdate>,
) -> AppResult<Json<Order>> {
    let order_id = path_id(&id)?;
    let order = state.store.update_order_status(order_id, payload.status)?;
    Ok(Json(order))
}

/// GET /api/orders/:id/bill - 账单
pub async fn bill(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<OrderBill>> {
    let order_id = path_id(&id)?;
    Ok(Json(state.store.get_bill(order_id)?))
}

/// POST /api/orders/:id/pay - 结账
///
/// body 缺失或无法解析时按空支付方式处理
pub async fn pay(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<PaymentInput>, JsonRejection>,
) -> AppResult<Json<PaymentReceipt>> {
    let order_id = path_id(&id)?;
    let payment = match payload {
        Ok(Json(payment)) => payment,
        Err(rejection) => {
            tracing::debug!(order_id, reason = %rejection.body_text(), "Pay without usable body");
            PaymentInput::default()
        }
    };
    Ok(Json(state.store.pay_order(order_id, payment)?))
}
