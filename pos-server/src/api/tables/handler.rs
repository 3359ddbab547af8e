//! Dining Table API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{DiningTable, Order, TableOpen};

use crate::api::convert::{JsonBody, table_path_id};
use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/tables - 获取所有桌台
pub async fn list(State(state): State<ServerState>) -> Json<Vec<DiningTable>> {
    Json(state.store.list_tables())
}

/// POST /api/tables/:id/open - 开台
pub async fn open(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<TableOpen>,
) -> AppResult<Json<DiningTable>> {
    let table_id = table_path_id(&id)?;
    let table = state.store.open_table(table_id, payload.people_count)?;
    Ok(Json(table))
}

/// POST /api/tables/:id/close - 清台 (同时清空该桌购物车)
pub async fn close(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DiningTable>> {
    let table_id = table_path_id(&id)?;
    let table = state.store.close_table(table_id)?;
    Ok(Json(table))
}

/// GET /api/tables/:id/current-order - 桌台当前订单
pub async fn current_order(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let table_id = table_path_id(&id)?;
    let order = state.store.current_order_for_table(table_id)?;
    Ok(Json(order))
}
