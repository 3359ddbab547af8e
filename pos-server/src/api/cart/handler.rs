//! Cart API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use shared::models::{CartItem, CartItemCreate, CartItemUpdate, CartView};
use shared::util::parse_required_id;

use crate::api::convert::{JsonBody, path_id};
use crate::core::ServerState;
use crate::utils::AppResult;

#[derive(Debug, Deserialize)]
pub struct CartQuery {
    pub table_id: Option<String>,
}

/// GET /api/cart?table_id= - 查看购物车
pub async fn get_cart(
    State(state): State<ServerState>,
    Query(query): Query<CartQuery>,
) -> AppResult<Json<CartView>> {
    let table_id = parse_required_id(query.table_id.as_deref(), "table_id")?;
    Ok(Json(state.store.get_cart(table_id)))
}

/// POST /api/cart/items - 加入购物车
pub async fn add_item(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<CartItemCreate>,
) -> AppResult<Json<CartItem>> {
    let item = state.store.add_cart_item(payload)?;
    Ok(Json(item))
}

/// PUT /api/cart/items/:id - 修改数量或备注
pub async fn update_item(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<CartItemUpdate>,
) -> AppResult<Json<CartItem>> {
    let item_id = path_id(&id)?;
    let item = state.store.update_cart_item(item_id, payload)?;
    Ok(Json(item))
}

/// DELETE /api/cart/items/:id - 删除条目
pub async fn delete_item(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let item_id = path_id(&id)?;
    state.store.delete_cart_item(item_id)?;
    Ok(StatusCode::NO_CONTENT)
}
