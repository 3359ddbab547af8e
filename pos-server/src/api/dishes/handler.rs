//! Dish API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use shared::models::Dish;
use shared::util::parse_optional_id;

use crate::core::ServerState;
use crate::utils::AppResult;

#[derive(Debug, Deserialize)]
pub struct DishQuery {
    pub category_id: Option<String>,
}

/// GET /api/dishes?category_id= - 获取菜品，可按分类过滤
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<DishQuery>,
) -> AppResult<Json<Vec<Dish>>> {
    let category_id = parse_optional_id(query.category_id.as_deref(), "category_id")?;
    Ok(Json(state.catalog().list_dishes(category_id)))
}
