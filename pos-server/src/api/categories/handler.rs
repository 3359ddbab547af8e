//! Category API Handlers

use axum::{Json, extract::State};
use shared::models::Category;

use crate::core::ServerState;

/// GET /api/categories - 获取所有分类
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Category>> {
    Json(state.catalog().list_categories())
}
