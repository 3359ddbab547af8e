//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 运行状态、数据规模、一致性自检 |
//!
//! 发现一致性问题时 `status` 为 `degraded`，HTTP 状态仍为 200。

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;
use crate::store::ConsistencyIssue;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// ok | degraded
    status: &'static str,
    version: &'static str,
    uptime_seconds: u64,
    tables: usize,
    occupied_tables: usize,
    cart_items: usize,
    orders: usize,
    consistency_issues: Vec<ConsistencyIssue>,
}

async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let stats = state.store.stats();
    let consistency_issues = state.store.consistency_issues();

    Json(HealthResponse {
        status: if consistency_issues.is_empty() { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.uptime_seconds(),
        tables: stats.tables,
        occupied_tables: stats.occupied_tables,
        cart_items: stats.cart_items,
        orders: stats.orders,
        consistency_issues,
    })
}
