//! 访问日志中间件
//!
//! 每个请求一条日志 (target `http_access`)，5xx 用 warn 级别

use axum::{
    extract::{MatchedPath, Request},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::time::Instant;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// 调用方提供的请求 ID，缺失时生成 UUID v4
fn request_id(headers: &HeaderMap) -> String {
    match headers.get(REQUEST_ID_HEADER).and_then(|v| v.to_str().ok()) {
        Some(id) if !id.is_empty() => id.to_owned(),
        _ => uuid::Uuid::new_v4().to_string(),
    }
}

/// 记录方法、路由、状态码和耗时
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let started = Instant::now();
    let request_id = request_id(req.headers());
    let method = req.method().to_string();
    // 优先使用路由模板，避免 id 把日志打散
    let route = match req.extensions().get::<MatchedPath>() {
        Some(matched) => matched.as_str().to_owned(),
        None => req.uri().path().to_owned(),
    };

    let response = next.run(req).await;

    let status = response.status();
    let latency_ms = started.elapsed().as_millis() as u64;
    if status.is_server_error() {
        tracing::warn!(target: "http_access", %request_id, %method, %route, status = status.as_u16(), latency_ms, "request failed");
    } else {
        tracing::info!(target: "http_access", %request_id, %method, %route, status = status.as_u16(), latency_ms, "request");
    }

    response
}
