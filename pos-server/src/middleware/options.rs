//! OPTIONS 请求统一返回 204
//!
//! 预检由 CORS 层应答 (200)，普通 OPTIONS 会落到路由 (200 + Allow 或 404)。
//! 这里保留 CORS 头，把状态改为 204 并丢弃响应体。

use axum::{
    body::Body,
    extract::Request,
    http::{Method, StatusCode, header},
    middleware::Next,
    response::Response,
};

pub async fn options_no_content(req: Request, next: Next) -> Response {
    if req.method() != Method::OPTIONS {
        return next.run(req).await;
    }

    let (mut parts, _) = next.run(req).await.into_parts();
    parts.status = StatusCode::NO_CONTENT;
    for name in [header::CONTENT_TYPE, header::CONTENT_LENGTH, header::CONTENT_ENCODING] {
        parts.headers.remove(name);
    }
    Response::from_parts(parts, Body::empty())
}
