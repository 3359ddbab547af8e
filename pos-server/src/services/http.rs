use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::core::ServerState;
use crate::middleware::{logging_middleware, options_no_content};
use crate::utils::AppError;

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(crate::api::health::router())
        // Menu
        .merge(crate::api::categories::router())
        .merge(crate::api::dishes::router())
        // Floor
        .merge(crate::api::tables::router())
        .merge(crate::api::cart::router())
        .merge(crate::api::orders::router())
        .fallback(route_not_found)
}

/// Build the full service: routes, state and the HTTP middleware stack
///
/// CORS is permissive, every OPTIONS request is answered with 204, and every
/// response carries no-cache headers.
pub fn build_router(state: ServerState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    build_app()
        .with_state(state)
        .layer(cors)
        .layer(middleware::from_fn(options_no_content))
        .layer(CompressionLayer::new())
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache, no-store, must-revalidate"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::PRAGMA,
            HeaderValue::from_static("no-cache"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::EXPIRES,
            HeaderValue::from_static("0"),
        ))
        .layer(middleware::from_fn(logging_middleware))
}

async fn route_not_found() -> AppError {
    AppError::not_found("route")
}
