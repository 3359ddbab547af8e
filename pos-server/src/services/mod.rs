//! Services - HTTP 服务组装

pub mod http;

pub use self::http::{build_app, build_router};
