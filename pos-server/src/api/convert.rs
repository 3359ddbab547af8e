//! 请求解析辅助
//!
//! axum 默认的提取失败返回纯文本；这里统一转换为 `{"error": ...}` JSON。

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use shared::util::parse_id;

use crate::utils::{AppError, AppResult};

/// JSON body extractor whose rejection is an [`AppError`] (`invalid body`)
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(invalid_body(&rejection)),
        }
    }
}

pub fn invalid_body(rejection: &JsonRejection) -> AppError {
    tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
    AppError::invalid_format("invalid body").with_detail("reason", rejection.body_text())
}

/// Path id of a generic resource (`invalid id` on failure)
pub fn path_id(raw: &str) -> AppResult<i64> {
    parse_id(raw, "id")
}

/// Path id of a table (`invalid table id` on failure)
pub fn table_path_id(raw: &str) -> AppResult<i64> {
    parse_id(raw, "table id")
}
