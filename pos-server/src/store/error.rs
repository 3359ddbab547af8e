use shared::error::{AppError, ErrorCode};
use shared::types::{CartItemId, OrderId, TableId};
use thiserror::Error;

/// Store errors
///
/// Every failure is detected before any state changes, so a returned error
/// always means "nothing happened".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("table not found")]
    TableNotFound(TableId),

    /// A request body referenced a table that does not exist
    #[error("table not found")]
    UnknownTable(TableId),

    #[error("table already in use")]
    TableOccupied(TableId),

    #[error("cart item not found")]
    CartItemNotFound(CartItemId),

    #[error("cart is empty")]
    EmptyCart(TableId),

    #[error("order not found")]
    OrderNotFound(OrderId),

    #[error("no current order for this table")]
    NoCurrentOrder(TableId),
}

impl StoreError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// 将仓库错误转换为带错误码的应用错误
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let message = err.to_string();
        match err {
            StoreError::InvalidArgument(_) => {
                AppError::with_message(ErrorCode::ValidationFailed, message)
            }
            StoreError::TableNotFound(id) => {
                AppError::with_message(ErrorCode::TableNotFound, message).with_detail("table_id", id)
            }
            StoreError::UnknownTable(id) => {
                AppError::with_message(ErrorCode::ValidationFailed, message).with_detail("table_id", id)
            }
            StoreError::TableOccupied(id) => {
                AppError::with_message(ErrorCode::TableOccupied, message).with_detail("table_id", id)
            }
            StoreError::CartItemNotFound(id) => {
                AppError::with_message(ErrorCode::CartItemNotFound, message)
                    .with_detail("cart_item_id", id)
            }
            StoreError::EmptyCart(id) => {
                AppError::with_message(ErrorCode::OrderEmpty, message).with_detail("table_id", id)
            }
            StoreError::OrderNotFound(id) => {
                AppError::with_message(ErrorCode::OrderNotFound, message).with_detail("order_id", id)
            }
            StoreError::NoCurrentOrder(id) => {
                AppError::with_message(ErrorCode::TableNoCurrentOrder, message)
                    .with_detail("table_id", id)
            }
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
