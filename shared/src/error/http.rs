use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// HTTP status written with this code
    ///
    /// Occupied tables are a conflict but are reported as 400, like every
    /// other rejected request.
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::NotFound
            | Self::OrderNotFound
            | Self::CartItemNotFound
            | Self::TableNotFound
            | Self::TableNoCurrentOrder => StatusCode::NOT_FOUND,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ValidationFailed
            | Self::InvalidFormat
            | Self::RequiredField
            | Self::OrderEmpty
            | Self::TableOccupied => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_by_code() {
        let cases = [
            (ErrorCode::TableNoCurrentOrder, StatusCode::NOT_FOUND),
            (ErrorCode::CartItemNotFound, StatusCode::NOT_FOUND),
            (ErrorCode::OrderEmpty, StatusCode::BAD_REQUEST),
            (ErrorCode::TableOccupied, StatusCode::BAD_REQUEST),
            (ErrorCode::InvalidFormat, StatusCode::BAD_REQUEST),
            (ErrorCode::InternalError, StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (code, status) in cases {
            assert_eq!(code.http_status(), status, "{:?}", code);
        }
    }

    #[test]
    fn test_no_code_is_2xx() {
        assert!(ErrorCode::ALL.iter().all(|c| !c.http_status().is_success()));
    }
}
