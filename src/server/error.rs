//! Error bridge between library errors and HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::Error;

/// Wrapper that turns library errors into JSON error responses.
///
/// Handlers return `Result<_, ApiError>` and propagate library errors with
/// `?`; the conversion picks the status code and the `{"error": ...}` body.
#[derive(Debug)]
pub struct ApiError(Error);

/// Error response body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            Error::InvalidInput(message) => (StatusCode::BAD_REQUEST, message),
            Error::NotFound(_) => (StatusCode::NOT_FOUND, "Todo not found".to_string()),
            err => {
                tracing::error!("storage failure: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_maps_to_400() {
        let response =
            ApiError(Error::InvalidInput("Todo text is required".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ApiError(Error::NotFound(42)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_io_failure_maps_to_500() {
        let err = Error::Io(std::io::Error::other("disk gone"));
        let response = ApiError(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
