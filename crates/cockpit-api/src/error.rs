//! API error type and the failure envelope

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use cockpit_core::Error as CoreError;

/// A wire-level API failure: HTTP status plus the `{code, message}` error
/// body. Handlers return this for every non-success outcome; unexpected
/// failures collapse to a generic 500 `SERVER_ERROR` and never leak raw
/// error chains to the caller.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    /// 400 VALIDATION_ERROR with the first validation message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message)
    }

    /// 400 INVALID_INPUT for missing required body fields.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "INVALID_INPUT", message)
    }

    pub fn source_not_found(source_id: &str) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            "SOURCE_NOT_FOUND",
            format!("Source with ID '{}' not found", source_id),
        )
    }

    pub fn conflict_not_found(conflict_id: &str) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            "CONFLICT_NOT_FOUND",
            format!("Conflict with ID '{}' not found", conflict_id),
        )
    }

    pub fn invalid_credentials() -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "INVALID_CREDENTIALS",
            "Invalid email or password",
        )
    }

    pub fn no_session() -> Self {
        Self::new(StatusCode::NOT_FOUND, "NO_SESSION", "No active session")
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "SERVER_ERROR", message)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(message) => ApiError::validation(message),
            CoreError::NotFound { code, message } => {
                ApiError::new(StatusCode::NOT_FOUND, code, message)
            }
            other => ApiError::server_error(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "success": false,
            "error": {
                "code": self.code,
                "message": self.message,
            },
        });
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_validation_maps_to_400() {
        let err: ApiError = CoreError::Validation("bad".into()).into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, "VALIDATION_ERROR");
    }

    #[test]
    fn core_not_found_keeps_its_wire_code() {
        let err: ApiError =
            CoreError::not_found("SOURCE_NOT_FOUND", "Source with ID 'x' not found").into();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.code, "SOURCE_NOT_FOUND");
    }

    #[test]
    fn unexpected_core_errors_collapse_to_server_error() {
        let err: ApiError = CoreError::Internal("boom".into()).into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code, "SERVER_ERROR");
    }
}
