//! Error-to-response mapping for the HTTP boundary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::domain::errors::{BridgeError, UpstreamError};

/// Errors a handler can return.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error("Invalid {resource} id: {raw}")]
    InvalidId { resource: &'static str, raw: String },
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        Self::Bridge(err.into())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<&'static str>,
}

impl ApiError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Bridge(BridgeError::Upstream(_)) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Bridge(BridgeError::Service(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidId { .. } => StatusCode::BAD_REQUEST,
        }
    }

    fn body(&self) -> ErrorResponse {
        let status = self.status().as_u16();
        match self {
            // The cause stays in the logs; callers get the fixed text
            Self::Bridge(BridgeError::Upstream(_)) => ErrorResponse {
                success: false,
                status,
                message: UpstreamError::USER_MESSAGE.to_string(),
                source: Some(UpstreamError::SOURCE_MARKER),
            },
            _ => ErrorResponse {
                success: false,
                status,
                message: self.to_string(),
                source: None,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self, "request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "rejected request");
        }

        (status, Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{ServiceError, UpstreamCause};

    #[test]
    fn test_upstream_failure_uses_fixed_message() {
        let err: ApiError = UpstreamError::new(
            "/users/1",
            UpstreamCause::Status {
                status: 500,
                body: "stack trace from the mainframe".to_string(),
            },
        )
        .into();

        let body = err.body();
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.status, 503);
        assert_eq!(body.source, Some("legacy-api"));
        assert!(!body.message.contains("mainframe"));
        assert_eq!(body.message, UpstreamError::USER_MESSAGE);
    }

    #[test]
    fn test_every_upstream_cause_maps_identically() {
        let causes = [
            UpstreamCause::Timeout("deadline exceeded".into()),
            UpstreamCause::Status {
                status: 404,
                body: String::new(),
            },
            UpstreamCause::Decode("bad json".into()),
            UpstreamCause::Transport("connection refused".into()),
        ];

        for cause in causes {
            let err: ApiError = UpstreamError::new("/posts", cause).into();
            let body = serde_json::to_value(err.body()).unwrap();
            assert_eq!(
                body,
                serde_json::json!({
                    "success": false,
                    "status": 503,
                    "message": UpstreamError::USER_MESSAGE,
                    "source": "legacy-api",
                })
            );
        }
    }

    #[test]
    fn test_service_error_is_500_without_source() {
        let err = ApiError::Bridge(ServiceError::for_id("fetch payment", 3, "boom").into());
        let body = err.body();

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, "Failed to fetch payment 3: boom");
        assert!(body.source.is_none());
    }

    #[test]
    fn test_invalid_id_is_400() {
        let err = ApiError::InvalidId {
            resource: "customer",
            raw: "abc".to_string(),
        };
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body().message, "Invalid customer id: abc");
    }
}
