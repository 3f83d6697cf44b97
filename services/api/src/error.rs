use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rollcall_common::error::RollcallError;
use serde::Serialize;

pub struct ApiError(pub RollcallError);

impl From<RollcallError> for ApiError {
    fn from(err: RollcallError) -> Self {
        Self(err)
    }
}

/// `{"status": "error", "statusCode": .., "message": ..}`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub status: &'static str,
    pub status_code: u16,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(status: StatusCode, message: String) -> Self {
        Self {
            status: "error",
            status_code: status.as_u16(),
            message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            RollcallError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            RollcallError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }

        (status, Json(ErrorEnvelope::new(status, message))).into_response()
    }
}
