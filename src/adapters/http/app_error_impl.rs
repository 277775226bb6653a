use crate::app_error::{AppError, ErrorCode};
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        tracing::error!(error = ?self, "Request failed");

        match self {
            AppError::Database(_) => {
                error_resp(StatusCode::SERVICE_UNAVAILABLE, ErrorCode::DatabaseError)
            }
            AppError::DuplicateEntry => error_resp(StatusCode::CONFLICT, ErrorCode::DuplicateEntry),
            AppError::Unacknowledged => {
                error_resp(StatusCode::SERVICE_UNAVAILABLE, ErrorCode::Unacknowledged)
            }
        }
    }
}

fn error_resp(status: StatusCode, code: ErrorCode) -> Response {
    (status, Json(serde_json::json!({ "code": code.as_str() }))).into_response()
}
