use crate::error::AppError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Converts AppError into a JSON `{"error": ...}` response.
///
/// Client-facing conditions keep their message. Everything else is logged
/// here and surfaced as a generic 500 body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Database(_)
            | AppError::Storage(_)
            | AppError::Config(_)
            | AppError::InvalidCorpus(_)
            | AppError::Internal(_) => {
                tracing::error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, axum::Json(body)).into_response()
    }
}
