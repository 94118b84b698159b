use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] anyhow::Error),

    #[error("invalid request: {0}")]
    BadRequest(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("unauthorized")]
    Unauthorized,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
        };

        // Database details stay in the server log, the client gets a generic line.
        let message = match &self {
            AppError::Database(e) => {
                tracing::error!("database error: {e:#}");
                "an internal error occurred, please try again".to_string()
            }
            other => other.to_string(),
        };

        let body = serde_json::json!({ "status": "error", "message": message });
        (status, axum::Json(body)).into_response()
    }
}
