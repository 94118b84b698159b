use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::services::contact::{self, ContactOutcome};
use crate::services::validation::ContactInput;
use crate::state::AppState;

use super::{field_errors_json, ApiResponse};

// POST /api/contact
pub async fn create_contact(
    State(state): State<Arc<AppState>>,
    Json(input): Json<ContactInput>,
) -> Response {
    match contact::submit_contact(&state, input).await {
        Ok(ContactOutcome::Accepted(message)) => (
            StatusCode::CREATED,
            Json(ApiResponse::ok(
                "Your message has been sent. We will reply as soon as possible.",
                Some(serde_json::to_value(message).unwrap_or_default()),
            )),
        )
            .into_response(),
        Ok(ContactOutcome::Rejected(errors)) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(
                "validation failed",
                Some(field_errors_json(&errors)),
            )),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
