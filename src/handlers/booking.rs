use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::services::booking::{self, BookingOutcome};
use crate::services::validation::BookingInput;
use crate::state::AppState;

use super::{field_errors_json, ApiResponse};

// POST /api/appointments
pub async fn create_appointment(
    State(state): State<Arc<AppState>>,
    Json(input): Json<BookingInput>,
) -> Response {
    match booking::submit_booking(&state, input).await {
        Ok(BookingOutcome::Accepted(appointment)) => (
            StatusCode::CREATED,
            Json(ApiResponse::ok(
                "Your appointment request has been recorded. We will contact you shortly to confirm.",
                Some(serde_json::to_value(appointment).unwrap_or_default()),
            )),
        )
            .into_response(),
        Ok(BookingOutcome::Rejected(errors)) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(
                "validation failed",
                Some(field_errors_json(&errors)),
            )),
        )
            .into_response(),
        Ok(BookingOutcome::Malformed(detail)) => {
            tracing::debug!("malformed booking request: {detail}");
            (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error("invalid request", None)),
            )
                .into_response()
        }
        Err(e) => e.into_response(),
    }
}
