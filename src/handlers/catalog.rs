use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::db::queries;
use crate::errors::AppError;
use crate::state::AppState;

use super::ApiResponse;

// GET /api/services
pub async fn list_services(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, AppError> {
    let services = {
        let db = state.db.lock().unwrap();
        queries::list_active_services(&db)?
    };
    Ok(Json(ApiResponse::ok(
        "",
        Some(serde_json::to_value(services).unwrap_or_default()),
    )))
}

// GET /api/team
pub async fn list_team(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, AppError> {
    let dentists = {
        let db = state.db.lock().unwrap();
        queries::list_active_dentists(&db)?
    };
    Ok(Json(ApiResponse::ok(
        "",
        Some(serde_json::to_value(dentists).unwrap_or_default()),
    )))
}

// GET /api/hours
pub async fn list_hours(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, AppError> {
    let hours = {
        let db = state.db.lock().unwrap();
        queries::list_business_hours(&db)?
    };
    Ok(Json(ApiResponse::ok(
        "",
        Some(serde_json::to_value(hours).unwrap_or_default()),
    )))
}
