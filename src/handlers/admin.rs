use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::{Appointment, AppointmentStatus, ContactMessage};
use crate::state::AppState;

fn check_auth(headers: &HeaderMap, expected_token: &str) -> Result<(), AppError> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let token = auth.strip_prefix("Bearer ").unwrap_or("");
    if token != expected_token {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}

// GET /api/admin/appointments
#[derive(Deserialize)]
pub struct AppointmentsQuery {
    pub status: Option<String>,
    pub limit: Option<i64>,
}

pub async fn get_appointments(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<AppointmentsQuery>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let limit = query.limit.unwrap_or(50);
    let status_filter = query.status.as_deref();

    let appointments = {
        let db = state.db.lock().unwrap();
        queries::list_appointments(&db, status_filter, limit)?
    };

    Ok(Json(appointments))
}

// POST /api/admin/appointments/:id/status
#[derive(Deserialize)]
pub struct StatusUpdate {
    pub status: String,
    pub notes: Option<String>,
}

pub async fn update_appointment_status(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(update): Json<StatusUpdate>,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let status = AppointmentStatus::parse(&update.status)
        .ok_or_else(|| AppError::BadRequest(format!("unknown status: {}", update.status)))?;

    let updated = {
        let db = state.db.lock().unwrap();
        queries::update_appointment_status(&db, &id, status, update.notes.as_deref())?
    };

    if !updated {
        return Err(AppError::NotFound(format!("appointment {id}")));
    }
    Ok(Json(serde_json::json!({"ok": true})))
}

// GET /api/admin/contacts
#[derive(Deserialize)]
pub struct ContactsQuery {
    pub limit: Option<i64>,
}

pub async fn get_contacts(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<ContactsQuery>,
) -> Result<Json<Vec<ContactMessage>>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let limit = query.limit.unwrap_or(50);
    let contacts = {
        let db = state.db.lock().unwrap();
        queries::list_contacts(&db, limit)?
    };

    Ok(Json(contacts))
}

// POST /api/admin/contacts/:id/read
pub async fn mark_contact_read(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let updated = {
        let db = state.db.lock().unwrap();
        queries::mark_contact_read(&db, &id)?
    };

    if !updated {
        return Err(AppError::NotFound(format!("contact message {id}")));
    }
    Ok(Json(serde_json::json!({"ok": true})))
}
