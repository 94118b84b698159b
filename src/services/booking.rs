use chrono::Utc;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::{Appointment, AppointmentStatus};
use crate::services::validation::{self, BookingInput, FieldError, ValidationError};
use crate::services::{directory, notifications};
use crate::state::AppState;

#[derive(Debug)]
pub enum BookingOutcome {
    /// Persisted appointment request, notifications attempted.
    Accepted(Appointment),
    /// One or more field rules violated; all of them reported.
    Rejected(Vec<FieldError>),
    /// Structurally unparsable input.
    Malformed(String),
}

/// Appointment booking workflow: validate, resolve the service, persist,
/// then attempt both notifications. The record is committed once the insert
/// succeeds; notification failures are logged and never undo it.
pub async fn submit_booking(
    state: &AppState,
    input: BookingInput,
) -> Result<BookingOutcome, AppError> {
    let today = Utc::now().date_naive();

    let appointment = {
        let db = state.db.lock().unwrap();

        let closed_days = queries::closed_weekdays(&db)?;
        let validated = match validation::validate_booking(&input, today, &closed_days) {
            Ok(v) => v,
            Err(ValidationError::Invalid(errors)) => return Ok(BookingOutcome::Rejected(errors)),
            Err(ValidationError::Malformed(detail)) => {
                return Ok(BookingOutcome::Malformed(detail))
            }
        };

        let service = match directory::find_bookable(&db, &validated.service)? {
            Some(service) => service,
            None => {
                return Ok(BookingOutcome::Rejected(vec![FieldError::new(
                    "service",
                    "service unavailable",
                )]))
            }
        };

        let now = Utc::now().naive_utc();
        let appointment = Appointment {
            id: uuid::Uuid::new_v4().to_string(),
            first_name: validated.first_name,
            last_name: validated.last_name,
            phone: validated.phone,
            email: validated.email,
            requested_date: validated.date,
            service_id: service.id,
            service_name: service.name,
            message: validated.message,
            status: AppointmentStatus::Pending,
            admin_notes: String::new(),
            confirmed_at: None,
            created_at: now,
            updated_at: now,
        };

        // The one fatal path: an insert failure surfaces as a 500.
        queries::create_appointment(&db, &appointment)?;
        appointment
    };

    tracing::info!(
        appointment = %appointment.id,
        service = %appointment.service_name,
        date = %appointment.requested_date,
        "appointment request created"
    );

    // Best-effort, each attempted independently.
    notifications::send_confirmation(state.mailer.as_ref(), &state.config, &appointment).await;
    notifications::send_admin_alert(state.mailer.as_ref(), &state.config, &appointment).await;

    Ok(BookingOutcome::Accepted(appointment))
}
