use chrono::Utc;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::ContactMessage;
use crate::services::notifications;
use crate::services::validation::{self, ContactInput, FieldError};
use crate::state::AppState;

#[derive(Debug)]
pub enum ContactOutcome {
    Accepted(ContactMessage),
    Rejected(Vec<FieldError>),
}

/// Contact submission workflow: validate, persist, one best-effort admin
/// notification. Same failure policy as the booking workflow.
pub async fn submit_contact(
    state: &AppState,
    input: ContactInput,
) -> Result<ContactOutcome, AppError> {
    let message = {
        let db = state.db.lock().unwrap();

        let validated = match validation::validate_contact(&input) {
            Ok(v) => v,
            Err(errors) => return Ok(ContactOutcome::Rejected(errors)),
        };

        let now = Utc::now().naive_utc();
        let message = ContactMessage {
            id: uuid::Uuid::new_v4().to_string(),
            first_name: validated.first_name,
            last_name: validated.last_name,
            email: validated.email,
            phone: validated.phone,
            subject: validated.subject,
            message: validated.message,
            read: false,
            processed: false,
            created_at: now,
            updated_at: now,
        };

        queries::create_contact(&db, &message)?;
        message
    };

    tracing::info!(contact = %message.id, subject = %message.subject, "contact message created");

    notifications::send_contact_alert(state.mailer.as_ref(), &state.config, &message).await;

    Ok(ContactOutcome::Accepted(message))
}
