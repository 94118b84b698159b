use crate::config::AppConfig;
use crate::models::{Appointment, ContactMessage};
use crate::services::mail::Mailer;

const DISPLAY_DATE_FMT: &str = "%d/%m/%Y";

pub fn compose_confirmation(appt: &Appointment) -> (String, String) {
    let subject =
        "Confirmation de votre demande de rendez-vous - Clinique Ivoire Dentaire".to_string();
    let date = appt.requested_date.format(DISPLAY_DATE_FMT);

    let mut body = format!(
        "Bonjour {},\n\n\
         Nous avons bien reçu votre demande de rendez-vous pour le {date}.\n\n\
         Détails de votre demande :\n\
         - Service : {}\n\
         - Date souhaitée : {date}\n\
         - Téléphone : {}\n",
        appt.full_name(),
        appt.service_name,
        appt.phone,
    );
    if !appt.message.is_empty() {
        body.push_str(&format!("- Message : {}\n", appt.message));
    }
    body.push_str(
        "\nNotre équipe vous contactera dans les plus brefs délais pour confirmer votre rendez-vous.\n\n\
         Cordialement,\n\
         L'équipe de la Clinique Ivoire Dentaire\n",
    );

    (subject, body)
}

pub fn compose_admin_alert(appt: &Appointment) -> (String, String) {
    let subject = format!("Nouvelle demande de rendez-vous - {}", appt.full_name());
    let message = if appt.message.is_empty() {
        "Aucun message"
    } else {
        appt.message.as_str()
    };

    let body = format!(
        "Nouvelle demande de rendez-vous reçue :\n\n\
         Patient : {}\n\
         Email : {}\n\
         Téléphone : {}\n\
         Service : {}\n\
         Date souhaitée : {}\n\
         Message : {message}\n\n\
         Reçue le : {}\n",
        appt.full_name(),
        appt.email,
        appt.phone,
        appt.service_name,
        appt.requested_date.format(DISPLAY_DATE_FMT),
        appt.created_at.format("%d/%m/%Y à %H:%M"),
    );

    (subject, body)
}

pub fn compose_contact_alert(msg: &ContactMessage) -> (String, String) {
    let subject = format!("Nouveau message de contact - {}", msg.full_name());
    let body = format!(
        "Nouveau message de contact reçu :\n\n\
         Nom : {}\n\
         Email : {}\n\
         Téléphone : {}\n\
         Sujet : {}\n\n\
         Message :\n{}\n\n\
         Reçu le : {}\n",
        msg.full_name(),
        msg.email,
        msg.phone.as_deref().unwrap_or("non renseigné"),
        msg.subject,
        msg.message,
        msg.created_at.format("%d/%m/%Y à %H:%M"),
    );

    (subject, body)
}

/// Patient confirmation email. Failure is absorbed here: it is logged and
/// reported back as a bool, and must never affect the booking outcome.
pub async fn send_confirmation(mailer: &dyn Mailer, config: &AppConfig, appt: &Appointment) -> bool {
    let (subject, body) = compose_confirmation(appt);
    match mailer
        .send(&subject, &body, &config.mail_from, &[appt.email.clone()])
        .await
    {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(appointment = %appt.id, "failed to send confirmation email: {e:#}");
            false
        }
    }
}

/// Admin alert for a new appointment request. Same absorb-and-log policy.
pub async fn send_admin_alert(mailer: &dyn Mailer, config: &AppConfig, appt: &Appointment) -> bool {
    let (subject, body) = compose_admin_alert(appt);
    match mailer
        .send(&subject, &body, &config.mail_from, &[config.admin_email.clone()])
        .await
    {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(appointment = %appt.id, "failed to send admin alert email: {e:#}");
            false
        }
    }
}

/// Admin alert for a new contact message. Same absorb-and-log policy.
pub async fn send_contact_alert(
    mailer: &dyn Mailer,
    config: &AppConfig,
    msg: &ContactMessage,
) -> bool {
    let (subject, body) = compose_contact_alert(msg);
    match mailer
        .send(&subject, &body, &config.mail_from, &[config.admin_email.clone()])
        .await
    {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(contact = %msg.id, "failed to send contact alert email: {e:#}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppointmentStatus;
    use chrono::{NaiveDate, Utc};

    fn sample_appointment(message: &str) -> Appointment {
        let now = Utc::now().naive_utc();
        Appointment {
            id: "a1".to_string(),
            first_name: "Awa".to_string(),
            last_name: "Koffi".to_string(),
            phone: "0712345678".to_string(),
            email: "awa@example.com".to_string(),
            requested_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            service_id: 1,
            service_name: "Détartrage".to_string(),
            message: message.to_string(),
            status: AppointmentStatus::Pending,
            admin_notes: String::new(),
            confirmed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_confirmation_mentions_service_and_date() {
        let (subject, body) = compose_confirmation(&sample_appointment(""));
        assert!(subject.contains("Confirmation"));
        assert!(body.contains("Awa Koffi"));
        assert!(body.contains("Détartrage"));
        assert!(body.contains("01/07/2025"));
        assert!(!body.contains("- Message"));
    }

    #[test]
    fn test_confirmation_includes_optional_message() {
        let (_, body) = compose_confirmation(&sample_appointment("J'ai une douleur."));
        assert!(body.contains("- Message : J'ai une douleur."));
    }

    #[test]
    fn test_admin_alert_without_message() {
        let (subject, body) = compose_admin_alert(&sample_appointment(""));
        assert!(subject.contains("Awa Koffi"));
        assert!(body.contains("Aucun message"));
        assert!(body.contains("0712345678"));
    }
}
