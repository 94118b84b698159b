use std::sync::LazyLock;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// How far ahead a requested date may lie.
pub const BOOKING_WINDOW_DAYS: i64 = 180;
pub const MAX_BOOKING_MESSAGE_LEN: usize = 500;
pub const MAX_CONTACT_MESSAGE_LEN: usize = 2000;

pub const DATE_FMT: &str = "%Y-%m-%d";

// Ivorian numbers: +225 country code followed by 8-10 digits, or a bare
// 10-digit local number.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\+225[0-9]{8,10}|[0-9]{10})$").unwrap());

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

// Letters (accented included), spaces, hyphens, apostrophes.
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\p{L} '\-]+$").unwrap());

/// Raw booking form as posted by the public site. Field names follow the
/// existing wire format (`nom` is the surname, `prenom` the given name).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingInput {
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub telephone: Option<String>,
    pub email: Option<String>,
    pub date: Option<String>,
    pub service: Option<String>,
    pub message: Option<String>,
}

/// Raw contact form as posted by the public site.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactInput {
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub sujet: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ValidatedBooking {
    pub last_name: String,
    pub first_name: String,
    pub phone: String,
    pub email: String,
    pub date: NaiveDate,
    pub service: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ValidatedContact {
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug)]
pub enum ValidationError {
    /// One or more field rules violated; every violation is reported.
    Invalid(Vec<FieldError>),
    /// Structurally unparsable input (a date string that is not a date).
    Malformed(String),
}

fn trimmed(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("").trim()
}

fn check_name(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    if value.is_empty() {
        errors.push(FieldError::new(field, "this field is required"));
    } else if !NAME_RE.is_match(value) {
        errors.push(FieldError::new(
            field,
            "only letters, spaces, hyphens and apostrophes are allowed",
        ));
    }
}

fn check_phone(errors: &mut Vec<FieldError>, value: &str, required: bool) {
    if value.is_empty() {
        if required {
            errors.push(FieldError::new("telephone", "this field is required"));
        }
    } else if !PHONE_RE.is_match(value) {
        errors.push(FieldError::new(
            "telephone",
            "invalid phone number (expected +225 followed by 8-10 digits, or 10 digits)",
        ));
    }
}

fn check_email(errors: &mut Vec<FieldError>, value: &str) {
    if value.is_empty() {
        errors.push(FieldError::new("email", "this field is required"));
    } else if value.len() > 254 || !EMAIL_RE.is_match(value) {
        errors.push(FieldError::new("email", "invalid email address"));
    }
}

fn check_date(
    errors: &mut Vec<FieldError>,
    date: NaiveDate,
    today: NaiveDate,
    closed_days: &[Weekday],
) {
    if date < today {
        errors.push(FieldError::new("date", "the date cannot be in the past"));
    } else if date > today + Duration::days(BOOKING_WINDOW_DAYS) {
        errors.push(FieldError::new(
            "date",
            format!("the date cannot be more than {BOOKING_WINDOW_DAYS} days ahead"),
        ));
    }

    if closed_days.contains(&date.weekday()) {
        errors.push(FieldError::new("date", "the clinic is closed on that day"));
    }
}

/// Pure field validation for an appointment request. Collects every violated
/// rule; an unparsable date short-circuits as `Malformed` instead.
pub fn validate_booking(
    input: &BookingInput,
    today: NaiveDate,
    closed_days: &[Weekday],
) -> Result<ValidatedBooking, ValidationError> {
    let nom = trimmed(&input.nom);
    let prenom = trimmed(&input.prenom);
    let telephone = trimmed(&input.telephone);
    let email = trimmed(&input.email);
    let date_raw = trimmed(&input.date);
    let service = trimmed(&input.service);
    let message = trimmed(&input.message);

    let mut errors = vec![];

    check_name(&mut errors, "nom", nom);
    check_name(&mut errors, "prenom", prenom);
    check_phone(&mut errors, telephone, true);
    check_email(&mut errors, email);

    let mut date = None;
    if date_raw.is_empty() {
        errors.push(FieldError::new("date", "this field is required"));
    } else {
        match NaiveDate::parse_from_str(date_raw, DATE_FMT) {
            Ok(d) => {
                check_date(&mut errors, d, today, closed_days);
                date = Some(d);
            }
            Err(_) => {
                return Err(ValidationError::Malformed(format!(
                    "date is not a valid {DATE_FMT} date"
                )))
            }
        }
    }

    if service.is_empty() {
        errors.push(FieldError::new("service", "this field is required"));
    }

    if message.chars().count() > MAX_BOOKING_MESSAGE_LEN {
        errors.push(FieldError::new(
            "message",
            format!("the message cannot exceed {MAX_BOOKING_MESSAGE_LEN} characters"),
        ));
    }

    if !errors.is_empty() {
        return Err(ValidationError::Invalid(errors));
    }

    Ok(ValidatedBooking {
        last_name: nom.to_string(),
        first_name: prenom.to_string(),
        phone: telephone.to_string(),
        email: email.to_string(),
        // Present when errors is empty, checked above.
        date: date.unwrap_or(today),
        service: service.to_string(),
        message: message.to_string(),
    })
}

/// Field validation for a contact message. The phone number is optional but
/// format-checked when supplied.
pub fn validate_contact(input: &ContactInput) -> Result<ValidatedContact, Vec<FieldError>> {
    let nom = trimmed(&input.nom);
    let prenom = trimmed(&input.prenom);
    let email = trimmed(&input.email);
    let telephone = trimmed(&input.telephone);
    let sujet = trimmed(&input.sujet);
    let message = trimmed(&input.message);

    let mut errors = vec![];

    check_name(&mut errors, "nom", nom);
    check_name(&mut errors, "prenom", prenom);
    check_email(&mut errors, email);
    check_phone(&mut errors, telephone, false);

    if sujet.is_empty() {
        errors.push(FieldError::new("sujet", "this field is required"));
    }

    if message.is_empty() {
        errors.push(FieldError::new("message", "this field is required"));
    } else if message.chars().count() > MAX_CONTACT_MESSAGE_LEN {
        errors.push(FieldError::new(
            "message",
            format!("the message cannot exceed {MAX_CONTACT_MESSAGE_LEN} characters"),
        ));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidatedContact {
        last_name: nom.to_string(),
        first_name: prenom.to_string(),
        email: email.to_string(),
        phone: if telephone.is_empty() {
            None
        } else {
            Some(telephone.to_string())
        },
        subject: sujet.to_string(),
        message: message.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> BookingInput {
        BookingInput {
            nom: Some("Koffi".to_string()),
            prenom: Some("Awa".to_string()),
            telephone: Some("0712345678".to_string()),
            email: Some("awa@example.com".to_string()),
            date: Some("2025-06-16".to_string()),
            service: Some("1".to_string()),
            message: Some("".to_string()),
        }
    }

    fn today() -> NaiveDate {
        // Monday
        NaiveDate::from_ymd_opt(2025, 6, 16).unwrap()
    }

    const SUNDAY_CLOSED: &[Weekday] = &[Weekday::Sun];

    fn fields_of(err: ValidationError) -> Vec<&'static str> {
        match err {
            ValidationError::Invalid(errors) => errors.into_iter().map(|e| e.field).collect(),
            ValidationError::Malformed(m) => panic!("unexpected malformed: {m}"),
        }
    }

    #[test]
    fn test_valid_booking_passes() {
        let validated = validate_booking(&valid_input(), today(), SUNDAY_CLOSED).unwrap();
        assert_eq!(validated.last_name, "Koffi");
        assert_eq!(validated.first_name, "Awa");
        assert_eq!(validated.date, today());
        assert_eq!(validated.message, "");
    }

    #[test]
    fn test_fields_are_trimmed() {
        let mut input = valid_input();
        input.nom = Some("  Koffi  ".to_string());
        input.email = Some(" awa@example.com ".to_string());
        let validated = validate_booking(&input, today(), SUNDAY_CLOSED).unwrap();
        assert_eq!(validated.last_name, "Koffi");
        assert_eq!(validated.email, "awa@example.com");
    }

    #[test]
    fn test_missing_fields_all_reported() {
        let input = BookingInput::default();
        let fields = fields_of(validate_booking(&input, today(), SUNDAY_CLOSED).unwrap_err());
        for field in ["nom", "prenom", "telephone", "email", "date", "service"] {
            assert!(fields.contains(&field), "missing error for {field}");
        }
    }

    #[test]
    fn test_whitespace_only_field_is_missing() {
        let mut input = valid_input();
        input.nom = Some("   ".to_string());
        let fields = fields_of(validate_booking(&input, today(), SUNDAY_CLOSED).unwrap_err());
        assert_eq!(fields, vec!["nom"]);
    }

    #[test]
    fn test_phone_formats() {
        for phone in ["0712345678", "+22507123456", "+2250712345678"] {
            let mut input = valid_input();
            input.telephone = Some(phone.to_string());
            assert!(
                validate_booking(&input, today(), SUNDAY_CLOSED).is_ok(),
                "{phone} should be accepted"
            );
        }
        for phone in ["12345", "+1234567890123", "07 12 34 56 78", "071234567", "abcdefghij"] {
            let mut input = valid_input();
            input.telephone = Some(phone.to_string());
            let fields = fields_of(validate_booking(&input, today(), SUNDAY_CLOSED).unwrap_err());
            assert_eq!(fields, vec!["telephone"], "{phone} should be rejected");
        }
    }

    #[test]
    fn test_invalid_email() {
        for email in ["not-an-email", "a@b", "@example.com", "a b@example.com"] {
            let mut input = valid_input();
            input.email = Some(email.to_string());
            let fields = fields_of(validate_booking(&input, today(), SUNDAY_CLOSED).unwrap_err());
            assert_eq!(fields, vec!["email"], "{email} should be rejected");
        }
    }

    #[test]
    fn test_accented_names_accepted() {
        let mut input = valid_input();
        input.nom = Some("N'Guessan".to_string());
        input.prenom = Some("Aïcha-Marie".to_string());
        assert!(validate_booking(&input, today(), SUNDAY_CLOSED).is_ok());
    }

    #[test]
    fn test_name_with_digits_rejected() {
        let mut input = valid_input();
        input.nom = Some("Koffi2".to_string());
        let fields = fields_of(validate_booking(&input, today(), SUNDAY_CLOSED).unwrap_err());
        assert_eq!(fields, vec!["nom"]);
    }

    #[test]
    fn test_past_date_rejected() {
        let mut input = valid_input();
        input.date = Some("2025-06-13".to_string()); // Friday before
        let fields = fields_of(validate_booking(&input, today(), SUNDAY_CLOSED).unwrap_err());
        assert_eq!(fields, vec!["date"]);
    }

    #[test]
    fn test_today_accepted() {
        let mut input = valid_input();
        input.date = Some("2025-06-16".to_string());
        assert!(validate_booking(&input, today(), SUNDAY_CLOSED).is_ok());
    }

    #[test]
    fn test_far_future_rejected() {
        let mut input = valid_input();
        // 181 days after 2025-06-16 is 2025-12-14; use a later Monday.
        input.date = Some("2025-12-15".to_string());
        let fields = fields_of(validate_booking(&input, today(), SUNDAY_CLOSED).unwrap_err());
        assert_eq!(fields, vec!["date"]);
    }

    #[test]
    fn test_window_boundary_accepted() {
        let mut input = valid_input();
        // Exactly 180 days ahead, a Saturday.
        input.date = Some("2025-12-13".to_string());
        assert!(validate_booking(&input, today(), SUNDAY_CLOSED).is_ok());
    }

    #[test]
    fn test_closed_weekday_rejected() {
        let mut input = valid_input();
        input.date = Some("2025-06-22".to_string()); // Sunday
        let fields = fields_of(validate_booking(&input, today(), SUNDAY_CLOSED).unwrap_err());
        assert_eq!(fields, vec!["date"]);
    }

    #[test]
    fn test_closed_weekday_reported_alongside_other_errors() {
        let mut input = valid_input();
        input.date = Some("2025-06-22".to_string()); // Sunday
        input.telephone = Some("12345".to_string());
        let fields = fields_of(validate_booking(&input, today(), SUNDAY_CLOSED).unwrap_err());
        assert!(fields.contains(&"date"));
        assert!(fields.contains(&"telephone"));
    }

    #[test]
    fn test_unparsable_date_is_malformed() {
        let mut input = valid_input();
        input.date = Some("16/06/2025".to_string());
        let err = validate_booking(&input, today(), SUNDAY_CLOSED).unwrap_err();
        assert!(matches!(err, ValidationError::Malformed(_)));
    }

    #[test]
    fn test_message_too_long() {
        let mut input = valid_input();
        input.message = Some("x".repeat(MAX_BOOKING_MESSAGE_LEN + 1));
        let fields = fields_of(validate_booking(&input, today(), SUNDAY_CLOSED).unwrap_err());
        assert_eq!(fields, vec!["message"]);
    }

    #[test]
    fn test_absent_message_is_empty_not_an_error() {
        let mut input = valid_input();
        input.message = None;
        let validated = validate_booking(&input, today(), SUNDAY_CLOSED).unwrap();
        assert_eq!(validated.message, "");
    }

    #[test]
    fn test_contact_valid() {
        let input = ContactInput {
            nom: Some("Koffi".to_string()),
            prenom: Some("Awa".to_string()),
            email: Some("awa@example.com".to_string()),
            telephone: None,
            sujet: Some("Question".to_string()),
            message: Some("Bonjour, avez-vous des créneaux en juillet ?".to_string()),
        };
        let validated = validate_contact(&input).unwrap();
        assert_eq!(validated.phone, None);
        assert_eq!(validated.subject, "Question");
    }

    #[test]
    fn test_contact_missing_fields() {
        let input = ContactInput::default();
        let fields: Vec<_> = validate_contact(&input)
            .unwrap_err()
            .into_iter()
            .map(|e| e.field)
            .collect();
        for field in ["nom", "prenom", "email", "sujet", "message"] {
            assert!(fields.contains(&field), "missing error for {field}");
        }
        // Optional for contact messages.
        assert!(!fields.contains(&"telephone"));
    }

    #[test]
    fn test_contact_bad_phone_when_present() {
        let input = ContactInput {
            nom: Some("Koffi".to_string()),
            prenom: Some("Awa".to_string()),
            email: Some("awa@example.com".to_string()),
            telephone: Some("12345".to_string()),
            sujet: Some("Question".to_string()),
            message: Some("Bonjour".to_string()),
        };
        let fields: Vec<_> = validate_contact(&input)
            .unwrap_err()
            .into_iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(fields, vec!["telephone"]);
    }
}
