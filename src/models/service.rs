use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A bookable clinical service. Only offerings with `active = true` may be
/// referenced by a new appointment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub duration_minutes: i64,
    pub active: bool,
    pub display_order: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
