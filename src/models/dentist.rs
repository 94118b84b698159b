use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dentist {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub specialty: String,
    pub bio: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub active: bool,
    pub display_order: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Dentist {
    pub fn full_name(&self) -> String {
        format!("Dr. {} {}", self.first_name, self.last_name)
    }
}
