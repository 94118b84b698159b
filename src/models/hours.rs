use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Opening hours for one weekday. Exactly seven rows exist, seeded by the
/// initial migration; times are `HH:MM` strings, absent when that half-day
/// is not worked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessHours {
    pub weekday: String,
    pub morning_open: Option<String>,
    pub morning_close: Option<String>,
    pub afternoon_open: Option<String>,
    pub afternoon_close: Option<String>,
    pub closed: bool,
}

impl BusinessHours {
    pub fn weekday(&self) -> Option<Weekday> {
        weekday_from_str(&self.weekday)
    }
}

pub fn weekday_from_str(s: &str) -> Option<Weekday> {
    match s {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}
