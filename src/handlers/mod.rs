pub mod admin;
pub mod booking;
pub mod catalog;
pub mod contact;
pub mod health;

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{json, Value};

use crate::services::validation::FieldError;

/// Response envelope used by the public endpoints:
/// `{"status": "ok"|"error", "message": ..., "data"?: ..., "errors"?: ...}`.
#[derive(Serialize)]
pub struct ApiResponse {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,
}

impl ApiResponse {
    pub fn ok(message: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            status: "ok",
            message: message.into(),
            data,
            errors: None,
        }
    }

    pub fn error(message: impl Into<String>, errors: Option<Value>) -> Self {
        Self {
            status: "error",
            message: message.into(),
            data: None,
            errors,
        }
    }
}

/// Groups field errors into `{"field": ["message", ...]}`.
pub fn field_errors_json(errors: &[FieldError]) -> Value {
    let mut map: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for error in errors {
        map.entry(error.field).or_default().push(&error.message);
    }
    json!(map)
}
