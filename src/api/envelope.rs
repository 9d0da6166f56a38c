use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// Uniform response wrapper returned by every endpoint that has a body.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: String,
    pub errors: BTreeMap<String, Value>
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T, message: &str) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.to_string(),
            errors: BTreeMap::new()
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            success: false,
            data: None,
            message,
            errors: BTreeMap::new()
        }
    }

    pub fn with_error(mut self, field: &str, detail: impl Into<Value>) -> Self {
        self.errors.insert(field.to_string(), detail.into());
        self
    }
}
