use std::collections::BTreeMap;

use serde::Serialize;

use super::handlers::ApiError;
use crate::domain::user::models::EmailAddress;

/// Field-level request validation failures, keyed by camelCase field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Record `message` against `field` unless `condition` holds.
    pub fn ensure(&mut self, condition: bool, field: &str, message: impl Into<String>) {
        if !condition {
            self.add(field, message);
        }
    }

    pub fn required(&mut self, field: &str, label: &str, value: &str) -> bool {
        let present = !value.trim().is_empty();
        self.ensure(present, field, format!("{label} is required"));
        present
    }

    /// Character-count bounds, inclusive.
    pub fn length(&mut self, field: &str, label: &str, value: &str, min: usize, max: usize) {
        let length = value.chars().count();
        self.ensure(
            (min..=max).contains(&length),
            field,
            format!("{label} must be between {min} and {max} characters"),
        );
    }

    pub fn max_length(&mut self, field: &str, label: &str, value: &str, max: usize) {
        self.ensure(
            value.chars().count() <= max,
            field,
            format!("{label} cannot exceed {max} characters"),
        );
    }

    /// Validate an email field, returning the parsed address when valid.
    pub fn email(&mut self, field: &str, value: &str) -> Option<EmailAddress> {
        if !self.required(field, "Email", value) {
            return None;
        }
        match EmailAddress::new(value.trim().to_string()) {
            Ok(email) => Some(email),
            Err(_) => {
                self.add(field, "Invalid email format");
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn into_result(self) -> Result<(), ApiError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(self))
        }
    }
}
