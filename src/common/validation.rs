// Common validation types and traits

use serde::Serialize;
use serde_json::Value;
use std::fmt;

use super::error::FieldErrors;
use super::helpers::humanize_field;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        self.is_valid = false;
        self.errors.push(ValidationError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn merge(&mut self, other: ValidationResult) {
        if !other.is_valid {
            self.is_valid = false;
            self.errors.extend(other.errors);
        }
    }

    /// Groups messages by field, the same shape the server uses for 400 bodies.
    pub fn field_errors(&self) -> FieldErrors {
        let mut fields = FieldErrors::new();
        for error in &self.errors {
            fields
                .entry(error.field.clone())
                .or_default()
                .push(error.message.clone());
        }
        fields
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", messages.join(", "))
    }
}

pub trait Validator<T> {
    fn validate(&self, data: &T) -> ValidationResult;
}

// ============================================================================
// Required-field validation
// ============================================================================

/// Presence check driven by a list of wire field names.
///
/// The draft is serialized and each listed field must be present and
/// non-blank: `null`, whitespace-only strings and empty arrays all count
/// as missing. Numbers and booleans are always considered present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredFields {
    pub fields: &'static [&'static str],
}

impl RequiredFields {
    pub const fn new(fields: &'static [&'static str]) -> Self {
        Self { fields }
    }
}

impl<T: Serialize> Validator<T> for RequiredFields {
    fn validate(&self, data: &T) -> ValidationResult {
        let mut result = ValidationResult::new();

        let value = match serde_json::to_value(data) {
            Ok(value) => value,
            Err(e) => {
                result.add_error("form", &format!("Form could not be read: {}", e));
                return result;
            }
        };

        for field in self.fields {
            if is_blank(value.get(*field)) {
                result.add_error(field, &format!("{} is required", humanize_field(field)));
            }
        }

        result
    }
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(_) => false,
    }
}
