// src/forms/state.rs
//! Typed draft held by an open form

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::common::{RequiredFields, ValidationResult, Validator};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("No form is open")]
    NotOpen,
}

/// A draft plus the required-field list it is checked against.
///
/// Field access by wire name goes through the draft's JSON form, so any
/// serde draft type can be edited generically.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState<D> {
    draft: D,
    required: RequiredFields,
}

impl<D> FormState<D>
where
    D: Serialize + DeserializeOwned + Default + Clone,
{
    pub fn new(required: &'static [&'static str]) -> Self {
        Self::seeded(D::default(), required)
    }

    pub fn seeded(draft: D, required: &'static [&'static str]) -> Self {
        Self {
            draft,
            required: RequiredFields::new(required),
        }
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut D {
        &mut self.draft
    }

    pub fn into_draft(self) -> D {
        self.draft
    }

    /// Presence check of every required field.
    pub fn validate(&self) -> ValidationResult {
        self.required.validate(&self.draft)
    }

    /// Current value of a field by wire name.
    pub fn field(&self, name: &str) -> Result<Value, FormError> {
        self.to_object()?
            .remove(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    /// Sets a field by wire name. The draft is left untouched when the value
    /// does not fit the field's type.
    pub fn set_field(&mut self, name: &str, value: Value) -> Result<(), FormError> {
        let mut object = self.to_object()?;
        if !object.contains_key(name) && !Self::skipped_when_empty(&object, name) {
            return Err(FormError::UnknownField(name.to_string()));
        }
        object.insert(name.to_string(), value);

        let draft: D =
            serde_json::from_value(Value::Object(object)).map_err(|e| FormError::InvalidValue {
                field: name.to_string(),
                message: e.to_string(),
            })?;

        self.draft = draft;
        Ok(())
    }

    /// Sets a field from user-typed text.
    ///
    /// The text is tried as a JSON literal first (`42`, `true`, `[1,2]`) and
    /// falls back to a plain string, so `5` fills both a numeric id and a
    /// phone-number field. Blank text clears the field.
    pub fn set_text(&mut self, name: &str, text: &str) -> Result<(), FormError> {
        let text = text.trim();
        if text.is_empty() {
            return self.clear_field(name);
        }

        if let Ok(literal) = serde_json::from_str::<Value>(text) {
            if self.set_field(name, literal).is_ok() {
                return Ok(());
            }
        }
        self.set_field(name, Value::String(text.to_string()))
    }

    /// Resets a field to null, or to its empty value for non-optional fields.
    pub fn clear_field(&mut self, name: &str) -> Result<(), FormError> {
        if self.set_field(name, Value::Null).is_ok() {
            return Ok(());
        }

        let empty = match self.field(name)? {
            Value::String(_) => Value::String(String::new()),
            Value::Array(_) => Value::Array(Vec::new()),
            Value::Bool(_) => Value::Bool(false),
            other => other,
        };
        self.set_field(name, empty)
    }

    /// Fields serialized with `skip_serializing_if` are absent while empty.
    /// They are told apart from unknown names by whether a filled value
    /// survives a round trip through the draft type.
    fn skipped_when_empty(object: &Map<String, Value>, name: &str) -> bool {
        [Value::String(String::new()), Value::from(0), Value::Bool(false)]
            .into_iter()
            .any(|filled| {
                let mut probe = object.clone();
                probe.insert(name.to_string(), filled);
                serde_json::from_value::<D>(Value::Object(probe))
                    .ok()
                    .and_then(|draft| serde_json::to_value(&draft).ok())
                    .is_some_and(|v| v.get(name).is_some())
            })
    }

    fn to_object(&self) -> Result<Map<String, Value>, FormError> {
        match serde_json::to_value(&self.draft) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(FormError::InvalidValue {
                field: "form".to_string(),
                message: "draft is not an object".to_string(),
            }),
            Err(e) => Err(FormError::InvalidValue {
                field: "form".to_string(),
                message: e.to_string(),
            }),
        }
    }
}
