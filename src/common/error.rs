// Error handling types for the console client

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

use super::validation::ValidationResult;

/// Field name to messages, as carried by 400 responses.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Marker strings the backend puts in 400/409 bodies for uniqueness and
/// referential conflicts.
const DUPLICATE_MARKERS: [&str; 2] = ["already exists", "duplicate"];
const IN_USE_MARKERS: [&str; 2] = ["in use", "is referenced"];

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Validation Error: {}", .message.as_deref().unwrap_or("request was rejected"))]
    Validation {
        status: u16,
        message: Option<String>,
        fields: FieldErrors,
    },

    #[error("Unauthorized")]
    Unauthorized { message: Option<String> },

    #[error("Forbidden: {}", .message.as_deref().unwrap_or("access denied"))]
    Forbidden { message: Option<String> },

    #[error("Not Found: {}", .message.as_deref().unwrap_or("resource not found"))]
    NotFound { message: Option<String> },

    #[error("Conflict: {message}")]
    Conflict { status: u16, message: String },

    #[error("Server Error ({status}): {}", .message.as_deref().unwrap_or("request failed"))]
    Server { status: u16, message: Option<String> },

    #[error("Network Error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid Response: {0}")]
    Decode(String),

    #[error("Validation Error: {0}")]
    Invalid(ValidationResult),

    #[error("Form Error: {0}")]
    Form(#[from] crate::forms::FormError),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
}

/// Kind of conflict a server message describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    Duplicate,
    InUse,
    Other,
}

/// ASP.NET problem-details body, plus the `{ message }` shape some
/// controllers return instead.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    title: Option<String>,
    detail: Option<String>,
    message: Option<String>,
    error: Option<String>,
    errors: Option<Value>,
}

impl ClientError {
    /// Normalizes a non-success HTTP response into the error taxonomy.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let (message, fields) = parse_error_body(body);

        match status {
            400 | 422 => {
                let marked = message
                    .iter()
                    .chain(fields.values().flatten())
                    .find(|text| conflict_kind_of(text) != ConflictKind::Other)
                    .cloned();

                match marked {
                    Some(text) => ClientError::Conflict {
                        status,
                        message: text,
                    },
                    None => ClientError::Validation {
                        status,
                        message,
                        fields,
                    },
                }
            }
            401 => ClientError::Unauthorized { message },
            403 => ClientError::Forbidden { message },
            404 => ClientError::NotFound { message },
            409 => ClientError::Conflict {
                status,
                message: message.unwrap_or_else(|| "Conflict".to_string()),
            },
            _ => ClientError::Server { status, message },
        }
    }

    /// HTTP status carried by the error, when it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Unauthorized { .. } => Some(401),
            ClientError::Forbidden { .. } => Some(403),
            ClientError::NotFound { .. } => Some(404),
            ClientError::Validation { status, .. }
            | ClientError::Conflict { status, .. }
            | ClientError::Server { status, .. } => Some(*status),
            ClientError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Server supplied `detail`/`message`/`title`, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Validation { message, .. }
            | ClientError::Unauthorized { message }
            | ClientError::Forbidden { message }
            | ClientError::NotFound { message }
            | ClientError::Server { message, .. } => message.as_deref(),
            ClientError::Conflict { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Field-level messages from a server 400 or a local required-field check.
    pub fn field_errors(&self) -> Option<FieldErrors> {
        match self {
            ClientError::Validation { fields, .. } if !fields.is_empty() => Some(fields.clone()),
            ClientError::Invalid(result) if !result.is_valid => Some(result.field_errors()),
            _ => None,
        }
    }

    pub fn conflict_kind(&self) -> Option<ConflictKind> {
        match self {
            ClientError::Conflict { message, .. } => Some(conflict_kind_of(message)),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized { .. })
    }

    /// Network failures and 5xx responses; the user may simply retry.
    pub fn is_transient(&self) -> bool {
        match self {
            ClientError::Network(_) => true,
            ClientError::Server { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

impl From<ValidationResult> for ClientError {
    fn from(result: ValidationResult) -> Self {
        ClientError::Invalid(result)
    }
}

fn conflict_kind_of(text: &str) -> ConflictKind {
    let lowered = text.to_lowercase();
    if DUPLICATE_MARKERS.iter().any(|m| lowered.contains(m)) {
        ConflictKind::Duplicate
    } else if IN_USE_MARKERS.iter().any(|m| lowered.contains(m)) {
        ConflictKind::InUse
    } else {
        ConflictKind::Other
    }
}

fn parse_error_body(body: &[u8]) -> (Option<String>, FieldErrors) {
    let mut fields = FieldErrors::new();

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => {
            let parsed: ErrorBody =
                serde_json::from_value(Value::Object(map)).unwrap_or_default();

            let mut message = non_blank(parsed.detail)
                .or_else(|| non_blank(parsed.message))
                .or_else(|| non_blank(parsed.error));

            match parsed.errors {
                Some(Value::Object(errors)) => {
                    for (field, value) in errors {
                        let messages: Vec<String> = match value {
                            Value::Array(items) => items
                                .into_iter()
                                .filter_map(|item| item.as_str().map(str::to_string))
                                .collect(),
                            Value::String(text) => vec![text],
                            _ => Vec::new(),
                        };
                        if !messages.is_empty() {
                            fields.insert(field, messages);
                        }
                    }
                }
                Some(Value::Array(items)) if message.is_none() => {
                    let joined: Vec<String> = items
                        .into_iter()
                        .filter_map(|item| item.as_str().map(str::to_string))
                        .collect();
                    message = non_blank(Some(joined.join("; ")));
                }
                _ => {}
            }

            (message.or_else(|| non_blank(parsed.title)), fields)
        }
        Ok(Value::String(text)) => (non_blank(Some(text)), fields),
        Ok(_) => (None, fields),
        Err(_) => {
            let text = String::from_utf8_lossy(body).trim().to_string();
            // HTML error pages are not worth showing to a user
            if text.starts_with('<') {
                (None, fields)
            } else {
                (non_blank(Some(text)), fields)
            }
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
