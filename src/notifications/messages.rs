// src/notifications/messages.rs
//! Human-readable messages for failed operations

use crate::common::helpers::capitalize;
use crate::common::{ClientError, ConflictKind};

/// What was being attempted, for wording the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageContext<'a> {
    /// Verb: "load", "create", "update", "delete", ...
    pub action: &'a str,
    /// Singular or plural resource label: "qualification", "skills".
    pub label: &'a str,
}

impl<'a> MessageContext<'a> {
    pub fn new(action: &'a str, label: &'a str) -> Self {
        Self { action, label }
    }

    pub fn fallback(&self) -> String {
        format!("Failed to {} {}", self.action, self.label)
    }
}

/// Chooses the message shown for `err`.
///
/// Precedence: conflict wording, then field-level validation messages,
/// then the server's own `detail`/`message`/`title`, then a generic
/// "Failed to <action> <label>".
pub fn describe(err: &ClientError, ctx: &MessageContext<'_>) -> String {
    match err.conflict_kind() {
        Some(ConflictKind::Duplicate) => return format!("This {} already exists", ctx.label),
        Some(ConflictKind::InUse) => return format!("This {} is in use", ctx.label),
        _ => {}
    }

    if let Some(fields) = err.field_errors() {
        let messages: Vec<String> = fields.into_values().flatten().collect();
        if !messages.is_empty() {
            return messages.join("; ");
        }
    }

    match err {
        ClientError::Unauthorized { .. } => {
            return "Your session has expired. Please sign in again.".to_string()
        }
        ClientError::Forbidden { message: None } => {
            return format!("You are not allowed to {} {}", ctx.action, ctx.label)
        }
        ClientError::NotFound { message: None } => {
            return format!("{} not found", capitalize(ctx.label))
        }
        _ => {}
    }

    // 5xx bodies are stack traces as often as not
    if !err.is_transient() {
        if let Some(message) = err.server_message().map(str::trim).filter(|m| !m.is_empty()) {
            return message.to_string();
        }
    }

    ctx.fallback()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> MessageContext<'static> {
        MessageContext::new("create", "qualification")
    }

    #[test]
    fn test_duplicate_conflict_message() {
        let err = ClientError::from_response(400, br#"{"message":"Qualification 'MBA' already exists"}"#);
        assert_eq!(describe(&err, &ctx()), "This qualification already exists");
    }

    #[test]
    fn test_in_use_conflict_message() {
        let err = ClientError::from_response(409, br#"{"detail":"Skill is in use by 3 jobs"}"#);
        let ctx = MessageContext::new("delete", "skill");
        assert_eq!(describe(&err, &ctx), "This skill is in use");
    }

    #[test]
    fn test_field_errors_take_precedence_over_title() {
        let err = ClientError::from_response(
            400,
            br#"{"title":"One or more validation errors occurred.","status":400,
                "errors":{"Name":["The Name field is required."]}}"#,
        );
        assert_eq!(describe(&err, &ctx()), "The Name field is required.");
    }

    #[test]
    fn test_server_message_used_when_no_fields() {
        let err = ClientError::from_response(403, br#"{"message":"Only admins may do that"}"#);
        assert_eq!(describe(&err, &ctx()), "Only admins may do that");
    }

    #[test]
    fn test_generic_fallback_for_server_errors() {
        let err = ClientError::from_response(500, b"System.NullReferenceException at ...");
        assert_eq!(describe(&err, &ctx()), "Failed to create qualification");

        let err = ClientError::Decode("eof".to_string());
        assert_eq!(describe(&err, &ctx()), "Failed to create qualification");
    }

    #[test]
    fn test_status_specific_defaults() {
        let err = ClientError::from_response(404, b"");
        assert_eq!(describe(&err, &ctx()), "Qualification not found");

        let err = ClientError::from_response(401, b"");
        assert!(describe(&err, &ctx()).contains("sign in"));
    }
}
