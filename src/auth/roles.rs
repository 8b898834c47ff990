//! Role gate for management affordances.
//!
//! This is a display decision only. The backend enforces authorization on
//! every request regardless of what the client shows.

use crate::http::Session;

pub const ADMIN: &str = "Admin";
pub const HR: &str = "HR";
pub const RECRUITER: &str = "Recruiter";
pub const INTERVIEWER: &str = "Interviewer";

/// Roles allowed to manage most resources.
pub const MANAGERS: &[&str] = &[ADMIN, HR];

/// Returns true when the current role is one of `allowed_roles`.
/// Comparison ignores case and surrounding whitespace; no role means no access.
pub fn can_manage(current_role: Option<&str>, allowed_roles: &[&str]) -> bool {
    let Some(role) = current_role.map(str::trim).filter(|r| !r.is_empty()) else {
        return false;
    };

    allowed_roles
        .iter()
        .any(|allowed| allowed.trim().eq_ignore_ascii_case(role))
}

/// A fixed allow-list evaluated against the session's current role.
#[derive(Debug, Clone, Copy)]
pub struct RoleGate {
    allowed: &'static [&'static str],
}

impl RoleGate {
    pub const fn new(allowed: &'static [&'static str]) -> Self {
        Self { allowed }
    }

    pub fn allowed(&self) -> &'static [&'static str] {
        self.allowed
    }

    pub async fn permits(&self, session: &Session) -> bool {
        let role = session.role().await;
        can_manage(role.as_deref(), self.allowed)
    }
}
