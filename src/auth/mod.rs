//! # Auth Module
//!
//! Client-side view of the signed-in user:
//! - Role claim extraction from the bearer token
//! - Role gate deciding whether create/edit/delete affordances are shown

pub mod models;
pub mod roles;


pub use models::{role_from_token, Claims, RoleClaim};
pub use roles::{can_manage, RoleGate, ADMIN, HR, INTERVIEWER, MANAGERS, RECRUITER};
