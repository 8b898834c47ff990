// src/http/session.rs
//! Session state shared by the HTTP client and its interceptors

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::auth::role_from_token;
use crate::common::safe_token_log;

#[derive(Debug, Default)]
struct SessionState {
    token: Option<String>,
    role: Option<String>,
}

/// Bearer token and role of the signed-in user.
///
/// Cloning is cheap and every clone observes the same state, so the client,
/// the unauthorized interceptor and the role gate can all hold one.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: Arc<RwLock<SessionState>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState {
                token: Some(token.into()),
                role: None,
            })),
        }
    }

    pub async fn token(&self) -> Option<String> {
        self.state.read().await.token.clone()
    }

    pub async fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        debug!(token = %safe_token_log(&token), "Session token set");
        self.state.write().await.token = Some(token);
    }

    /// Explicit role override; `None` falls back to the token's role claim.
    pub async fn set_role(&self, role: Option<String>) {
        self.state.write().await.role = role;
    }

    /// Current role: the explicit override if set, else the token claim.
    pub async fn role(&self) -> Option<String> {
        let state = self.state.read().await;
        if let Some(role) = &state.role {
            return Some(role.clone());
        }
        state.token.as_deref().and_then(role_from_token)
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.token.is_some()
    }

    /// Drops the token and any role override.
    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        state.token = None;
        state.role = None;
        debug!("Session cleared");
    }
}
