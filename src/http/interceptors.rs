// src/http/interceptors.rs
//! Response interceptors run on every failed request

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, warn};

use super::navigation::Navigator;
use super::session::Session;
use crate::common::ClientError;

/// Hook invoked with every normalized failure before it reaches the caller.
#[async_trait]
pub trait ResponseInterceptor: Send + Sync {
    async fn on_error(&self, method: &str, path: &str, error: &ClientError, session: &Session);
}

/// Ends the session on 401: clears the token and sends the user to the
/// login screen, whichever component made the call.
pub struct UnauthorizedRedirect {
    navigator: Arc<dyn Navigator>,
    login_path: String,
}

impl UnauthorizedRedirect {
    pub fn new(navigator: Arc<dyn Navigator>, login_path: impl Into<String>) -> Self {
        Self {
            navigator,
            login_path: login_path.into(),
        }
    }
}

#[async_trait]
impl ResponseInterceptor for UnauthorizedRedirect {
    async fn on_error(&self, method: &str, path: &str, err: &ClientError, session: &Session) {
        if !err.is_unauthorized() {
            return;
        }

        warn!(
            method = %method,
            path = %path,
            login_path = %self.login_path,
            "Request unauthorized, ending session"
        );
        session.clear().await;
        self.navigator.navigate(&self.login_path).await;
    }
}

/// Logs every failure: transient ones at error level, rejections (4xx,
/// local validation) at warn.
#[derive(Debug, Default)]
pub struct ErrorLogger;

#[async_trait]
impl ResponseInterceptor for ErrorLogger {
    async fn on_error(&self, method: &str, path: &str, err: &ClientError, _session: &Session) {
        if err.is_transient() {
            error!(
                method = %method,
                path = %path,
                status = ?err.status(),
                error = %err,
                "API request failed"
            );
        } else {
            warn!(
                method = %method,
                path = %path,
                status = ?err.status(),
                error = %err,
                "API request rejected"
            );
        }
    }
}
