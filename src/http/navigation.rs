// src/http/navigation.rs
//! Navigation target used by interceptors that need to move the user

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

#[async_trait]
pub trait Navigator: Send + Sync {
    async fn navigate(&self, path: &str);
}

/// In-memory location history. The CLI reads it after a command to see
/// whether the session was sent back to the login screen.
#[derive(Debug, Clone)]
pub struct History {
    entries: Arc<RwLock<Vec<String>>>,
}

impl Default for History {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History {
    pub fn new(start: &str) -> Self {
        Self {
            entries: Arc::new(RwLock::new(vec![start.to_string()])),
        }
    }

    pub async fn current(&self) -> String {
        self.entries
            .read()
            .await
            .last()
            .cloned()
            .unwrap_or_else(|| "/".to_string())
    }

    pub async fn entries(&self) -> Vec<String> {
        self.entries.read().await.clone()
    }
}

#[async_trait]
impl Navigator for History {
    async fn navigate(&self, path: &str) {
        info!(path = %path, "Navigating");
        self.entries.write().await.push(path.to_string());
    }
}
