// src/forms/view.rs
//! Read-only detail modal with an optional delegate action

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::state::FormError;
use crate::common::{ClientResult, RecordId};
use crate::notifications::{notify_failure, MessageContext, Notifier};
use crate::resources::{Resource, ResourceClient};

/// Extra action offered from a detail view, e.g. "Generate PDF" on an
/// offer letter.
#[async_trait]
pub trait ViewAction<R: Resource>: Send + Sync {
    type Output: Send;

    /// Verb used in messages: "generate PDF for".
    fn action(&self) -> &'static str;

    async fn run(&self, client: &ResourceClient<R>, item: &R::Item) -> ClientResult<Self::Output>;
}

pub struct ViewModal<R: Resource> {
    client: ResourceClient<R>,
    notifier: Arc<dyn Notifier>,
    item: RwLock<Option<R::Item>>,
}

impl<R: Resource> ViewModal<R> {
    pub fn new(client: ResourceClient<R>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            notifier,
            item: RwLock::new(None),
        }
    }

    pub async fn open_with(&self, item: R::Item) {
        *self.item.write().await = Some(item);
    }

    /// Fetches the record first; the modal stays closed if that fails.
    pub async fn open_by_id(&self, id: RecordId) -> ClientResult<R::Item> {
        match self.client.get(id).await {
            Ok(item) => {
                debug!(resource = R::PATH, id = id, "Detail opened");
                *self.item.write().await = Some(item.clone());
                Ok(item)
            }
            Err(err) => {
                notify_failure(
                    self.notifier.as_ref(),
                    &err,
                    &MessageContext::new("load", R::LABEL),
                );
                Err(err)
            }
        }
    }

    pub async fn close(&self) {
        *self.item.write().await = None;
    }

    pub async fn item(&self) -> Option<R::Item> {
        self.item.read().await.clone()
    }

    pub async fn is_open(&self) -> bool {
        self.item.read().await.is_some()
    }

    /// Runs `action` against the shown record. Failures are toasted and the
    /// modal stays open either way.
    pub async fn run<A>(&self, action: &A) -> ClientResult<A::Output>
    where
        A: ViewAction<R>,
    {
        let Some(item) = self.item().await else {
            return Err(FormError::NotOpen.into());
        };

        match action.run(&self.client, &item).await {
            Ok(output) => Ok(output),
            Err(err) => {
                notify_failure(
                    self.notifier.as_ref(),
                    &err,
                    &MessageContext::new(action.action(), R::LABEL),
                );
                Err(err)
            }
        }
    }
}
