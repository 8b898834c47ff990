// src/forms/modal.rs
//! Create/edit modal for one resource

use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::state::{FormError, FormState};
use crate::common::helpers::capitalize;
use crate::common::{ClientError, ClientResult, RecordId};
use crate::listing::Refresh;
use crate::notifications::{notify_failure, MessageContext, Notifier};
use crate::resources::{Record, Resource, ResourceClient};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

impl FormMode {
    pub fn action(&self) -> &'static str {
        match self {
            FormMode::Create => "create",
            FormMode::Edit(_) => "update",
        }
    }

    fn past_tense(&self) -> &'static str {
        match self {
            FormMode::Create => "created",
            FormMode::Edit(_) => "updated",
        }
    }
}

#[derive(Debug, Clone)]
struct OpenForm<D> {
    mode: FormMode,
    form: FormState<D>,
}

/// Modal controller for creating and editing records of `R`.
///
/// A failed submit leaves the modal open with the input intact; a
/// successful one closes it and asks the owning list to refresh.
pub struct FormModal<R: Resource> {
    client: ResourceClient<R>,
    notifier: Arc<dyn Notifier>,
    refresh: Option<Arc<dyn Refresh>>,
    open: RwLock<Option<OpenForm<R::Draft>>>,
}

impl<R: Resource> FormModal<R> {
    pub fn new(client: ResourceClient<R>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            notifier,
            refresh: None,
            open: RwLock::new(None),
        }
    }

    /// List to re-fetch after every successful submit.
    pub fn with_refresh(mut self, refresh: Arc<dyn Refresh>) -> Self {
        self.refresh = Some(refresh);
        self
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Opens in edit mode seeded from `existing`, or in create mode with an
    /// empty draft.
    pub async fn open(&self, existing: Option<&R::Item>) {
        let opened = match existing {
            Some(item) => OpenForm {
                mode: FormMode::Edit(item.id()),
                form: FormState::seeded(R::draft_from(item), R::REQUIRED),
            },
            None => OpenForm {
                mode: FormMode::Create,
                form: FormState::new(R::REQUIRED),
            },
        };
        *self.open.write().await = Some(opened);
    }

    pub async fn open_create(&self) {
        self.open(None).await;
    }

    pub async fn open_edit(&self, item: &R::Item) {
        self.open(Some(item)).await;
    }

    /// Discards the draft, saved or not.
    pub async fn cancel(&self) {
        *self.open.write().await = None;
    }

    pub async fn is_open(&self) -> bool {
        self.open.read().await.is_some()
    }

    pub async fn mode(&self) -> Option<FormMode> {
        self.open.read().await.as_ref().map(|open| open.mode)
    }

    pub async fn draft(&self) -> Option<R::Draft> {
        self.open
            .read()
            .await
            .as_ref()
            .map(|open| open.form.draft().clone())
    }

    // ========================================================================
    // Editing
    // ========================================================================

    pub async fn set_field(&self, name: &str, value: Value) -> Result<(), FormError> {
        let mut open = self.open.write().await;
        let open = open.as_mut().ok_or(FormError::NotOpen)?;
        open.form.set_field(name, value)
    }

    pub async fn set_text(&self, name: &str, text: &str) -> Result<(), FormError> {
        let mut open = self.open.write().await;
        let open = open.as_mut().ok_or(FormError::NotOpen)?;
        open.form.set_text(name, text)
    }

    /// Mutates the typed draft in place.
    pub async fn edit<F>(&self, f: F) -> Result<(), FormError>
    where
        F: FnOnce(&mut R::Draft),
    {
        let mut open = self.open.write().await;
        let open = open.as_mut().ok_or(FormError::NotOpen)?;
        f(open.form.draft_mut());
        Ok(())
    }

    // ========================================================================
    // Submit
    // ========================================================================

    /// Validates required fields, then creates or updates.
    ///
    /// Returns the saved record when the server sent one back (an update may
    /// answer 204).
    pub async fn submit(&self) -> ClientResult<Option<R::Item>> {
        let Some(OpenForm { mode, form }) = self.open.read().await.clone() else {
            return Err(FormError::NotOpen.into());
        };
        let ctx = MessageContext::new(mode.action(), R::LABEL);

        let validation = form.validate();
        if !validation.is_valid {
            let err = ClientError::Invalid(validation);
            notify_failure(self.notifier.as_ref(), &err, &ctx);
            return Err(err);
        }

        let draft = form.into_draft();
        let result = match mode {
            FormMode::Create => self.client.create(&draft).await.map(Some),
            FormMode::Edit(id) => self.client.update(id, &draft).await,
        };

        let saved = match result {
            Ok(saved) => saved,
            Err(err) => {
                notify_failure(self.notifier.as_ref(), &err, &ctx);
                return Err(err);
            }
        };

        info!(resource = R::PATH, mode = ?mode, "Form submitted");
        *self.open.write().await = None;
        self.notifier.success(&format!(
            "{} {} successfully",
            capitalize(R::LABEL),
            mode.past_tense()
        ));

        if let Some(refresh) = &self.refresh {
            // the list records its own failure state
            if let Err(e) = refresh.refresh().await {
                warn!(resource = R::PATH, error = %e, "Refresh after submit failed");
            }
        }

        Ok(saved)
    }
}
