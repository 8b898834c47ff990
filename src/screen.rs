// src/screen.rs
//! One resource page: list, create/edit modal, detail modal, toasts and
//! the role gate, wired so every successful mutation re-fetches the list.

use std::sync::Arc;
use tracing::info;

use crate::auth::RoleGate;
use crate::common::helpers::capitalize;
use crate::common::{ClientResult, RecordId};
use crate::forms::{FormModal, ViewModal};
use crate::http::{ApiClient, Session};
use crate::listing::{ListController, ListSnapshot, Refresh};
use crate::notifications::{notify_failure, MessageContext, Notifier};
use crate::resources::{HasStatus, Resource, ResourceClient};

pub type ResourceList<R> = ListController<ResourceClient<R>>;

pub struct ResourceScreen<R: Resource> {
    client: ResourceClient<R>,
    list: Arc<ResourceList<R>>,
    form: FormModal<R>,
    view: ViewModal<R>,
    notifier: Arc<dyn Notifier>,
    gate: RoleGate,
    session: Session,
}

impl<R: Resource> ResourceScreen<R> {
    pub fn new(api: ApiClient, notifier: Arc<dyn Notifier>, page_size: u32) -> Self {
        let session = api.session().clone();
        let client = ResourceClient::<R>::new(api);
        let list = Arc::new(ListController::new(
            client.clone(),
            R::PLURAL,
            R::default_filters(),
            page_size,
        ));
        let form =
            FormModal::new(client.clone(), notifier.clone()).with_refresh(list.clone());
        let view = ViewModal::new(client.clone(), notifier.clone());

        Self {
            client,
            list,
            form,
            view,
            notifier,
            gate: RoleGate::new(R::MANAGERS),
            session,
        }
    }

    pub fn client(&self) -> &ResourceClient<R> {
        &self.client
    }

    pub fn list(&self) -> &ResourceList<R> {
        &self.list
    }

    pub fn form(&self) -> &FormModal<R> {
        &self.form
    }

    pub fn view(&self) -> &ViewModal<R> {
        &self.view
    }

    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    /// Whether create/edit/delete affordances are shown.
    pub async fn can_manage(&self) -> bool {
        self.gate.permits(&self.session).await
    }

    pub async fn snapshot(&self) -> ListSnapshot<R::Item> {
        self.list.snapshot().await
    }

    /// Initial fetch when the page opens.
    pub async fn open(&self) -> ClientResult<()> {
        self.list.load().await
    }

    /// Deletes (or soft-deletes) a record, then re-fetches the list.
    pub async fn delete(&self, id: RecordId) -> ClientResult<()> {
        if let Err(err) = self.client.delete(id).await {
            notify_failure(
                self.notifier.as_ref(),
                &err,
                &MessageContext::new("delete", R::LABEL),
            );
            return Err(err);
        }

        self.notifier
            .success(&format!("{} deleted successfully", capitalize(R::LABEL)));
        self.refresh_after_mutation().await;
        Ok(())
    }

    async fn refresh_after_mutation(&self) {
        if let Err(e) = self.list.refresh().await {
            info!(resource = R::PATH, error = %e, "List refresh after mutation failed");
        }
    }
}

impl<R: HasStatus> ResourceScreen<R> {
    pub async fn change_status(&self, id: RecordId, status: &str) -> ClientResult<()> {
        if let Err(err) = self.client.set_status(id, status).await {
            notify_failure(
                self.notifier.as_ref(),
                &err,
                &MessageContext::new("update status of", R::LABEL),
            );
            return Err(err);
        }

        self.notifier
            .success(&format!("{} status updated to {}", capitalize(R::LABEL), status.trim()));
        self.refresh_after_mutation().await;
        Ok(())
    }
}
