// src/cli/commands.rs

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use recruit_console::forms::FormMode;
use recruit_console::http::{ApiClient, History};
use recruit_console::notifications::{notify_failure, MessageContext, Notifier};
use recruit_console::resources::documents::UploadRequest;
use recruit_console::resources::offer_letters::{pdf_file_name, GeneratePdf, GeneratePdfRequest};
use recruit_console::resources::{
    Applications, Candidates, Documents, EmailTemplates, Events, Exportable, HasStatus,
    Interviews, JobTypes, Jobs, OfferLetters, Positions, Qualifications, Resource,
    ResourceClient, Roles, Skills, Users, Verifications,
};
use recruit_console::services::{LookupService, ReportService};
use recruit_console::{ClientConfig, RecordId, ResourceScreen};

use super::args::{Command, ExportKind, ResourceKind, StatusKind};
use super::notifier::TerminalNotifier;
use super::render;

/// Binds the type alias `$r` to the resource selected by `$kind` and
/// evaluates `$body` with it.
macro_rules! with_resource {
    ($kind:expr, $r:ident => $body:expr) => {
        match $kind {
            ResourceKind::Skills => { type $r = Skills; $body }
            ResourceKind::Qualifications => { type $r = Qualifications; $body }
            ResourceKind::JobTypes => { type $r = JobTypes; $body }
            ResourceKind::Roles => { type $r = Roles; $body }
            ResourceKind::Users => { type $r = Users; $body }
            ResourceKind::EmailTemplates => { type $r = EmailTemplates; $body }
            ResourceKind::Documents => { type $r = Documents; $body }
            ResourceKind::Events => { type $r = Events; $body }
            ResourceKind::Verifications => { type $r = Verifications; $body }
            ResourceKind::Jobs => { type $r = Jobs; $body }
            ResourceKind::Candidates => { type $r = Candidates; $body }
            ResourceKind::OfferLetters => { type $r = OfferLetters; $body }
            ResourceKind::Interviews => { type $r = Interviews; $body }
            ResourceKind::Positions => { type $r = Positions; $body }
            ResourceKind::Applications => { type $r = Applications; $body }
        }
    };
}

/// Everything a command needs: the configured client and the toast sink.
pub struct App {
    pub config: ClientConfig,
    pub api: ApiClient,
    pub notifier: Arc<TerminalNotifier>,
    pub history: History,
}

impl App {
    fn screen<R: Resource>(&self) -> ResourceScreen<R> {
        ResourceScreen::new(self.api.clone(), self.notifier.clone(), self.config.page_size)
    }

    fn client<R: Resource>(&self) -> ResourceClient<R> {
        ResourceClient::new(self.api.clone())
    }

    /// True once a 401 has sent the session to the login screen.
    pub async fn session_expired(&self) -> bool {
        self.history.current().await == self.config.login_path
    }

    pub async fn run(&self, command: Command) -> Result<()> {
        match command {
            Command::List {
                resource,
                search,
                filters,
                page,
                ..
            } => with_resource!(resource, R => self.list::<R>(search, filters, page).await),
            Command::Show { resource, id } => {
                with_resource!(resource, R => self.show::<R>(id).await)
            }
            Command::Create { resource, fields } => {
                with_resource!(resource, R => self.save::<R>(None, fields).await)
            }
            Command::Update {
                resource,
                id,
                fields,
            } => with_resource!(resource, R => self.save::<R>(Some(id), fields).await),
            Command::Delete { resource, id } => {
                with_resource!(resource, R => self.delete::<R>(id).await)
            }
            Command::Export {
                resource,
                out,
                search,
            } => match resource {
                ExportKind::Jobs => self.export::<Jobs>(&out, search).await,
                ExportKind::Candidates => self.export::<Candidates>(&out, search).await,
            },
            Command::OfferPdf { id, out } => self.offer_pdf(id, &out).await,
            Command::Download { id, out } => self.download(id, &out).await,
            Command::Upload {
                file,
                candidate_id,
                name,
                description,
            } => self.upload(&file, candidate_id, name, description).await,
            Command::Resume { candidate_id, file } => self.resume(candidate_id, &file).await,
            Command::Screen { id } => self.screen_application(id).await,
            Command::Status {
                resource,
                id,
                status,
            } => match resource {
                StatusKind::Jobs => self.status::<Jobs>(id, &status).await,
                StatusKind::Verifications => self.status::<Verifications>(id, &status).await,
                StatusKind::Interviews => self.status::<Interviews>(id, &status).await,
                StatusKind::Applications => self.status::<Applications>(id, &status).await,
            },
            Command::Dashboard => self.dashboard().await,
            Command::Lookups => self.lookups().await,
        }
    }

    // ========================================================================
    // Generic resource commands
    // ========================================================================

    async fn list<R: Resource>(
        &self,
        search: Option<String>,
        filters: Vec<(String, String)>,
        page: u32,
    ) -> Result<()> {
        let screen = self.screen::<R>();
        let list = screen.list();

        if let Some(search) = search {
            list.set_filter("search", &search).await;
        }
        for (key, value) in &filters {
            list.set_filter(key, value).await;
        }

        // totals are unknown until the first page is in
        let loaded = match list.apply_filters().await {
            Ok(()) if page > 1 => list.change_page(page).await,
            other => other,
        };

        let snapshot = screen.snapshot().await;
        print!("{}", render::list_view::<R>(&snapshot));
        if !screen.can_manage().await {
            info!(resource = R::PATH, "Read-only access for the current role");
        }

        loaded.with_context(|| format!("listing {}", R::PLURAL))
    }

    async fn show<R: Resource>(&self, id: RecordId) -> Result<()> {
        let screen = self.screen::<R>();
        let item = screen
            .view()
            .open_by_id(id)
            .await
            .with_context(|| format!("loading {} {}", R::LABEL, id))?;
        println!("{}", render::record(&item));
        Ok(())
    }

    /// Create when `id` is `None`, otherwise edit the existing record.
    async fn save<R: Resource>(
        &self,
        id: Option<RecordId>,
        fields: Vec<(String, String)>,
    ) -> Result<()> {
        let screen = self.screen::<R>();
        if !screen.can_manage().await {
            info!(resource = R::PATH, "Current role may not manage this resource; the server decides");
        }

        let form = screen.form();
        match id {
            Some(id) => {
                let existing = screen
                    .view()
                    .open_by_id(id)
                    .await
                    .with_context(|| format!("loading {} {}", R::LABEL, id))?;
                form.open_edit(&existing).await;
            }
            None => form.open_create().await,
        }

        for (name, text) in &fields {
            if let Err(e) = form.set_text(name, text).await {
                self.notifier.error(&e.to_string());
                return Err(e).with_context(|| format!("setting {}", name));
            }
        }

        let mode = form.mode().await.unwrap_or(FormMode::Create);
        let saved = form
            .submit()
            .await
            .with_context(|| format!("{} {}", mode.action(), R::LABEL))?;

        if let Some(item) = saved {
            println!("{}", render::record(&item));
        }
        Ok(())
    }

    async fn delete<R: Resource>(&self, id: RecordId) -> Result<()> {
        self.screen::<R>()
            .delete(id)
            .await
            .with_context(|| format!("deleting {} {}", R::LABEL, id))
    }

    async fn status<R: HasStatus>(&self, id: RecordId, status: &str) -> Result<()> {
        self.screen::<R>()
            .change_status(id, status)
            .await
            .with_context(|| format!("changing status of {} {}", R::LABEL, id))
    }

    async fn export<R: Exportable>(&self, out: &Path, search: Option<String>) -> Result<()> {
        let mut filters = R::default_filters();
        if let Some(search) = search {
            filters.set("search", search);
        }

        let csv = match self.client::<R>().export_csv(&filters).await {
            Ok(csv) => csv,
            Err(err) => {
                notify_failure(
                    self.notifier.as_ref(),
                    &err,
                    &MessageContext::new("export", R::PLURAL),
                );
                return Err(err).context("exporting");
            }
        };

        let path = csv.save(out, R::EXPORT_FILE).await?;
        self.notifier
            .success(&format!("Exported {} to {}", R::PLURAL, path.display()));
        Ok(())
    }

    // ========================================================================
    // Resource-specific commands
    // ========================================================================

    async fn offer_pdf(&self, id: RecordId, out: &Path) -> Result<()> {
        let screen = self.screen::<OfferLetters>();
        let view = screen.view();
        view.open_by_id(id)
            .await
            .with_context(|| format!("loading offer letter {}", id))?;

        let action = GeneratePdf {
            request: GeneratePdfRequest::issued_today(),
        };
        let pdf = view
            .run(&action)
            .await
            .context("generating offer letter PDF")?;
        let path = pdf.save(out, &pdf_file_name(id)).await?;
        self.notifier
            .success(&format!("Offer letter saved to {}", path.display()));
        Ok(())
    }

    async fn download(&self, id: RecordId, out: &Path) -> Result<()> {
        let file = match self.client::<Documents>().download(id).await {
            Ok(file) => file,
            Err(err) => {
                notify_failure(
                    self.notifier.as_ref(),
                    &err,
                    &MessageContext::new("download", Documents::LABEL),
                );
                return Err(err).with_context(|| format!("downloading document {}", id));
            }
        };

        let path = file.save(out, &format!("document_{}", id)).await?;
        self.notifier
            .success(&format!("Document saved to {}", path.display()));
        Ok(())
    }

    async fn upload(
        &self,
        file: &Path,
        candidate_id: Option<RecordId>,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<()> {
        let (file_name, bytes) = read_upload(file).await?;
        // a blank name falls back to the file name
        let request = UploadRequest {
            name,
            candidate_id,
            description,
        };

        match self
            .client::<Documents>()
            .upload(request, &file_name, bytes)
            .await
        {
            Ok(document) => {
                self.notifier.success("Document uploaded successfully");
                println!("{}", render::record(&document));
                Ok(())
            }
            Err(err) => {
                notify_failure(
                    self.notifier.as_ref(),
                    &err,
                    &MessageContext::new("upload", Documents::LABEL),
                );
                Err(err).context("uploading document")
            }
        }
    }

    async fn resume(&self, candidate_id: RecordId, file: &Path) -> Result<()> {
        let (file_name, bytes) = read_upload(file).await?;

        match self
            .client::<Candidates>()
            .upload_resume(candidate_id, &file_name, bytes)
            .await
        {
            Ok(candidate) => {
                self.notifier.success("Resume uploaded successfully");
                println!("{}", render::record(&candidate));
                Ok(())
            }
            Err(err) => {
                notify_failure(
                    self.notifier.as_ref(),
                    &err,
                    &MessageContext::new("upload resume for", Candidates::LABEL),
                );
                Err(err).context("uploading resume")
            }
        }
    }

    async fn screen_application(&self, id: RecordId) -> Result<()> {
        let screen = self.screen::<Applications>();
        match screen.client().screen(id).await {
            Ok(result) => {
                self.notifier.success(&format!(
                    "Application {} screened: score {:.1}",
                    id, result.score
                ));
                println!("{}", render::record(&result));
                Ok(())
            }
            Err(err) => {
                notify_failure(
                    self.notifier.as_ref(),
                    &err,
                    &MessageContext::new("screen", Applications::LABEL),
                );
                Err(err).with_context(|| format!("screening application {}", id))
            }
        }
    }

    async fn dashboard(&self) -> Result<()> {
        match ReportService::new(self.api.clone()).dashboard().await {
            Ok(summary) => {
                print!("{}", render::dashboard(&summary));
                Ok(())
            }
            Err(err) => {
                notify_failure(
                    self.notifier.as_ref(),
                    &err,
                    &MessageContext::new("load", "dashboard"),
                );
                Err(err).context("loading dashboard")
            }
        }
    }

    async fn lookups(&self) -> Result<()> {
        match LookupService::new(self.api.clone()).load().await {
            Ok(lookups) => {
                print!("{}", render::lookups(&lookups));
                Ok(())
            }
            Err(err) => {
                notify_failure(
                    self.notifier.as_ref(),
                    &err,
                    &MessageContext::new("load", "lookups"),
                );
                Err(err).context("loading lookups")
            }
        }
    }
}

async fn read_upload(file: &Path) -> Result<(String, Vec<u8>)> {
    let bytes = tokio::fs::read(file)
        .await
        .with_context(|| format!("reading {}", file.display()))?;
    let file_name = file
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .with_context(|| format!("{} has no file name", file.display()))?;
    Ok((file_name, bytes))
}
