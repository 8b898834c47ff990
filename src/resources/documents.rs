// src/resources/documents.rs

use chrono::{DateTime, Utc};
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use super::client::ResourceClient;
use super::{Record, Resource};
use crate::auth::{ADMIN, HR, RECRUITER};
use crate::common::{ClientResult, RecordId};
use crate::http::{Download, NO_QUERY};
use crate::listing::FilterState;

// ============================================================================
// Document Models
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub candidate_id: Option<RecordId>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub uploaded_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDraft {
    pub name: String,
    pub candidate_id: Option<RecordId>,
    pub description: Option<String>,
}

impl Record for Document {
    fn id(&self) -> RecordId {
        self.id
    }
}

pub struct Documents;

impl Resource for Documents {
    type Item = Document;
    type Draft = DocumentDraft;

    const PATH: &'static str = "/api/documents";
    const LABEL: &'static str = "document";
    const PLURAL: &'static str = "documents";
    const REQUIRED: &'static [&'static str] = &["name"];
    const COLUMNS: &'static [&'static str] = &["id", "name", "fileName", "candidateId", "size"];
    const MANAGERS: &'static [&'static str] = &[ADMIN, HR, RECRUITER];

    fn draft_from(item: &Document) -> DocumentDraft {
        DocumentDraft {
            name: item.name.clone(),
            candidate_id: item.candidate_id,
            description: item.description.clone(),
        }
    }

    fn default_filters() -> FilterState {
        FilterState::new().with("search", "").with("candidateId", "")
    }
}

// ============================================================================
// Upload helpers
// ============================================================================

/// Builds a multipart file part, sniffing the MIME type from the bytes and
/// falling back to the file extension.
pub fn file_part(file_name: &str, bytes: Vec<u8>) -> ClientResult<Part> {
    let mime = infer::get(&bytes)
        .map(|kind| kind.mime_type())
        .unwrap_or_else(|| mime_from_extension(file_name));

    let part = Part::bytes(bytes)
        .file_name(file_name.to_string())
        .mime_str(mime)?;
    Ok(part)
}

fn mime_from_extension(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("csv") => "text/csv",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Metadata sent alongside an uploaded file.
#[derive(Debug, Clone, Default)]
pub struct UploadRequest {
    pub name: Option<String>,
    pub candidate_id: Option<RecordId>,
    pub description: Option<String>,
}

impl ResourceClient<Documents> {
    /// POST /api/documents/upload (multipart)
    pub async fn upload(
        &self,
        request: UploadRequest,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> ClientResult<Document> {
        let size = bytes.len();
        let name = request
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| file_name.to_string());

        let mut form = Form::new()
            .part("file", file_part(file_name, bytes)?)
            .text("name", name);
        if let Some(candidate_id) = request.candidate_id {
            form = form.text("candidateId", candidate_id.to_string());
        }
        if let Some(description) = request.description {
            form = form.text("description", description);
        }

        let path = format!("{}/upload", Documents::PATH);
        let document: Document = self.api().post_multipart(&path, form).await?;

        info!(
            document_id = document.id,
            file_name = %file_name,
            bytes = size,
            "Document uploaded"
        );
        Ok(document)
    }

    /// GET /api/documents/{id}/download
    pub async fn download(&self, id: RecordId) -> ClientResult<Download> {
        let path = format!("{}/download", Self::item_path(id));
        self.api().get_bytes(&path, NO_QUERY).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_from_extension() {
        assert_eq!(mime_from_extension("resume.PDF"), "application/pdf");
        assert_eq!(mime_from_extension("notes.txt"), "text/plain");
        assert_eq!(mime_from_extension("archive"), "application/octet-stream");
    }

    #[test]
    fn test_file_part_sniffs_pdf_bytes() {
        // A PDF with a misleading extension still gets a part built
        let part = file_part("resume.bin", b"%PDF-1.7\n%binary".to_vec());
        assert!(part.is_ok());
        assert_eq!(infer::get(b"%PDF-1.7\n").map(|k| k.mime_type()), Some("application/pdf"));
    }
}
