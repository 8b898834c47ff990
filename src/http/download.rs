// src/http/download.rs
//! Binary responses: documents, generated PDFs and CSV exports

use bytes::Bytes;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::common::ClientResult;

#[derive(Debug, Clone)]
pub struct Download {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl Download {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Server-suggested file name, or `fallback` when none was sent.
    /// Directory components are stripped from the suggestion.
    pub fn file_name_or(&self, fallback: &str) -> String {
        self.file_name
            .as_deref()
            .and_then(|name| Path::new(name).file_name())
            .and_then(|name| name.to_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(fallback)
            .to_string()
    }

    /// Writes the bytes to `target`. When `target` is an existing directory
    /// the file is placed inside it under the suggested name.
    pub async fn save(&self, target: &Path, fallback_name: &str) -> ClientResult<PathBuf> {
        let path = if tokio::fs::metadata(target)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false)
        {
            target.join(self.file_name_or(fallback_name))
        } else {
            target.to_path_buf()
        };

        tokio::fs::write(&path, &self.bytes).await?;

        info!(
            path = %path.display(),
            bytes = self.bytes.len(),
            "Download saved"
        );

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn download(name: Option<&str>) -> Download {
        Download {
            file_name: name.map(str::to_string),
            content_type: Some("text/csv".to_string()),
            bytes: Bytes::from_static(b"id,title\n1,Engineer\n"),
        }
    }

    #[test]
    fn test_file_name_or_strips_directories() {
        assert_eq!(download(Some("../../etc/passwd")).file_name_or("x"), "passwd");
        assert_eq!(download(None).file_name_or("jobs.csv"), "jobs.csv");
    }

    #[tokio::test]
    async fn test_save_into_directory_uses_suggested_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        let saved = download(Some("jobs_export.csv"))
            .save(dir.path(), "fallback.csv")
            .await
            .expect("save");

        assert_eq!(saved, dir.path().join("jobs_export.csv"));
        let written = tokio::fs::read(&saved).await.expect("read back");
        assert_eq!(written, b"id,title\n1,Engineer\n");
    }

    #[tokio::test]
    async fn test_save_to_explicit_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join("mine.csv");
        let saved = download(Some("jobs_export.csv"))
            .save(&target, "fallback.csv")
            .await
            .expect("save");
        assert_eq!(saved, target);
    }
}
