//! Uploaded-document handling: extension validation, scoped temporary
//! storage, and text extraction.
//!
//! A `StoredUpload` owns its on-disk file and removes it on drop, so no
//! exit path — success, parse failure, or handler error — leaks a file.

pub mod handlers;

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;

/// The only accepted upload extensions, compared case-insensitively.
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "txt"];

/// Lowercased extension of `filename`, without the dot.
pub fn file_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

pub fn is_valid_file_type(filename: &str) -> bool {
    file_extension(filename)
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// An uploaded document persisted under a generated unique name for the
/// duration of one request. Deleted unconditionally on drop.
#[derive(Debug)]
pub struct StoredUpload {
    path: PathBuf,
    extension: String,
}

impl StoredUpload {
    /// Validates the extension and writes `content` to
    /// `<upload_dir>/<uuid>.<ext>`.
    pub async fn save(
        upload_dir: &Path,
        filename: &str,
        content: &[u8],
    ) -> Result<Self, AppError> {
        let extension = file_extension(filename)
            .filter(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
            .ok_or_else(|| {
                AppError::InvalidFileType(
                    "Invalid file type. Only PDF, DOC, DOCX, and TXT files are allowed."
                        .to_string(),
                )
            })?;

        tokio::fs::create_dir_all(upload_dir)
            .await
            .with_context(|| format!("creating upload dir {}", upload_dir.display()))?;

        let path = upload_dir.join(format!("{}.{extension}", Uuid::new_v4()));
        tokio::fs::write(&path, content)
            .await
            .with_context(|| format!("writing upload {}", path.display()))?;

        Ok(Self { path, extension })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Extracts plain text from the stored document. Extraction failures
    /// are logged and surface as an empty string — callers must tolerate
    /// empty resume text.
    pub async fn extract_text(&self) -> String {
        let result = match self.extension.as_str() {
            "pdf" => extract_pdf(&self.path).await,
            "doc" | "docx" => extract_docx(&self.path).await,
            "txt" => tokio::fs::read_to_string(&self.path)
                .await
                .map(|s| s.trim().to_string())
                .map_err(anyhow::Error::from),
            other => Err(anyhow::anyhow!("unsupported extension {other}")),
        };

        match result {
            Ok(text) => text,
            Err(e) => {
                warn!("text extraction failed for {}: {e}", self.path.display());
                String::new()
            }
        }
    }
}

impl Drop for StoredUpload {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            warn!("failed to remove upload {}: {e}", self.path.display());
        }
    }
}

/// Page-by-page PDF text. CPU-bound parsing runs inside `spawn_blocking`.
async fn extract_pdf(path: &Path) -> anyhow::Result<String> {
    let bytes = tokio::fs::read(path).await?;
    let text = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem(&bytes).map(|t| t.trim().to_string())
    })
    .await??;
    Ok(text)
}

/// Paragraph-by-paragraph DOCX text with newline separators. Legacy
/// binary `.doc` files fail the OOXML parse and surface as empty text.
async fn extract_docx(path: &Path) -> anyhow::Result<String> {
    let bytes = tokio::fs::read(path).await?;
    let text = tokio::task::spawn_blocking(move || docx_paragraphs(&bytes)).await??;
    Ok(text)
}

fn docx_paragraphs(bytes: &[u8]) -> anyhow::Result<String> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| anyhow::anyhow!("docx parse: {e:?}"))?;

    let mut text = String::new();
    for child in docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
            for child in paragraph.children {
                if let docx_rs::ParagraphChild::Run(run) = child {
                    for run_child in run.children {
                        if let docx_rs::RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }
    }

    Ok(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_list_exact() {
        assert!(is_valid_file_type("resume.pdf"));
        assert!(is_valid_file_type("resume.doc"));
        assert!(is_valid_file_type("resume.docx"));
        assert!(is_valid_file_type("resume.txt"));
    }

    #[test]
    fn test_extension_check_case_insensitive() {
        assert!(is_valid_file_type("RESUME.PDF"));
        assert!(is_valid_file_type("resume.Txt"));
    }

    #[test]
    fn test_disallowed_extensions_rejected() {
        assert!(!is_valid_file_type("malware.exe"));
        assert!(!is_valid_file_type("resume.rtf"));
        assert!(!is_valid_file_type("no_extension"));
        assert!(!is_valid_file_type(""));
    }

    #[tokio::test]
    async fn test_save_rejects_bad_extension_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let result = StoredUpload::save(dir.path(), "payload.exe", b"MZ").await;
        assert!(matches!(result, Err(AppError::InvalidFileType(_))));
        // Nothing was written.
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_stored_upload_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let stored = StoredUpload::save(dir.path(), "resume.txt", b"hello")
            .await
            .unwrap();
        let path = stored.path().to_path_buf();
        assert!(path.exists());
        drop(stored);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_txt_extraction_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let stored = StoredUpload::save(dir.path(), "resume.txt", b"  Python developer  ")
            .await
            .unwrap();
        assert_eq!(stored.extract_text().await, "Python developer");
    }

    #[tokio::test]
    async fn test_invalid_utf8_txt_yields_empty_text() {
        let dir = tempfile::tempdir().unwrap();
        let stored = StoredUpload::save(dir.path(), "resume.txt", &[0xff, 0xfe, 0x80])
            .await
            .unwrap();
        assert_eq!(stored.extract_text().await, "");
    }

    #[tokio::test]
    async fn test_corrupt_docx_yields_empty_text() {
        let dir = tempfile::tempdir().unwrap();
        let stored = StoredUpload::save(dir.path(), "resume.docx", b"not a zip archive")
            .await
            .unwrap();
        assert_eq!(stored.extract_text().await, "");
    }

    #[tokio::test]
    async fn test_corrupt_pdf_yields_empty_text() {
        let dir = tempfile::tempdir().unwrap();
        let stored = StoredUpload::save(dir.path(), "resume.pdf", b"%PDF-bogus")
            .await
            .unwrap();
        assert_eq!(stored.extract_text().await, "");
    }
}
