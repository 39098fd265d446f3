//! Axum route handler for the resume upload + analysis pipeline.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::analysis::{analyze_resume, ResumeAnalysis};
use crate::errors::AppError;
use crate::matching::{generate_recommendations, match_job, JobMatchResult};
use crate::state::AppState;
use crate::upload::StoredUpload;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub resume_analysis: ResumeAnalysis,
    pub job_matching: JobMatchResult,
    pub recommendations: Vec<String>,
    #[serde(rename = "originalResume")]
    pub original_resume: String,
}

/// POST /api/upload
///
/// Multipart form: `resume` (file), `job_title`, `company`,
/// `job_description`. The stored file is released immediately after text
/// extraction, before any completion call.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut resume: Option<(String, Bytes)> = None;
    let mut job_title: Option<String> = None;
    let mut company: Option<String> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let filename = field
                    .file_name()
                    .ok_or_else(|| {
                        AppError::Validation("resume field must be a file upload".to_string())
                    })?
                    .to_string();
                resume = Some((filename, field.bytes().await?));
            }
            "job_title" => job_title = Some(field.text().await?),
            "company" => company = Some(field.text().await?),
            "job_description" => job_description = Some(field.text().await?),
            _ => {}
        }
    }

    let (filename, content) =
        resume.ok_or_else(|| AppError::Validation("missing resume file".to_string()))?;
    let job_title =
        job_title.ok_or_else(|| AppError::Validation("missing job_title field".to_string()))?;
    let company =
        company.ok_or_else(|| AppError::Validation("missing company field".to_string()))?;
    let job_description = job_description
        .ok_or_else(|| AppError::Validation("missing job_description field".to_string()))?;

    // Extension validation happens inside save, before any bytes land on disk.
    let stored = StoredUpload::save(&state.config.upload_dir, &filename, &content).await?;
    let resume_text = stored.extract_text().await;
    drop(stored); // release the temporary file before the completion calls

    info!(
        "processing upload '{filename}' ({} chars) for '{job_title}' at '{company}'",
        resume_text.len()
    );

    let llm = state.llm.as_ref();
    let resume_analysis = analyze_resume(llm, &resume_text).await;
    let job_matching = match_job(llm, &resume_text, &job_description).await;
    let recommendations = generate_recommendations(llm, &resume_text, &job_description).await;

    Ok(Json(UploadResponse {
        resume_analysis,
        job_matching,
        recommendations,
        original_resume: resume_text,
    }))
}
