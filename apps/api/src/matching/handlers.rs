//! Axum route handler for the upload endpoint.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;

use crate::errors::AppError;
use crate::extraction::{extract_text, UploadedDocument};
use crate::matching::report::MatchReport;
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";
const JOB_DESCRIPTION_FIELD: &str = "job_description";

/// POST /upload
///
/// Multipart form: `resume` (file) and `job_description` (text).
/// Unsupported file formats score 0.0 rather than failing.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MatchReport>, AppError> {
    let mut resume: Option<UploadedDocument> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(RESUME_FIELD) => {
                let filename = field.file_name().map(str::to_owned);
                let bytes: Bytes = field.bytes().await.map_err(multipart_error)?;
                if bytes.len() > state.config.max_upload_bytes {
                    tracing::warn!(
                        size = bytes.len(),
                        limit = state.config.max_upload_bytes,
                        "resume exceeds upload limit"
                    );
                    return Err(AppError::PayloadTooLarge);
                }
                resume = Some(UploadedDocument::from_upload(filename.as_deref(), bytes));
            }
            Some(JOB_DESCRIPTION_FIELD) => {
                job_description = Some(field.text().await.map_err(multipart_error)?);
            }
            other => tracing::debug!(field = ?other, "ignoring unexpected form field"),
        }
    }

    let resume = resume.ok_or(AppError::MissingField(RESUME_FIELD))?;
    let job_description = job_description.ok_or(AppError::MissingField(JOB_DESCRIPTION_FIELD))?;

    tracing::info!(
        format = resume.format(),
        size = resume.len(),
        job_chars = job_description.len(),
        "matching uploaded resume"
    );

    let matcher = state.matcher.clone();
    let report = tokio::task::spawn_blocking(move || {
        let resume_text = extract_text(&resume)?;
        tracing::debug!(resume_chars = resume_text.len(), "resume text extracted");
        Ok::<_, AppError>(matcher.report(&resume_text, &job_description))
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("matching task failed: {e}")))??;

    tracing::info!(
        score = report.score,
        matched = report.matched_skills.len(),
        "match complete"
    );

    Ok(Json(report))
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        AppError::Validation(format!("Malformed multipart body: {}", e.body_text()))
    }
}
