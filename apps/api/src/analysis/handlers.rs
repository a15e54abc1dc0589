//! Axum route handlers for the Match API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::keywords::{rank_keywords, KeywordCount};
use crate::analysis::matcher::{run_match, MatchReport};
use crate::errors::AppError;
use crate::extraction::extract_text;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchTextRequest {
    pub resume_text: String,
    pub jd_text: String,
    pub top_n: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct KeywordsRequest {
    pub jd_text: String,
    pub top_n: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<KeywordCount>,
}

/// A file received in a multipart upload.
#[derive(Debug)]
pub struct UploadedDocument {
    pub file_name: String,
    pub bytes: Bytes,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match
///
/// Multipart upload with `resume` and `job_description` files (pdf, docx or txt) and
/// an optional `top_n` field.
pub async fn handle_match_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MatchReport>, AppError> {
    let mut resume: Option<UploadedDocument> = None;
    let mut job_description: Option<UploadedDocument> = None;
    let mut top_n: Option<usize> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" | "job_description" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                let document = Some(UploadedDocument { file_name, bytes });
                if name == "resume" {
                    resume = document;
                } else {
                    job_description = document;
                }
            }
            "top_n" => {
                let raw = field.text().await?;
                let parsed = raw.trim().parse::<usize>().map_err(|_| {
                    AppError::Validation(format!("top_n must be a positive integer, got '{raw}'"))
                })?;
                top_n = Some(parsed);
            }
            other => debug!("Ignoring unexpected multipart field '{other}'"),
        }
    }

    let resume =
        resume.ok_or_else(|| AppError::Validation("missing 'resume' file".to_string()))?;
    let job_description = job_description
        .ok_or_else(|| AppError::Validation("missing 'job_description' file".to_string()))?;
    let top_n = resolve_top_n(top_n, state.config.keyword_top_n)?;

    let resume_text = extract_document(resume).await?;
    let jd_text = extract_document(job_description).await?;

    let report = run_match(
        &state.normalizer,
        state.suggester.as_ref(),
        &resume_text,
        &jd_text,
        top_n,
    )
    .await;

    Ok(Json(report))
}

/// POST /api/v1/match/text
///
/// Same comparison as the upload endpoint, for callers that already have plain text.
pub async fn handle_match_text(
    State(state): State<AppState>,
    Json(request): Json<MatchTextRequest>,
) -> Result<Json<MatchReport>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text cannot be empty".to_string()));
    }
    if request.jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text cannot be empty".to_string()));
    }
    let top_n = resolve_top_n(request.top_n, state.config.keyword_top_n)?;

    let report = run_match(
        &state.normalizer,
        state.suggester.as_ref(),
        &request.resume_text,
        &request.jd_text,
        top_n,
    )
    .await;

    Ok(Json(report))
}

/// POST /api/v1/keywords
///
/// Previews the ranked JD keywords with their frequencies. No suggestion call.
pub async fn handle_keywords(
    State(state): State<AppState>,
    Json(request): Json<KeywordsRequest>,
) -> Result<Json<KeywordsResponse>, AppError> {
    if request.jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text cannot be empty".to_string()));
    }
    let top_n = resolve_top_n(request.top_n, state.config.keyword_top_n)?;

    let normalized = state.normalizer.normalize(&request.jd_text);
    let keywords = rank_keywords(&normalized, top_n);

    Ok(Json(KeywordsResponse { keywords }))
}

fn resolve_top_n(requested: Option<usize>, default: usize) -> Result<usize, AppError> {
    match requested.unwrap_or(default) {
        0 => Err(AppError::Validation(
            "top_n must be a positive integer".to_string(),
        )),
        n => Ok(n),
    }
}

/// PDF parsing is CPU-bound, so extraction runs on the blocking pool.
async fn extract_document(document: UploadedDocument) -> Result<String, AppError> {
    let text = tokio::task::spawn_blocking(move || {
        extract_text(&document.file_name, &document.bytes)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task failed: {e}")))??;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_top_n_uses_default() {
        assert_eq!(resolve_top_n(None, 20).unwrap(), 20);
        assert_eq!(resolve_top_n(Some(5), 20).unwrap(), 5);
    }

    #[test]
    fn test_resolve_top_n_rejects_zero() {
        assert!(matches!(
            resolve_top_n(Some(0), 20),
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_extract_document_unknown_type_is_empty() {
        let text = extract_document(UploadedDocument {
            file_name: "resume.pages".to_string(),
            bytes: Bytes::from_static(b"binary"),
        })
        .await
        .unwrap();
        assert!(text.is_empty());
    }

    #[tokio::test]
    async fn test_extract_document_bad_pdf_is_unprocessable() {
        let err = extract_document(UploadedDocument {
            file_name: "resume.pdf".to_string(),
            bytes: Bytes::from_static(b"not a pdf at all"),
        })
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }
}
