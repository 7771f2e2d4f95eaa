//! Pipeline façade: document in, sparse profile out.
//!
//! Extraction is CPU-bound and runs under `spawn_blocking`; parsing is
//! whatever backend the caller chose. Every failure is caught here and
//! surfaced as a recoverable [`PipelineError`] — the caller's profile state
//! is never touched on the error path.

use anyhow::anyhow;
use tracing::{debug, info};

use crate::document::{extract_text, RawDocument};
use crate::error::PipelineError;
use crate::models::draft::PartialProfile;
use crate::parser::ResumeParser;

/// Runs the full extraction pipeline over one uploaded document. The
/// document is consumed; a re-upload starts a fresh call.
pub async fn parse_resume(
    doc: RawDocument,
    parser: &dyn ResumeParser,
) -> Result<PartialProfile, PipelineError> {
    info!(
        "parsing resume: {} ({} bytes)",
        doc.media_type().as_mime(),
        doc.len()
    );

    let text = tokio::task::spawn_blocking(move || extract_text(&doc))
        .await
        .map_err(|e| PipelineError::Internal(anyhow!("extraction task failed: {e}")))??;

    debug!("extracted {} characters of text", text.len());

    let partial = parser.parse(&text).await?;

    info!(
        "parsed profile: {} experience, {} education, {} projects, {} skills",
        partial.experience.len(),
        partial.education.len(),
        partial.projects.len(),
        partial.skills.len()
    );

    Ok(partial)
}
