//! Crate-level error type. Two failure domains per the pipeline contract:
//! parsing failures collapse to a single "could not parse resume"
//! condition, while external-service failures stay distinguishable so the
//! caller can tell an outage from a bad response. Nothing here is fatal —
//! every variant is caught at the pipeline boundary and surfaced as a
//! recoverable condition.

use thiserror::Error;

use crate::document::ExtractError;
use crate::llm_client::LlmError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("language model request failed: {0}")]
    Llm(#[from] LlmError),

    #[error("malformed template response: {0}")]
    Template(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl PipelineError {
    /// Stable machine-readable code for the failure domain.
    pub fn code(&self) -> &'static str {
        match self {
            PipelineError::Extract(_) => "PARSE_ERROR",
            PipelineError::Llm(_) => "LLM_ERROR",
            PipelineError::Template(_) => "TEMPLATE_ERROR",
            PipelineError::Database(_) => "DATABASE_ERROR",
            PipelineError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// The message shown to the end user. Detail stays in logs; the user
    /// sees which of the recoverable conditions they hit and can retry.
    pub fn user_message(&self) -> &'static str {
        match self {
            PipelineError::Extract(_) => "Could not parse resume. Please try a different file.",
            PipelineError::Llm(e) if e.is_service_unavailable() => {
                "AI service unavailable. Please try again in a moment."
            }
            PipelineError::Llm(_) => "Could not understand the AI response. Please try again.",
            PipelineError::Template(_) => "Failed to generate the email template.",
            PipelineError::Database(_) => "Could not save your profile. Please try again.",
            PipelineError::Internal(_) => "Something went wrong. Please try again.",
        }
    }
}
