//! LLM extraction backend — hands the whole text-to-profile transformation
//! to the hosted model with a structured-output prompt.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::PipelineError;
use crate::llm_client::LlmClient;
use crate::models::draft::{PartialProfile, PRESENT_SENTINEL};
use crate::parser::prompts::{
    BIO_FALLBACK_PROMPT, BIO_FALLBACK_SYSTEM, RESUME_PARSE_PROMPT, RESUME_PARSE_SYSTEM,
};
use crate::parser::ResumeParser;

pub struct LlmParser {
    client: LlmClient,
}

impl LlmParser {
    pub fn new(client: LlmClient) -> Self {
        Self { client }
    }

    /// Second-chance bio generation when the parse response came back
    /// without one. Best-effort: a failure here never fails the parse.
    async fn fill_bio(&self, partial: &mut PartialProfile) {
        let prompt = BIO_FALLBACK_PROMPT
            .replace("{name}", partial.name.as_deref().unwrap_or("Unknown"))
            .replace("{title}", partial.title.as_deref().unwrap_or("Professional"))
            .replace(
                "{position}",
                &partial
                    .experience
                    .first()
                    .map(|e| format!("{} at {}", e.role, e.company))
                    .unwrap_or_default(),
            )
            .replace("{skills}", &partial.skills.join(", "));

        match self.client.call(&prompt, BIO_FALLBACK_SYSTEM).await {
            Ok(response) => {
                partial.bio = response
                    .text()
                    .map(|t| t.trim().to_string())
                    .filter(|t| !t.is_empty());
            }
            Err(e) => warn!("bio fallback generation failed: {e}"),
        }
    }
}

#[async_trait]
impl ResumeParser for LlmParser {
    async fn parse(&self, text: &str) -> Result<PartialProfile, PipelineError> {
        let prompt = RESUME_PARSE_PROMPT.replace("{resume_text}", text);
        let mut partial: PartialProfile = self
            .client
            .call_json(&prompt, RESUME_PARSE_SYSTEM)
            .await?;

        reconcile_current_flags(&mut partial);

        if partial.bio.as_deref().map_or(true, |b| b.trim().is_empty()) {
            debug!("parse response had no bio, generating one");
            self.fill_bio(&mut partial).await;
        }

        Ok(partial)
    }
}

/// The model is instructed to keep `current` and the `"Present"` sentinel in
/// sync, but the invariant is enforced here rather than trusted.
fn reconcile_current_flags(partial: &mut PartialProfile) {
    for exp in &mut partial.experience {
        if exp.current {
            exp.end_date = PRESENT_SENTINEL.to_string();
        } else if exp.end_date.eq_ignore_ascii_case(PRESENT_SENTINEL) {
            exp.current = true;
            exp.end_date = PRESENT_SENTINEL.to_string();
        }
    }
}
