//! Outreach email generation: turns the canonical profile into
//! personalized email templates via the LLM.

pub mod prompts;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::PipelineError;
use crate::llm_client::LlmClient;
use crate::models::profile::CanonicalProfile;
use crate::outreach::prompts::{EMAIL_TEMPLATE_PROMPT, EMAIL_TEMPLATE_SYSTEM};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateType {
    ColdEmail,
    FollowUp,
    ThankYou,
    ConnectionRequest,
    InterviewRequest,
    SalaryNegotiation,
}

impl TemplateType {
    /// Human-readable kind used inside the prompt.
    fn kind(self) -> &'static str {
        match self {
            TemplateType::ColdEmail => "cold outreach",
            TemplateType::FollowUp => "follow-up",
            TemplateType::ThankYou => "thank-you",
            TemplateType::ConnectionRequest => "connection request",
            TemplateType::InterviewRequest => "interview request",
            TemplateType::SalaryNegotiation => "salary negotiation",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailTemplate {
    pub id: Uuid,
    pub subject: String,
    pub body: String,
    pub template_type: TemplateType,
    pub role: String,
    pub company: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TemplateBody {
    #[serde(default)]
    subject: String,
    #[serde(default)]
    body: String,
}

/// Generates one email template for the given target role (and optionally a
/// specific company). Subject and body are both required in the model's
/// response; anything less is a malformed-template error.
pub async fn generate_template(
    client: &LlmClient,
    profile: &CanonicalProfile,
    template_type: TemplateType,
    target_role: &str,
    company: Option<&str>,
) -> Result<EmailTemplate, PipelineError> {
    let prompt = build_prompt(profile, template_type, target_role, company);
    let parsed: TemplateBody = client
        .call_json(&prompt, EMAIL_TEMPLATE_SYSTEM)
        .await?;

    if parsed.subject.trim().is_empty() || parsed.body.trim().is_empty() {
        return Err(PipelineError::Template(
            "response is missing subject or body".to_string(),
        ));
    }

    info!("Generated {} template for role '{target_role}'", template_type.kind());

    Ok(EmailTemplate {
        id: Uuid::new_v4(),
        subject: parsed.subject.trim().to_string(),
        body: parsed.body.trim().to_string(),
        template_type,
        role: target_role.to_string(),
        company: company.map(str::to_string),
    })
}

fn build_prompt(
    profile: &CanonicalProfile,
    template_type: TemplateType,
    target_role: &str,
    company: Option<&str>,
) -> String {
    let highlights = profile
        .experience
        .iter()
        .take(2)
        .map(|exp| {
            let mut summary: String = exp.description.chars().take(100).collect();
            if exp.description.chars().count() > 100 {
                summary.push_str("...");
            }
            format!("- {} at {}: {}", exp.role, exp.company, summary)
        })
        .collect::<Vec<_>>()
        .join("\n");

    let company_line = company
        .map(|c| format!("- Target company: {c}\n"))
        .unwrap_or_default();

    EMAIL_TEMPLATE_PROMPT
        .replace("{template_kind}", template_type.kind())
        .replace("{name}", &profile.basic_info.name)
        .replace("{title}", &profile.basic_info.title)
        .replace("{target_role}", target_role)
        .replace("{skills}", &profile.skills.join(", "))
        .replace("{company_line}", &company_line)
        .replace("{highlights}", &highlights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::merge_partial;
    use crate::models::draft::{ExperienceDraft, PartialProfile};

    fn sample_profile() -> CanonicalProfile {
        let mut profile = CanonicalProfile::default();
        merge_partial(
            &mut profile,
            PartialProfile {
                name: Some("Jane Doe".to_string()),
                title: Some("Backend Engineer".to_string()),
                skills: vec!["Rust".to_string(), "PostgreSQL".to_string()],
                experience: vec![ExperienceDraft {
                    company: "Acme".to_string(),
                    role: "Engineer".to_string(),
                    description: "Built the billing pipeline".to_string(),
                    ..Default::default()
                }],
                ..Default::default()
            },
        );
        profile
    }

    #[test]
    fn test_template_type_serde_kebab_case() {
        assert_eq!(
            serde_json::to_string(&TemplateType::ColdEmail).unwrap(),
            r#""cold-email""#
        );
        let t: TemplateType = serde_json::from_str(r#""salary-negotiation""#).unwrap();
        assert_eq!(t, TemplateType::SalaryNegotiation);
    }

    #[test]
    fn test_prompt_carries_profile_details() {
        let prompt = build_prompt(
            &sample_profile(),
            TemplateType::ColdEmail,
            "Staff Engineer",
            Some("Globex"),
        );
        assert!(prompt.contains("Jane Doe"));
        assert!(prompt.contains("Staff Engineer"));
        assert!(prompt.contains("Rust, PostgreSQL"));
        assert!(prompt.contains("Target company: Globex"));
        assert!(prompt.contains("Engineer at Acme"));
    }

    #[test]
    fn test_prompt_without_company() {
        let prompt = build_prompt(&sample_profile(), TemplateType::FollowUp, "Engineer", None);
        assert!(!prompt.contains("Target company"));
        assert!(prompt.contains("follow-up"));
    }

    #[test]
    fn test_long_descriptions_are_truncated_in_highlights() {
        let mut profile = sample_profile();
        profile.experience[0].description = "x".repeat(500);
        let prompt = build_prompt(&profile, TemplateType::ColdEmail, "Engineer", None);
        assert!(prompt.contains(&format!("{}...", "x".repeat(100))));
        assert!(!prompt.contains(&"x".repeat(200)));
    }

    #[test]
    fn test_template_body_defaults_missing_fields() {
        let body: TemplateBody = serde_json::from_str(r#"{"subject": "Hi"}"#).unwrap();
        assert_eq!(body.subject, "Hi");
        assert!(body.body.is_empty());
    }
}
