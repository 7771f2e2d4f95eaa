//! Field extraction: resume text in, [`PartialProfile`] out.
//!
//! Two backends implement [`ResumeParser`]: the pure-Rust
//! [`HeuristicParser`] (fast, deterministic, fully testable offline) and
//! [`llm::LlmParser`] (delegates the same transformation to the hosted
//! model). Callers hold a `dyn ResumeParser` and swap backends without
//! touching pipeline code.

pub mod contact;
pub mod dates;
pub mod education;
pub mod experience;
pub mod llm;
pub mod projects;
pub mod prompts;
pub mod sections;
pub mod skills;

use async_trait::async_trait;

use crate::error::PipelineError;
use crate::models::draft::PartialProfile;
use crate::parser::sections::{split_sections, Section};

/// An extraction backend. Both implementations return every profile field:
/// scalars possibly `None`, lists possibly empty, never an error for
/// malformed text.
#[async_trait]
pub trait ResumeParser: Send + Sync {
    async fn parse(&self, text: &str) -> Result<PartialProfile, PipelineError>;
}

/// Regex/keyword extraction. Best-effort by contract: every heuristic
/// degrades to an empty value, so this backend cannot fail.
pub struct HeuristicParser;

#[async_trait]
impl ResumeParser for HeuristicParser {
    async fn parse(&self, text: &str) -> Result<PartialProfile, PipelineError> {
        Ok(extract_profile(text))
    }
}

/// Runs every field heuristic over `text`. Pure and deterministic.
pub fn extract_profile(text: &str) -> PartialProfile {
    let sections = split_sections(text);

    // With no SKILLS header the whole document is the matching scope.
    let skills_scope = if sections.contains(Section::Skills) {
        sections.get(Section::Skills)
    } else {
        text
    };
    let skills = skills::extract_skills(skills_scope);

    let experience = experience::parse_experience(sections.get(Section::Experience));
    let education = education::parse_education(sections.get(Section::Education));
    let projects = projects::parse_projects(sections.get(Section::Projects));

    let title = experience
        .first()
        .map(|e| e.role.clone())
        .filter(|r| !r.is_empty());
    let bio = compose_summary(title.as_deref(), &skills);

    PartialProfile {
        name: contact::extract_name(text),
        title,
        bio,
        email: contact::extract_email(text),
        phone: contact::extract_phone(text),
        location: None,
        desired_role: None,
        skills,
        experience,
        education,
        projects,
        achievements: Vec::new(),
    }
}

/// Deterministic template fill — the non-generative stand-in for a
/// model-written summary.
fn compose_summary(role: Option<&str>, skills: &[String]) -> Option<String> {
    let top: Vec<&str> = skills.iter().take(3).map(String::as_str).collect();
    match (role, top.is_empty()) {
        (None, true) => None,
        (Some(role), true) => Some(format!("{role} with a track record of shipping software.")),
        (None, false) => Some(format!(
            "Developer with hands-on experience in {}.",
            join_natural(&top)
        )),
        (Some(role), false) => Some(format!(
            "{role} with hands-on experience in {}.",
            join_natural(&top)
        )),
    }
}

fn join_natural(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO_A: &str = "John Smith\n\
john@x.com\n\
555-123-4567\n\
EXPERIENCE\n\
Software Engineer at Acme Corp\n\
Jan 2020 - Present\n\
• Built APIs\n\
EDUCATION\n\
B.Tech Computer Science\n\
XYZ University\n\
2016 - 2020";

    #[test]
    fn test_scenario_a_full_extraction() {
        let partial = extract_profile(SCENARIO_A);

        assert_eq!(partial.name.as_deref(), Some("John Smith"));
        assert_eq!(partial.email.as_deref(), Some("john@x.com"));
        assert_eq!(partial.phone.as_deref(), Some("555-123-4567"));

        assert_eq!(partial.experience.len(), 1);
        let exp = &partial.experience[0];
        assert!(exp.company.contains("Acme Corp"));
        assert!(exp.current);
        assert_eq!(exp.end_date, "Present");
        assert_eq!(exp.start_date, "2020-01");

        assert_eq!(partial.education.len(), 1);
        let edu = &partial.education[0];
        assert_eq!(edu.degree, "B.Tech");
        assert_eq!(edu.field, "Computer Science");
        assert_eq!(edu.start_date, "2016");
        assert_eq!(edu.end_date, "2020");
    }

    #[test]
    fn test_scenario_b_unstructured_text_degrades_to_empty() {
        let partial = extract_profile("a meandering paragraph about nothing in particular\nmore prose");
        assert!(partial.experience.is_empty());
        assert!(partial.education.is_empty());
        assert!(partial.projects.is_empty());
        assert!(partial.email.is_none());
        assert!(partial.phone.is_none());
        assert!(partial.achievements.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let partial = extract_profile("");
        assert_eq!(partial, PartialProfile::default());
    }

    #[test]
    fn test_title_comes_from_most_recent_role() {
        let partial = extract_profile(SCENARIO_A);
        assert_eq!(partial.title.as_deref(), Some("Software Engineer"));
    }

    #[test]
    fn test_summary_is_deterministic_template() {
        let partial = extract_profile(SCENARIO_A);
        let again = extract_profile(SCENARIO_A);
        assert_eq!(partial.bio, again.bio);
        let bio = partial.bio.unwrap();
        assert!(bio.contains("Software Engineer"));
    }

    #[test]
    fn test_skills_scope_prefers_skills_section() {
        let text = "SKILLS\nRust, Docker\nEXPERIENCE\nAcme\nEngineer\n2020 - 2021\n• Wrote Python\n";
        let partial = extract_profile(text);
        assert_eq!(partial.skills, vec!["Rust", "Docker"]);
        // The experience entry still sees its own technologies.
        assert_eq!(partial.experience[0].technologies, vec!["Python"]);
    }

    #[test]
    fn test_compose_summary_variants() {
        assert_eq!(compose_summary(None, &[]), None);
        let skills = vec!["Rust".to_string(), "Go".to_string()];
        assert_eq!(
            compose_summary(Some("Engineer"), &skills).unwrap(),
            "Engineer with hands-on experience in Rust and Go."
        );
        assert_eq!(
            compose_summary(None, &skills).unwrap(),
            "Developer with hands-on experience in Rust and Go."
        );
    }

    #[test]
    fn test_join_natural() {
        assert_eq!(join_natural(&["Rust"]), "Rust");
        assert_eq!(join_natural(&["A", "B", "C"]), "A, B and C");
    }

    #[tokio::test]
    async fn test_heuristic_parser_never_fails() {
        let parser = HeuristicParser;
        assert!(parser.parse("").await.is_ok());
        assert!(parser.parse("\u{0}\u{1} garbage \n\n\n").await.is_ok());
    }
}
