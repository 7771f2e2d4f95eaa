//! Skill/technology extraction against a fixed vocabulary.
//!
//! Matching is word-boundary-safe so substrings of unrelated words never
//! match ("Go" must not fire inside "Google" or "Golang"), and every
//! vocabulary entry is regex-escaped so entries like "C++" and "Node.js"
//! match literally.

use once_cell::sync::Lazy;
use regex::Regex;

/// The enumerated vocabulary of known technology and skill names.
pub const TECH_VOCABULARY: &[&str] = &[
    // Languages
    "JavaScript",
    "TypeScript",
    "Python",
    "Java",
    "C++",
    "C#",
    "Go",
    "Rust",
    "Ruby",
    "PHP",
    "Kotlin",
    "Swift",
    "Scala",
    // Frameworks & runtimes
    "React",
    "Angular",
    "Vue",
    "Next.js",
    "Node.js",
    "Express",
    "Django",
    "Flask",
    "FastAPI",
    "Spring Boot",
    "Rails",
    ".NET",
    "Tailwind",
    // Databases & messaging
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "SQLite",
    "Redis",
    "Elasticsearch",
    "Kafka",
    "RabbitMQ",
    // Cloud & infrastructure
    "AWS",
    "Azure",
    "GCP",
    "Docker",
    "Kubernetes",
    "Terraform",
    "Linux",
    // Tooling & practices
    "Git",
    "CI/CD",
    "REST API",
    "GraphQL",
    "gRPC",
    "HTML",
    "CSS",
    "Sass",
    "Agile",
];

static SKILL_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    TECH_VOCABULARY
        .iter()
        .map(|term| (*term, bounded_pattern(term)))
        .collect()
});

/// Builds a case-insensitive pattern for one vocabulary entry. A `\b`
/// anchor is only valid next to a word character, so entries that start or
/// end with punctuation ("C++", ".NET") get an anchor on the word side only.
fn bounded_pattern(term: &str) -> Regex {
    let escaped = regex::escape(term);
    let prefix = if term.starts_with(|c: char| c.is_alphanumeric() || c == '_') {
        r"\b"
    } else {
        ""
    };
    let suffix = if term.ends_with(|c: char| c.is_alphanumeric() || c == '_') {
        r"\b"
    } else {
        ""
    };
    Regex::new(&format!("(?i){prefix}{escaped}{suffix}")).expect("vocabulary pattern")
}

/// Intersects `text` against the technology vocabulary, preserving the
/// vocabulary's canonical casing and ordering.
pub fn extract_skills(text: &str) -> Vec<String> {
    SKILL_PATTERNS
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(term, _)| (*term).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_matches() {
        let skills = extract_skills("Built services in Rust and Python on AWS");
        assert_eq!(skills, vec!["Python", "Rust", "AWS"]);
    }

    #[test]
    fn test_word_boundary_go_vs_golang() {
        assert!(extract_skills("Shipped Golang microservices").is_empty());
        assert!(extract_skills("Worked at Google on search").is_empty());
        assert_eq!(extract_skills("Wrote Go services at Google"), vec!["Go"]);
    }

    #[test]
    fn test_metacharacter_entries_match_literally() {
        let skills = extract_skills("Modernized a C++ codebase with Node.js tooling");
        assert!(skills.contains(&"C++".to_string()));
        assert!(skills.contains(&"Node.js".to_string()));
        // "Node.js" must not be produced by "Nodexjs" — the dot is literal.
        assert!(!extract_skills("Nodexjs internals").contains(&"Node.js".to_string()));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(extract_skills("POSTGRESQL and docker"), vec!["PostgreSQL", "Docker"]);
    }

    #[test]
    fn test_canonical_casing_preserved() {
        assert_eq!(extract_skills("typescript everywhere"), vec!["TypeScript"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(extract_skills("").is_empty());
    }
}
