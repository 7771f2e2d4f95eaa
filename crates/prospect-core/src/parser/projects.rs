//! Projects-section parsing. Title-looking lines open blocks; inside a
//! block, an explicit `Tech Stack:` line wins over vocabulary intersection,
//! bullet lines form the description, and URLs are routed to source vs.
//! live-demo links by domain.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::draft::ProjectDraft;
use crate::parser::experience::{is_bullet, strip_bullet};
use crate::parser::skills::extract_skills;

static TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][A-Za-z0-9&+./'\- ]{2,59}(\s*\(.+\))?$").expect("project title pattern")
});

static TECH_STACK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^tech\s*stack\s*[:\-]\s*(.+)$").expect("tech stack pattern"));

static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").expect("url pattern"));

static REPO_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:https?://)?(?:www\.)?(?:github\.com|gitlab\.com|bitbucket\.org)/\S+")
        .expect("repo url pattern")
});

const SOURCE_DOMAINS: &[&str] = &["github.com", "gitlab.com", "bitbucket.org"];

/// Lines like `User: demo@example.com` / `Admin: ...` are demo credentials,
/// not description.
fn is_metadata_line(line: &str) -> bool {
    let lowered = line.to_lowercase();
    lowered.starts_with("user:") || lowered.starts_with("admin:")
}

fn is_title_line(line: &str) -> bool {
    !is_bullet(line)
        && !TECH_STACK_RE.is_match(line)
        && !line.contains("://")
        && TITLE_RE.is_match(line)
        && line.split_whitespace().count() <= 8
}

pub fn parse_projects(section: &str) -> Vec<ProjectDraft> {
    let mut projects: Vec<ProjectDraft> = Vec::new();
    let mut current: Option<ProjectDraft> = None;
    let mut bullets: Vec<String> = Vec::new();

    let mut finalize = |project: Option<ProjectDraft>, bullets: &mut Vec<String>| {
        if let Some(mut project) = project.filter(|p| !p.name.is_empty()) {
            project.description = bullets.join("\n");
            if project.technologies.is_empty() {
                project.technologies = extract_skills(&project.description);
            }
            projects.push(project);
        }
        bullets.clear();
    };

    for raw in section.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if is_title_line(line) {
            finalize(current.take(), &mut bullets);
            current = Some(ProjectDraft {
                name: line.to_string(),
                ..Default::default()
            });
            continue;
        }

        let Some(project) = current.as_mut() else {
            continue;
        };

        if let Some(caps) = TECH_STACK_RE.captures(line) {
            project.technologies = caps[1]
                .split([',', '|', '·'])
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect();
            continue;
        }

        if let Some(repo) = REPO_URL_RE.find(line) {
            if project.github_url.is_empty() {
                project.github_url = repo.as_str().trim_end_matches(['.', ',']).to_string();
            }
            continue;
        }

        if let Some(url) = URL_RE.find(line) {
            let is_source = SOURCE_DOMAINS.iter().any(|d| url.as_str().contains(d));
            if !is_source && project.live_url.is_empty() {
                project.live_url = url.as_str().trim_end_matches(['.', ',']).to_string();
            }
            continue;
        }

        if is_bullet(line) && !is_metadata_line(strip_bullet(line)) {
            bullets.push(strip_bullet(line).to_string());
        }
    }

    finalize(current.take(), &mut bullets);
    projects
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Inventory Tracker (solo project)\n\
Tech Stack: Rust, PostgreSQL, Docker\n\
• Real-time stock dashboard\n\
• User: demo@example.com\n\
https://github.com/jsmith/inventory-tracker\n\
https://inventory.example.com\n\
Recipe Finder\n\
• Search engine over 10k recipes built with React\n";

    #[test]
    fn test_blocks_split_on_title_lines() {
        let projects = parse_projects(SAMPLE);
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].name, "Inventory Tracker (solo project)");
        assert_eq!(projects[1].name, "Recipe Finder");
    }

    #[test]
    fn test_tech_stack_line_wins() {
        let projects = parse_projects(SAMPLE);
        assert_eq!(projects[0].technologies, vec!["Rust", "PostgreSQL", "Docker"]);
    }

    #[test]
    fn test_vocabulary_fallback_for_technologies() {
        let projects = parse_projects(SAMPLE);
        assert_eq!(projects[1].technologies, vec!["React"]);
    }

    #[test]
    fn test_metadata_lines_excluded_from_description() {
        let projects = parse_projects(SAMPLE);
        assert!(projects[0].description.contains("stock dashboard"));
        assert!(!projects[0].description.contains("demo@example.com"));
    }

    #[test]
    fn test_url_routing() {
        let projects = parse_projects(SAMPLE);
        assert_eq!(
            projects[0].github_url,
            "https://github.com/jsmith/inventory-tracker"
        );
        assert_eq!(projects[0].live_url, "https://inventory.example.com");
    }

    #[test]
    fn test_text_before_first_title_is_ignored() {
        let projects = parse_projects("• stray bullet\nSide Project\n• did a thing\n");
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "Side Project");
    }

    #[test]
    fn test_empty_section() {
        assert!(parse_projects("").is_empty());
    }
}
