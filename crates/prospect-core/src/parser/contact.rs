//! Contact-field heuristics: email, phone, and the best-effort name guess.
//! First match wins; shape matching only, no validation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::parser::sections::header_for;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("email pattern")
});

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("phone pattern")
});

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z .'\-]*$").expect("name pattern"));

pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().to_string())
}

/// Inspects the first few non-empty lines for a name candidate: after
/// stripping separator-delimited contact fragments, the remainder must be
/// 1-5 words of letters, spaces, hyphens, and periods. Lowest-confidence
/// heuristic in the extractor; first candidate wins.
pub fn extract_name(text: &str) -> Option<String> {
    for line in text.lines().filter(|l| !l.trim().is_empty()).take(5) {
        // Names live in the preamble; once sections start there is no point.
        if header_for(line).is_some() {
            return None;
        }
        let candidate = strip_contact_fragments(line);
        if candidate.is_empty() {
            continue;
        }
        let words = candidate.split_whitespace().count();
        if (1..=5).contains(&words) && NAME_RE.is_match(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Drops `|`/`,`/`;`/`·`-delimited fragments that look like contact data
/// (contain `@` or digits), keeping whatever prose remains.
fn strip_contact_fragments(line: &str) -> String {
    line.split(['|', ',', ';', '·', '•'])
        .map(str::trim)
        .filter(|frag| !frag.is_empty())
        .filter(|frag| !frag.contains('@') && !frag.chars().any(|c| c.is_ascii_digit()))
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_email_wins() {
        let text = "john@x.com\nother@y.org";
        assert_eq!(extract_email(text).as_deref(), Some("john@x.com"));
    }

    #[test]
    fn test_no_email() {
        assert!(extract_email("no contact details here").is_none());
    }

    #[test]
    fn test_phone_shapes() {
        assert_eq!(extract_phone("call 555-123-4567").as_deref(), Some("555-123-4567"));
        assert!(extract_phone("+1 (415) 555-0199").is_some());
        assert!(extract_phone("nothing numeric").is_none());
    }

    #[test]
    fn test_name_from_first_line() {
        assert_eq!(extract_name("John Smith\njohn@x.com").as_deref(), Some("John Smith"));
    }

    #[test]
    fn test_name_with_inline_contact_fragments() {
        let line = "Jane O'Neil-Park | jane@x.com | 555-123-4567\nEXPERIENCE";
        assert_eq!(extract_name(line).as_deref(), Some("Jane O'Neil-Park"));
    }

    #[test]
    fn test_header_line_is_not_a_name() {
        assert!(extract_name("EXPERIENCE\nSoftware Engineer").is_none());
    }

    #[test]
    fn test_contact_only_lines_yield_no_name() {
        assert!(extract_name("john@x.com\n555-123-4567").is_none());
    }
}
