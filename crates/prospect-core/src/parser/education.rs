//! Education-section parsing: a line scan keyed on degree and institution
//! keywords. A record is only emitted once at least one of the two matched,
//! which keeps all-empty noise records out of the output.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::draft::EducationDraft;
use crate::parser::dates::find_date_range;
use crate::parser::experience::strip_bullet;

const DEGREE_KEYWORDS: &[&str] = &[
    "b.tech", "m.tech", "b.e.", "m.e.", "b.sc", "m.sc", "bsc", "msc", "bca", "mca", "mba",
    "ph.d", "phd", "bachelor", "master", "doctorate", "diploma", "associate",
];

const INSTITUTION_KEYWORDS: &[&str] = &[
    "university",
    "college",
    "institute",
    "school",
    "academy",
    "polytechnic",
];

const FIELD_KEYWORDS: &[&str] = &[
    "computer science",
    "information technology",
    "software engineering",
    "computer engineering",
    "electrical engineering",
    "electronics",
    "mechanical engineering",
    "civil engineering",
    "data science",
    "artificial intelligence",
    "machine learning",
    "mathematics",
    "statistics",
    "physics",
    "chemistry",
    "biology",
    "economics",
    "commerce",
    "business administration",
    "finance",
    "marketing",
    "design",
];

static GRADE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:cgpa|gpa|grade)\s*[:\-]?\s*([0-9][0-9./]*\s*%?)").expect("grade pattern")
});

/// Finds `keyword` in `line` case-insensitively, requiring non-letter
/// neighbors so "master" does not fire inside "mastering". Returns the
/// matched slice in its original casing.
fn find_keyword<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let lowered = line.to_lowercase();
    let mut from = 0;
    while let Some(pos) = lowered[from..].find(keyword) {
        let start = from + pos;
        let end = start + keyword.len();
        let before_ok = start == 0
            || !lowered[..start]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphabetic());
        let after_ok = end == lowered.len()
            || !lowered[end..].chars().next().is_some_and(|c| c.is_alphabetic());
        if before_ok && after_ok {
            return line.get(start..end);
        }
        from = end;
    }
    None
}

fn first_keyword<'a>(line: &'a str, keywords: &[&str]) -> Option<&'a str> {
    keywords.iter().find_map(|kw| find_keyword(line, kw))
}

pub fn parse_education(section: &str) -> Vec<EducationDraft> {
    let mut records: Vec<EducationDraft> = Vec::new();
    let mut current: Option<EducationDraft> = None;

    for raw in section.lines() {
        let line = strip_bullet(raw);
        if line.is_empty() {
            continue;
        }

        if let Some(degree) = first_keyword(line, DEGREE_KEYWORDS) {
            let field = first_keyword(line, FIELD_KEYWORDS)
                .unwrap_or(degree)
                .to_string();
            // An institution-only record above us is still waiting for its
            // degree line; otherwise this line starts a new record.
            let attach = matches!(current.as_ref(), Some(r) if r.degree.is_empty());
            if attach {
                if let Some(record) = current.as_mut() {
                    record.degree = degree.to_string();
                    record.field = field;
                }
            } else {
                if let Some(done) = current.take() {
                    records.push(done);
                }
                current = Some(EducationDraft {
                    degree: degree.to_string(),
                    field,
                    ..Default::default()
                });
            }
        }

        if first_keyword(line, INSTITUTION_KEYWORDS).is_some() {
            let record = current.get_or_insert_with(EducationDraft::default);
            if record.institution.is_empty() {
                record.institution = line.to_string();
            }
        }

        if let Some(record) = current.as_mut() {
            if record.start_date.is_empty() {
                if let Some((range, _)) = find_date_range(line) {
                    record.start_date = range.start;
                    record.end_date = range.end;
                }
            }
            if let Some(caps) = GRADE_RE.captures(line) {
                if record.grade.is_empty() {
                    record.grade = caps[1].trim().to_string();
                }
            }
            if record.field == record.degree {
                if let Some(field) = first_keyword(line, FIELD_KEYWORDS) {
                    record.field = field.to_string();
                }
            }
        }
    }

    if let Some(done) = current.take() {
        records.push(done);
    }

    records
        .into_iter()
        .filter(|r| !r.institution.is_empty() || !r.degree.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_then_institution() {
        let records = parse_education("B.Tech Computer Science\nXYZ University\n2016 - 2020\n");
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.degree, "B.Tech");
        assert_eq!(r.field, "Computer Science");
        assert_eq!(r.institution, "XYZ University");
        assert_eq!(r.start_date, "2016");
        assert_eq!(r.end_date, "2020");
    }

    #[test]
    fn test_institution_before_degree_starts_a_record() {
        let records = parse_education("Stanford University\nMaster of Science, Statistics\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].institution, "Stanford University");
        assert_eq!(records[0].degree, "Master");
    }

    #[test]
    fn test_field_defaults_to_degree_token() {
        let records = parse_education("MBA\nSome Business School\n");
        assert_eq!(records[0].degree, "MBA");
        assert_eq!(records[0].field, "MBA");
    }

    #[test]
    fn test_grade_extraction() {
        let records = parse_education("B.Sc Physics\nABC College\nCGPA: 8.9/10\n");
        assert_eq!(records[0].grade, "8.9/10");
    }

    #[test]
    fn test_multiple_records() {
        let text = "M.Sc Data Science\nTech University\n2021 - 2023\nBachelor of Engineering\nCity College\n2017 - 2021\n";
        let records = parse_education(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].degree, "M.Sc");
        assert_eq!(records[1].degree, "Bachelor");
        assert_eq!(records[1].institution, "City College");
    }

    #[test]
    fn test_keyword_boundaries() {
        // "mastering" must not start a record.
        assert!(parse_education("Mastering the art of sales\n").is_empty());
    }

    #[test]
    fn test_no_noise_records() {
        assert!(parse_education("2016 - 2020\nrandom line\n").is_empty());
        assert!(parse_education("").is_empty());
    }
}
