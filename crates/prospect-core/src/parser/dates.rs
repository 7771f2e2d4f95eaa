//! Date-range heuristics. English month names only; a line with no
//! recognizable month/year token simply yields no range.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::draft::PRESENT_SENTINEL;

const MONTH_PAT: &str = "jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|\
jul(?:y)?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?";

static RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?:({m})\.?\s+)?(\d{{4}})\s*(?:-|–|—|\bto\b)\s*(?:(?:({m})\.?\s+)?(\d{{4}})|(present|current))",
        m = MONTH_PAT
    ))
    .expect("date range pattern")
});

/// A normalized date span. `start`/`end` are `YYYY-MM` or `YYYY` strings,
/// or empty when no token was recognizable; `current` implies `end` is the
/// `"Present"` sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
    pub current: bool,
}

fn month_number(token: &str) -> Option<&'static str> {
    let key: String = token.to_lowercase().chars().take(3).collect();
    let num = match key.as_str() {
        "jan" => "01",
        "feb" => "02",
        "mar" => "03",
        "apr" => "04",
        "may" => "05",
        "jun" => "06",
        "jul" => "07",
        "aug" => "08",
        "sep" => "09",
        "oct" => "10",
        "nov" => "11",
        "dec" => "12",
        _ => return None,
    };
    Some(num)
}

fn normalize(month: Option<&str>, year: &str) -> String {
    match month.and_then(month_number) {
        Some(m) => format!("{year}-{m}"),
        None => year.to_string(),
    }
}

/// Finds the first month/year (or bare year) range in a line. Returns the
/// normalized range and the line with the matched span removed, so the
/// remainder can be treated as a role title.
pub fn find_date_range(line: &str) -> Option<(DateRange, String)> {
    let caps = RANGE_RE.captures(line)?;
    let whole = caps.get(0)?;

    let start = normalize(caps.get(1).map(|m| m.as_str()), &caps[2]);
    let (end, current) = match caps.get(5) {
        Some(_) => (PRESENT_SENTINEL.to_string(), true),
        None => (
            normalize(
                caps.get(3).map(|m| m.as_str()),
                caps.get(4).map(|m| m.as_str()).unwrap_or_default(),
            ),
            false,
        ),
    };

    let mut rest = String::with_capacity(line.len());
    rest.push_str(&line[..whole.start()]);
    rest.push_str(&line[whole.end()..]);
    let rest = rest
        .trim()
        .trim_matches(|c: char| matches!(c, '|' | ',' | '-' | '–' | '·' | '(' | ')'))
        .trim()
        .to_string();

    Some((DateRange { start, end, current }, rest))
}

pub fn contains_date_range(line: &str) -> bool {
    RANGE_RE.is_match(line)
}
