//! Experience-section parsing.
//!
//! Entries are anchored on date-range lines: each line carrying a
//! recognizable month/year range closes over the non-bullet header lines
//! immediately above it (company, optionally a role) and the bullet lines
//! below it (description). Sections with no date token at all fall back to
//! blank-line blocks.

use crate::models::draft::ExperienceDraft;
use crate::parser::dates::{find_date_range, DateRange};
use crate::parser::skills::extract_skills;

const BULLET_MARKERS: &[char] = &['•', '●', '▪', '◦', '*', '‣'];

pub fn is_bullet(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with(BULLET_MARKERS)
        || trimmed.starts_with("- ")
        || trimmed.starts_with("– ")
}

pub fn strip_bullet(line: &str) -> &str {
    line.trim_start()
        .trim_start_matches(BULLET_MARKERS)
        .trim_start_matches(['-', '–'])
        .trim()
}

pub fn parse_experience(section: &str) -> Vec<ExperienceDraft> {
    let lines: Vec<&str> = section.lines().collect();
    let parsed: Vec<Option<(DateRange, String)>> =
        lines.iter().map(|l| find_date_range(l)).collect();
    // Bullet lines can mention year spans in prose; only standalone lines
    // anchor entries.
    let date_idxs: Vec<usize> = parsed
        .iter()
        .enumerate()
        .filter(|(i, p)| p.is_some() && !is_bullet(lines[*i]))
        .map(|(i, _)| i)
        .collect();

    if date_idxs.is_empty() {
        return parse_blocks(section);
    }

    // Header span per entry: the contiguous non-empty, non-bullet lines
    // directly above the date line (at most company + role).
    let header_starts: Vec<usize> = date_idxs
        .iter()
        .map(|&di| {
            let mut start = di;
            while start > 0 {
                let above = lines[start - 1].trim();
                if above.is_empty() || is_bullet(above) || parsed[start - 1].is_some() {
                    break;
                }
                start -= 1;
                if di - start == 2 {
                    break;
                }
            }
            start
        })
        .collect();

    let mut entries = Vec::new();
    for (k, &di) in date_idxs.iter().enumerate() {
        let Some((range, role_rest)) = parsed[di].clone() else {
            continue;
        };
        let header: Vec<&str> = lines[header_starts[k]..di]
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .collect();

        let (mut company, mut role) = split_company_role(&header);
        if !role_rest.is_empty() {
            if role.is_empty() {
                role = role_rest;
            } else if company.is_empty() {
                company = std::mem::take(&mut role);
                role = role_rest;
            } else {
                role = format!("{role} {role_rest}");
            }
        }

        if company.is_empty() && role.is_empty() {
            continue;
        }

        let body_end = header_starts.get(k + 1).copied().unwrap_or(lines.len());
        let description = lines[di + 1..body_end]
            .iter()
            .filter(|l| is_bullet(l))
            .map(|l| strip_bullet(l))
            .collect::<Vec<_>>()
            .join("\n");

        let entry_text = lines[header_starts[k]..body_end].join("\n");

        entries.push(ExperienceDraft {
            id: None,
            company,
            role,
            start_date: range.start,
            end_date: range.end,
            current: range.current,
            description,
            technologies: extract_skills(&entry_text),
        });
    }

    entries
}

/// Interprets the header lines above a date line. The first line is the
/// company (an `" at "` connective flips it to role-at-company; a
/// `|`-separated trailing location fragment is dropped); a second line, if
/// present, is the role.
fn split_company_role(header: &[&str]) -> (String, String) {
    let Some(first) = header.first() else {
        return (String::new(), String::new());
    };
    let first = first.split('|').next().unwrap_or("").trim();

    let (mut company, mut role) = match first.split_once(" at ") {
        Some((r, c)) => (c.trim().to_string(), r.trim().to_string()),
        None => (first.to_string(), String::new()),
    };

    if header.len() > 1 && role.is_empty() {
        role = header[header.len() - 1]
            .split('|')
            .next()
            .unwrap_or("")
            .trim()
            .to_string();
    }

    (company, role)
}

/// Fallback for sections without any date token: blank-line blocks, first
/// line company, second line role, remainder description.
fn parse_blocks(section: &str) -> Vec<ExperienceDraft> {
    section
        .split("\n\n")
        .filter_map(|block| {
            let lines: Vec<&str> = block
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .collect();
            if lines.len() < 2 {
                return None;
            }
            let (company, role_hint) = split_company_role(&lines[..1]);
            let role = if role_hint.is_empty() {
                lines[1].to_string()
            } else {
                role_hint
            };
            if company.is_empty() && role.is_empty() {
                return None;
            }
            Some(ExperienceDraft {
                id: None,
                company,
                role,
                start_date: String::new(),
                end_date: String::new(),
                current: false,
                description: lines[2..].join("\n"),
                technologies: extract_skills(block),
            })
        })
        .collect()
}
