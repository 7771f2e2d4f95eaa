//! Section segmentation: slices resume text into named regions by matching
//! case-insensitive header lines. A missing header yields an empty region,
//! never an error.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Experience,
    Education,
    Projects,
    Skills,
    Achievements,
}

const HEADERS: &[(Section, &[&str])] = &[
    (
        Section::Experience,
        &[
            "experience",
            "work experience",
            "professional experience",
            "employment",
            "employment history",
            "work history",
        ],
    ),
    (
        Section::Education,
        &["education", "academic background", "academics", "academic"],
    ),
    (
        Section::Projects,
        &["projects", "personal projects", "academic projects", "key projects"],
    ),
    (
        Section::Skills,
        &[
            "skills",
            "technical skills",
            "skills & technologies",
            "technologies",
            "core competencies",
        ],
    ),
    (
        Section::Achievements,
        &["achievements", "accomplishments", "awards", "honors"],
    ),
];

/// Named text regions sliced out of the full resume text.
#[derive(Debug, Default)]
pub struct SectionMap {
    regions: HashMap<Section, String>,
}

impl SectionMap {
    /// The region for `section`, or empty when its header was absent.
    pub fn get(&self, section: Section) -> &str {
        self.regions.get(&section).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, section: Section) -> bool {
        self.regions.contains_key(&section)
    }
}

/// Returns the section a line introduces, if the line is exactly a known
/// header (modulo case, surrounding whitespace, and a trailing colon).
pub fn header_for(line: &str) -> Option<Section> {
    let trimmed = line.trim().trim_end_matches(':').trim();
    if trimmed.is_empty() || trimmed.len() > 40 {
        return None;
    }
    let lowered = trimmed.to_lowercase();
    HEADERS
        .iter()
        .find(|(_, names)| names.contains(&lowered.as_str()))
        .map(|(section, _)| *section)
}

/// Splits `text` into named regions. Text between a recognized header and
/// the next recognized header (or end of input) belongs to that header's
/// section; text before the first header belongs to no section.
pub fn split_sections(text: &str) -> SectionMap {
    let mut map = SectionMap::default();
    let mut current: Option<Section> = None;

    for line in text.lines() {
        if let Some(section) = header_for(line) {
            current = Some(section);
            map.regions.entry(section).or_default();
            continue;
        }
        if let Some(section) = current {
            let region = map.regions.entry(section).or_default();
            region.push_str(line);
            region.push('\n');
        }
    }

    map
}
