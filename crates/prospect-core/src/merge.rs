//! Profile normalization: merges a sparse extraction result into the
//! canonical record with an explicit field-by-field policy.
//!
//! Scalars are overwritten only by non-empty incoming values, so a parse
//! that missed a field can never blank what the user already has. Lists are
//! replaced wholesale when the incoming list is non-empty — never
//! concatenated or deduplicated. This is also the single place item
//! identifiers are allocated.

use std::collections::HashSet;

use uuid::Uuid;

use crate::models::draft::PartialProfile;
use crate::models::profile::CanonicalProfile;

pub fn merge_partial(profile: &mut CanonicalProfile, partial: PartialProfile) {
    let basic = &mut profile.basic_info;
    merge_scalar(&mut basic.name, partial.name);
    merge_scalar(&mut basic.title, partial.title);
    merge_scalar(&mut basic.bio, partial.bio);
    merge_scalar(&mut basic.email, partial.email);
    merge_scalar(&mut basic.phone, partial.phone);
    merge_scalar(&mut basic.location, partial.location);
    merge_scalar(&mut basic.desired_role, partial.desired_role);

    if !partial.skills.is_empty() {
        profile.skills = partial.skills;
    }
    if !partial.experience.is_empty() {
        profile.experience = with_ids(partial.experience, |d| d.id, |d, id| d.into_entry(id));
    }
    if !partial.education.is_empty() {
        profile.education = with_ids(partial.education, |d| d.id, |d, id| d.into_entry(id));
    }
    if !partial.projects.is_empty() {
        profile.projects = with_ids(partial.projects, |d| d.id, |d, id| d.into_entry(id));
    }
    if !partial.achievements.is_empty() {
        profile.achievements = with_ids(partial.achievements, |d| d.id, |d, id| d.into_entry(id));
    }
}

fn merge_scalar(slot: &mut String, incoming: Option<String>) {
    if let Some(value) = incoming {
        let value = value.trim();
        if !value.is_empty() {
            *slot = value.to_string();
        }
    }
}

/// Converts drafts to canonical entries, keeping an externally supplied ID
/// when it is unique within the list and generating a fresh one otherwise.
fn with_ids<D, E>(
    drafts: Vec<D>,
    id_of: impl Fn(&D) -> Option<Uuid>,
    build: impl Fn(D, Uuid) -> E,
) -> Vec<E> {
    let mut seen: HashSet<Uuid> = HashSet::new();
    drafts
        .into_iter()
        .map(|draft| {
            let mut id = id_of(&draft).unwrap_or_else(Uuid::new_v4);
            while !seen.insert(id) {
                id = Uuid::new_v4();
            }
            build(draft, id)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::draft::{EducationDraft, ExperienceDraft};

    fn partial_with_email(email: &str) -> PartialProfile {
        PartialProfile {
            email: Some(email.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_non_empty_scalar_overwrites() {
        let mut profile = CanonicalProfile::default();
        merge_partial(&mut profile, partial_with_email("a@b.co"));
        assert_eq!(profile.basic_info.email, "a@b.co");
    }

    #[test]
    fn test_empty_incoming_scalar_preserves_existing() {
        let mut profile = CanonicalProfile::default();
        profile.basic_info.email = "keep@me.io".to_string();

        merge_partial(&mut profile, partial_with_email("   "));
        assert_eq!(profile.basic_info.email, "keep@me.io");

        merge_partial(&mut profile, PartialProfile::default());
        assert_eq!(profile.basic_info.email, "keep@me.io");
    }

    #[test]
    fn test_scalar_merge_is_idempotent() {
        let mut profile = CanonicalProfile::default();
        merge_partial(&mut profile, partial_with_email("a@b.co"));
        let snapshot = profile.basic_info.clone();
        merge_partial(&mut profile, partial_with_email("a@b.co"));
        assert_eq!(profile.basic_info, snapshot);
    }

    #[test]
    fn test_non_empty_list_replaces_wholesale() {
        let mut profile = CanonicalProfile::default();
        merge_partial(
            &mut profile,
            PartialProfile {
                skills: vec!["Rust".to_string(), "Go".to_string()],
                ..Default::default()
            },
        );
        merge_partial(
            &mut profile,
            PartialProfile {
                skills: vec!["Python".to_string()],
                ..Default::default()
            },
        );
        assert_eq!(profile.skills, vec!["Python"]);
    }

    #[test]
    fn test_empty_list_keeps_existing() {
        let mut profile = CanonicalProfile::default();
        merge_partial(
            &mut profile,
            PartialProfile {
                skills: vec!["Rust".to_string()],
                ..Default::default()
            },
        );
        merge_partial(&mut profile, PartialProfile::default());
        assert_eq!(profile.skills, vec!["Rust"]);
    }

    #[test]
    fn test_scenario_c_other_lists_untouched() {
        let mut profile = CanonicalProfile::default();
        merge_partial(
            &mut profile,
            PartialProfile {
                experience: vec![ExperienceDraft {
                    company: "Acme".to_string(),
                    role: "Engineer".to_string(),
                    ..Default::default()
                }],
                ..Default::default()
            },
        );
        let experience_before = profile.experience.clone();

        merge_partial(
            &mut profile,
            PartialProfile {
                education: vec![EducationDraft {
                    institution: "XYZ University".to_string(),
                    degree: "B.Tech".to_string(),
                    ..Default::default()
                }],
                ..Default::default()
            },
        );

        assert_eq!(profile.experience, experience_before);
        assert_eq!(profile.education.len(), 1);
        assert_eq!(profile.education[0].institution, "XYZ University");
    }

    #[test]
    fn test_every_item_gets_a_unique_id() {
        let mut profile = CanonicalProfile::default();
        merge_partial(
            &mut profile,
            PartialProfile {
                experience: vec![
                    ExperienceDraft {
                        company: "Acme".to_string(),
                        ..Default::default()
                    },
                    ExperienceDraft {
                        company: "Globex".to_string(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
        );
        assert_eq!(profile.experience.len(), 2);
        assert_ne!(profile.experience[0].id, profile.experience[1].id);
        assert!(!profile.experience[0].id.is_nil());
    }

    #[test]
    fn test_supplied_ids_kept_but_duplicates_regenerated() {
        let shared = Uuid::new_v4();
        let mut profile = CanonicalProfile::default();
        merge_partial(
            &mut profile,
            PartialProfile {
                experience: vec![
                    ExperienceDraft {
                        id: Some(shared),
                        company: "Acme".to_string(),
                        ..Default::default()
                    },
                    ExperienceDraft {
                        id: Some(shared),
                        company: "Globex".to_string(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
        );
        assert_eq!(profile.experience[0].id, shared);
        assert_ne!(profile.experience[1].id, shared);
    }
}
