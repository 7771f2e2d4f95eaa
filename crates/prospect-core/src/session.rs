//! Session-scoped ownership of the canonical profile.
//!
//! A quick re-upload can finish before the parse it superseded. Each parse
//! attempt checks out a monotonic [`ParseTicket`]; only the most recently
//! issued ticket may merge its result, so a stale response can never
//! overwrite a newer one.

use tracing::debug;

use crate::merge::merge_partial;
use crate::models::draft::PartialProfile;
use crate::models::profile::CanonicalProfile;

/// Token identifying one parse attempt. Issued by
/// [`ProfileSession::begin_parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseTicket {
    generation: u64,
}

/// Exclusive owner of the [`CanonicalProfile`] for one client session.
/// Driven from a single task; lives for the session's lifetime.
#[derive(Debug, Default)]
pub struct ProfileSession {
    profile: CanonicalProfile,
    issued: u64,
}

impl ProfileSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile(&self) -> &CanonicalProfile {
        &self.profile
    }

    /// Direct access for user edits; parse results go through
    /// [`Self::apply_parse`] instead.
    pub fn profile_mut(&mut self) -> &mut CanonicalProfile {
        &mut self.profile
    }

    /// Registers a new parse attempt, invalidating all earlier tickets.
    pub fn begin_parse(&mut self) -> ParseTicket {
        self.issued += 1;
        ParseTicket {
            generation: self.issued,
        }
    }

    /// Merges a parse result if its ticket is still current. Returns whether
    /// the merge happened; a stale result leaves the profile untouched.
    pub fn apply_parse(&mut self, ticket: ParseTicket, partial: PartialProfile) -> bool {
        if ticket.generation != self.issued {
            debug!(
                "discarding stale parse result (generation {} < {})",
                ticket.generation, self.issued
            );
            return false;
        }
        merge_partial(&mut self.profile, partial);
        true
    }
}
