//! Prospect core — the resume-to-profile extraction pipeline.
//!
//! An uploaded resume (PDF or Word) is converted to plain text, parsed into
//! a sparse [`PartialProfile`] by either the heuristic or the LLM backend,
//! and merged into the session-owned [`CanonicalProfile`] with stable item
//! identifiers. Authentication, persistence hosting, and model inference
//! are external services; this crate owns the transformation in between.

pub mod config;
pub mod db;
pub mod document;
pub mod error;
pub mod llm_client;
pub mod merge;
pub mod models;
pub mod outreach;
pub mod parser;
pub mod pipeline;
pub mod session;
pub mod store;

pub use config::Config;
pub use document::{ExtractError, MediaType, RawDocument};
pub use error::PipelineError;
pub use llm_client::LlmClient;
pub use merge::merge_partial;
pub use models::draft::PartialProfile;
pub use models::profile::CanonicalProfile;
pub use parser::llm::LlmParser;
pub use parser::{HeuristicParser, ResumeParser};
pub use pipeline::parse_resume;
pub use session::{ParseTicket, ProfileSession};
