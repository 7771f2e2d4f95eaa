//! Parses a resume file with the heuristic backend and prints the merged
//! profile as JSON.
//!
//! Usage: cargo run --example parse_resume -- path/to/resume.pdf

use anyhow::{bail, Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use prospect_core::{parse_resume, HeuristicParser, MediaType, ProfileSession, RawDocument};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let path = match std::env::args().nth(1) {
        Some(p) => p,
        None => bail!("usage: parse_resume <resume.pdf|resume.docx>"),
    };

    let media_type = match path.rsplit('.').next() {
        Some("pdf") => MediaType::Pdf,
        Some("doc") => MediaType::Doc,
        Some("docx") => MediaType::Docx,
        _ => bail!("unsupported file extension (expected .pdf, .doc, or .docx)"),
    };

    let bytes = std::fs::read(&path).with_context(|| format!("reading {path}"))?;
    let doc = RawDocument::new(media_type, bytes);

    let mut session = ProfileSession::new();
    let ticket = session.begin_parse();
    let partial = parse_resume(doc, &HeuristicParser).await?;
    session.apply_parse(ticket, partial);

    println!("{}", serde_json::to_string_pretty(session.profile())?);
    Ok(())
}
