//! Document text extraction: an uploaded byte buffer plus its declared
//! media type in, plain text out. CPU-bound only; no I/O beyond the buffer,
//! no retry — a failure surfaces immediately to the caller.

use bytes::Bytes;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported media type: {0}")]
    UnsupportedFormat(String),

    #[error("could not read document: {0}")]
    CorruptDocument(String),
}

/// Accepted upload media types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Pdf,
    /// Legacy Word binary. Accepted at the boundary; extraction is attempted
    /// with the XML reader and surfaces `CorruptDocument` when it cannot.
    Doc,
    Docx,
}

impl MediaType {
    pub fn from_mime(mime: &str) -> Result<Self, ExtractError> {
        match mime {
            "application/pdf" => Ok(MediaType::Pdf),
            "application/msword" => Ok(MediaType::Doc),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Ok(MediaType::Docx)
            }
            other => Err(ExtractError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn as_mime(self) -> &'static str {
        match self {
            MediaType::Pdf => "application/pdf",
            MediaType::Doc => "application/msword",
            MediaType::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

/// An uploaded resume file: opaque bytes plus the declared media type.
/// Created at upload time and consumed once by [`extract_text`].
#[derive(Debug, Clone)]
pub struct RawDocument {
    media_type: MediaType,
    bytes: Bytes,
}

impl RawDocument {
    pub fn new(media_type: MediaType, bytes: impl Into<Bytes>) -> Self {
        Self {
            media_type,
            bytes: bytes.into(),
        }
    }

    pub fn from_mime(mime: &str, bytes: impl Into<Bytes>) -> Result<Self, ExtractError> {
        Ok(Self::new(MediaType::from_mime(mime)?, bytes))
    }

    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Extracts plain text from the document. A blank document yields `Ok("")`;
/// only an unreadable one is an error.
pub fn extract_text(doc: &RawDocument) -> Result<String, ExtractError> {
    let text = match doc.media_type {
        MediaType::Pdf => pdf_text(&doc.bytes)?,
        MediaType::Doc | MediaType::Docx => docx_text(&doc.bytes)?,
    };
    let cleaned = clean_text(&text);
    info!(
        "extracted {} characters from {} document",
        cleaned.len(),
        doc.media_type.as_mime()
    );
    Ok(cleaned)
}

fn pdf_text(bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
        warn!("PDF extraction failed: {e}");
        ExtractError::CorruptDocument(e.to_string())
    })
}

fn docx_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| {
        warn!("Word document extraction failed: {e}");
        ExtractError::CorruptDocument(e.to_string())
    })?;

    let mut paragraphs: Vec<String> = Vec::new();
    for child in docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(para) = child {
            let text: String = para
                .children
                .iter()
                .filter_map(|pc| match pc {
                    docx_rs::ParagraphChild::Run(run) => Some(
                        run.children
                            .iter()
                            .filter_map(|rc| match rc {
                                docx_rs::RunChild::Text(t) => Some(t.text.clone()),
                                _ => None,
                            })
                            .collect::<Vec<_>>()
                            .join(""),
                    ),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join("");
            paragraphs.push(text);
        }
    }
    Ok(paragraphs.join("\n"))
}

/// Trims each line and collapses runs of blank lines to a single one, so
/// section segmentation downstream sees stable newlines.
fn clean_text(raw: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    let mut blank_pending = false;
    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            blank_pending = !lines.is_empty();
            continue;
        }
        if blank_pending {
            lines.push("");
            blank_pending = false;
        }
        lines.push(line);
    }
    lines.join("\n")
}
