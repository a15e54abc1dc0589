//! Text extraction: turns an uploaded document into plain text, dispatching on the
//! file extension. Unknown extensions yield an empty string rather than an error.

pub mod docx;
pub mod pdf;
pub mod text;

use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Could not read PDF '{file_name}': {message}")]
    Pdf { file_name: String, message: String },

    #[error("Could not read DOCX '{file_name}': {message}")]
    Docx { file_name: String, message: String },

    #[error("'{file_name}' is not valid UTF-8 text")]
    InvalidUtf8 { file_name: String },
}

/// Document formats the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Txt,
}

impl DocumentFormat {
    /// Detects the format from the lower-cased text after the last `.` of the name.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, ext) = file_name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentFormat::Pdf),
            "docx" => Some(DocumentFormat::Docx),
            "txt" => Some(DocumentFormat::Txt),
            _ => None,
        }
    }
}

/// Extracts plain text from an uploaded document.
///
/// Returns an empty string for unrecognised extensions. Pages and paragraphs without
/// text are skipped.
pub fn extract_text(file_name: &str, bytes: &[u8]) -> Result<String, ExtractionError> {
    let Some(format) = DocumentFormat::from_file_name(file_name) else {
        warn!("Unsupported document type '{file_name}', treating as empty");
        return Ok(String::new());
    };

    let text = match format {
        DocumentFormat::Pdf => pdf::extract_text(bytes).map_err(|message| ExtractionError::Pdf {
            file_name: file_name.to_string(),
            message,
        })?,
        DocumentFormat::Docx => {
            docx::extract_text(bytes).map_err(|message| ExtractionError::Docx {
                file_name: file_name.to_string(),
                message,
            })?
        }
        DocumentFormat::Txt => {
            text::decode_utf8(bytes).ok_or_else(|| ExtractionError::InvalidUtf8 {
                file_name: file_name.to_string(),
            })?
        }
    };

    debug!(
        "Extracted {} chars from '{}' ({:?})",
        text.chars().count(),
        file_name,
        format
    );
    Ok(text)
}

/// Appends `piece` plus a newline unless it carries no visible text.
pub(crate) fn push_block(out: &mut String, piece: &str) {
    if piece.trim().is_empty() {
        return;
    }
    out.push_str(piece);
    out.push('\n');
}
