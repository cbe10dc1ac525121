//! `intakeflow-ingest` — text extraction from uploaded files.
//!
//! Collaborator contract: `extract_text(path, filename) -> text | error`.
//! Format internals are out of scope for this service; plain-text formats
//! are read directly and anything else is rejected with a typed error the
//! HTTP layer can report. An upload with no readable text is an error here
//! (the pipeline has nothing to analyze), unlike a regex miss downstream.

use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("no readable text found in {0}")]
    EmptyDocument(String),

    #[error("failed to read {filename}: {source}")]
    Io {
        filename: String,
        #[source]
        source: std::io::Error,
    },
}

/// File extensions read as plain text.
const TEXT_EXTENSIONS: [&str; 2] = ["txt", "md"];

/// Extract UTF-8 text from a stored upload.
///
/// `filename` is the client's original name and decides the format; `path`
/// is where the upload was staged. Invalid UTF-8 is replaced rather than
/// rejected — the downstream analysis is best-effort anyway.
pub async fn extract_text(path: &Path, filename: &str) -> Result<String, IngestError> {
    let extension = filename
        .rsplit('.')
        .next()
        .unwrap_or("")
        .trim()
        .to_lowercase();

    if !TEXT_EXTENSIONS.contains(&extension.as_str()) {
        return Err(IngestError::UnsupportedFormat(filename.to_string()));
    }

    let bytes = tokio::fs::read(path).await.map_err(|source| IngestError::Io {
        filename: filename.to_string(),
        source,
    })?;

    let text = String::from_utf8_lossy(&bytes).into_owned();
    if text.trim().is_empty() {
        return Err(IngestError::EmptyDocument(filename.to_string()));
    }

    tracing::debug!(filename, chars = text.len(), "extracted upload text");
    Ok(text)
}
