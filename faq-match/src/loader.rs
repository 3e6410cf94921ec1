//! Document loader: reads the backing FAQ document and extracts plain text.
//!
//! The source is treated as unstructured free text with line breaks as
//! record separators. Bytes are read fresh on every call — the engine
//! re-scans per query, so a document edit is picked up by the next request
//! without any invalidation logic.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error_handler::{FaqMatchError, Result};

/// Handle on the FAQ document. Owns only the path; performs one read per
/// [`DocumentSource::extract_text`] call and holds no file descriptor open.
#[derive(Debug, Clone)]
pub struct DocumentSource {
    path: PathBuf,
}

impl DocumentSource {
    /// Creates a source for the document at `path`. The file is not touched
    /// until the first extraction.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the document bytes and extracts plain text.
    ///
    /// Decoding is lossy on purpose: a stray non-UTF-8 byte in a flat text
    /// document should not take the whole lookup path down.
    ///
    /// # Errors
    /// [`FaqMatchError::SourceUnavailable`] if the file cannot be read.
    pub async fn extract_text(&self) -> Result<String> {
        let bytes =
            tokio::fs::read(&self.path)
                .await
                .map_err(|source| FaqMatchError::SourceUnavailable {
                    path: self.path.clone(),
                    source,
                })?;

        debug!(path = %self.path.display(), bytes = bytes.len(), "document read");
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
