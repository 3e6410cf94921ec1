//! Unified error handling for `faq-match`.
//!
//! All messages include the prefix `[FAQ Match]` to simplify attribution
//! in logs. Both variants are caught at the [`MatchEngine`] boundary and
//! folded into a default reply; they never cross the HTTP layer.
//!
//! [`MatchEngine`]: crate::engine::MatchEngine

use std::path::PathBuf;

use thiserror::Error;

/// Unified result alias for the crate.
pub type Result<T> = std::result::Result<T, FaqMatchError>;

/// Errors produced while loading or scanning the FAQ document.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum FaqMatchError {
    /// The backing document is missing or unreadable.
    #[error("[FAQ Match] document unavailable at {path}: {source}")]
    SourceUnavailable {
        /// Path of the document that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Any other failure during segmentation or scoring. Scanning is
    /// currently total over arbitrary text, so nothing in the engine
    /// constructs this yet; it is the taxonomy slot for fallible scan
    /// steps, and [`MatchEngine::resolve`] already folds it into the
    /// error default reply like any other variant.
    ///
    /// [`MatchEngine::resolve`]: crate::engine::MatchEngine::resolve
    #[error("[FAQ Match] processing failed: {0}")]
    Processing(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_crate_prefix() {
        let unavailable = FaqMatchError::SourceUnavailable {
            path: "/tmp/faq.txt".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(
            unavailable
                .to_string()
                .starts_with("[FAQ Match] document unavailable at /tmp/faq.txt")
        );

        let processing = FaqMatchError::Processing("bad segment".into());
        assert_eq!(
            processing.to_string(),
            "[FAQ Match] processing failed: bad segment"
        );
    }
}
