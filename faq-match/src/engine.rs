//! The match engine: segments document text into question/answer pairs and
//! picks the best-scoring answer for a query.
//!
//! Segmentation is line-oriented. A line containing `:` is a header and
//! splits at the first delimiter into a label (scored) and a value (kept
//! verbatim, trimmed). A line without a delimiter is a continuation and is
//! appended to the answer of the current best candidate, not to the most
//! recent header. The accumulation is coupled to the best-match pointer;
//! existing documents with multi-line answers depend on that behavior.

use tracing::{debug, trace, warn};

use crate::loader::DocumentSource;
use crate::similarity::{jaro_winkler, normalize};

/// Reply when no question scores above the threshold.
pub const NO_MATCH_REPLY: &str = "Sorry, I don't understand your request.";

/// Reply when extraction or scanning fails outright. Distinct from
/// [`NO_MATCH_REPLY`] so callers can tell "found nothing good enough"
/// from "failed to search at all".
pub const PROCESSING_ERROR_REPLY: &str = "There was an error processing your request.";

/// Acceptance gate for the best candidate; strictly greater wins.
const SCORE_THRESHOLD: f64 = 0.5;

/// Terminal outcome of one lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Best candidate cleared the threshold; carries its answer verbatim.
    Matched(String),
    /// Nothing cleared the threshold, or the lookup failed; carries the
    /// default reply to send.
    NoMatch(String),
}

impl MatchOutcome {
    /// The reply string to hand back to the caller either way.
    pub fn into_reply(self) -> String {
        match self {
            MatchOutcome::Matched(reply) | MatchOutcome::NoMatch(reply) => reply,
        }
    }
}

/// The single candidate retained while scanning: best-so-far label score
/// plus its accumulating answer text.
struct Capture {
    value: String,
    score: f64,
}

/// Scans `text` for the entry whose label best matches `query`.
///
/// Pure and synchronous; all I/O lives in [`DocumentSource`]. The scan
/// keeps exactly one candidate at a time and replaces it only on a
/// strictly higher score, so ties keep the first-seen entry and a
/// zero-scoring header never opens a capture.
pub fn scan(text: &str, query: &str) -> MatchOutcome {
    let query = normalize(query);
    let mut best: Option<Capture> = None;

    for line in text.lines() {
        if let Some((label, rest)) = line.split_once(':') {
            let score = jaro_winkler(&query, &normalize(label));
            trace!(label = label.trim(), score, "header scored");

            let best_score = best.as_ref().map_or(0.0, |c| c.score);
            if score > best_score {
                best = Some(Capture {
                    value: rest.trim().to_string(),
                    score,
                });
            }
        } else if let Some(capture) = best.as_mut() {
            // Multi-line answer: continuation lines attach to the leading
            // candidate at scan time.
            capture.value.push(' ');
            capture.value.push_str(line.trim());
        }
    }

    match best {
        Some(capture) if capture.score > SCORE_THRESHOLD => {
            debug!(score = capture.score, "candidate accepted");
            MatchOutcome::Matched(capture.value.trim().to_string())
        }
        other => {
            debug!(
                best_score = other.map(|c| c.score).unwrap_or(0.0),
                "no candidate above threshold"
            );
            MatchOutcome::NoMatch(NO_MATCH_REPLY.to_string())
        }
    }
}

/// Owns the document source and runs the full lookup per query: extract,
/// scan, gate. Stateless across queries; safe to share behind an `Arc`.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    source: DocumentSource,
}

impl MatchEngine {
    pub fn new(source: DocumentSource) -> Self {
        Self { source }
    }

    /// Resolves one query against a fresh read of the document.
    ///
    /// Never fails: an extraction or scanning error is folded into
    /// `NoMatch(`[`PROCESSING_ERROR_REPLY`]`)` at this boundary instead of
    /// propagating to the HTTP layer.
    pub async fn resolve(&self, query: &str) -> MatchOutcome {
        match self.source.extract_text().await {
            Ok(text) => scan(&text, query),
            Err(err) => {
                warn!(error = %err, "lookup failed");
                MatchOutcome::NoMatch(PROCESSING_ERROR_REPLY.to_string())
            }
        }
    }
}
