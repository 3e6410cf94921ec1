//! Best-effort FAQ lookup against a flat question/answer document.
//!
//! The document is unstructured free text. A line containing `:` opens a
//! `question: answer` pair; lines without a delimiter continue the answer
//! currently being captured. Each incoming query is scored against every
//! question with Jaro-Winkler similarity and the best pair above a fixed
//! threshold wins.
//!
//! The document is re-read and re-scanned on every call; nothing is cached
//! between queries.

pub mod engine;
pub mod error_handler;
pub mod loader;
pub mod similarity;

pub use engine::{MatchEngine, MatchOutcome, scan};
pub use error_handler::{FaqMatchError, Result};
pub use loader::DocumentSource;
