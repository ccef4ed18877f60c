//! Data structures for canonical filenames.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when decomposing a filename.
///
/// Decomposition is best-effort: callers treat a malformed name as
/// "no match" rather than a failure of the surrounding operation.
#[derive(Debug, Error)]
pub enum NameParseError {
    /// The name does not match the five-group parenthesized grammar.
    #[error("filename does not match the canonical grammar: {0}")]
    MalformedName(String),
}

/// Structured fields of a canonical artwork filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingFields {
    /// Digit run identifying the job.
    pub job_number: String,
    pub sku: String,
    /// Free text, sanitized before it is written into a name.
    pub artwork_ref: String,
    /// Purpose token from the configured purpose list (e.g. SOURCE, PROOF).
    pub purpose: String,
    /// Positive revision integer.
    pub revision: u32,
    /// Extension without the leading dot, original case preserved.
    pub extension: String,
}
