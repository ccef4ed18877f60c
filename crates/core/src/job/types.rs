//! Data structures for job folder parsing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when parsing a job folder name.
#[derive(Debug, Error)]
pub enum JobParseError {
    /// The folder name does not start with a digit run.
    #[error("could not extract a job number from '{0}'")]
    MissingJobNumber(String),
}

/// Structured fields extracted from a job folder name.
///
/// Immutable once parsed; the session owns it for its duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobInfo {
    /// Leading digit run of the folder name.
    pub job_number: String,
    pub customer: String,
    pub company: String,
    pub sku: String,
    /// Parsed best-effort; a missing or non-numeric quantity is 0.
    pub quantity: u32,
    pub po_number: String,
    /// The folder name as given, kept for display.
    pub raw: String,
}
