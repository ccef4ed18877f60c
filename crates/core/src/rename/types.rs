//! Data structures for rename batches and their reversible records.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ConflictPolicy;
use crate::job::JobInfo;

/// Per-file errors inside a batch. None of these abort the batch; each is
/// reported against the file (or operation) it belongs to.
#[derive(Debug, Error)]
pub enum RenameError {
    /// Source file missing or not a regular file at execution time.
    #[error("source file unavailable: {0}")]
    SourceUnavailable(PathBuf),

    /// A file the undo/redo replay expected is gone; the user touched the
    /// filesystem behind our back.
    #[error("expected file is missing (stale history): {0}")]
    StaleState(PathBuf),

    /// The increment policy ran out of retries.
    #[error("no unused revision found for '{name}' after {attempts} attempts")]
    ResolutionExhausted { name: String, attempts: u32 },

    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The single fatal condition at the service boundary: configuration that
/// leaves no way to route or name anything.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("configuration unusable: {0}")]
    UnusableConfig(String),
}

/// One file to be renamed, with the operator-chosen naming inputs.
#[derive(Debug, Clone)]
pub struct FileSpec {
    pub source: PathBuf,
    pub sku: String,
    pub artwork_ref: String,
    pub purpose: String,
    /// Pinned revision; `None` lets the resolver pick the next one.
    pub revision: Option<u32>,
}

/// One user-triggered rename action over a set of files.
#[derive(Debug, Clone)]
pub struct RenameBatchRequest {
    /// Root of the job folder the files are routed into.
    pub job_folder: PathBuf,
    pub job: JobInfo,
    pub files: Vec<FileSpec>,
    pub policy: ConflictPolicy,
}

/// A reversible record of one executed move. Audit unit and undo
/// primitive in one: the inverse is dest back to source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameOperation {
    pub source_path: PathBuf,
    pub dest_path: PathBuf,
    pub original_name: String,
    pub new_name: String,
    pub timestamp: DateTime<Utc>,
}

/// The unit of undo/redo: every operation that succeeded in one batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationBatch {
    pub id: String,
    pub job_number: String,
    pub timestamp: DateTime<Utc>,
    pub operations: Vec<RenameOperation>,
}

impl OperationBatch {
    pub fn new(job_number: impl Into<String>) -> Self {
        let timestamp = Utc::now();
        Self {
            id: timestamp.format("%Y%m%d_%H%M%S%.3f").to_string(),
            job_number: job_number.into(),
            timestamp,
            operations: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

/// What happened to one file of a batch.
#[derive(Debug)]
pub enum RenameOutcome {
    Renamed { dest: PathBuf },
    Skipped { existing: PathBuf },
    Failed(RenameError),
}

/// Per-file result line of a batch report.
#[derive(Debug)]
pub struct FileReport {
    pub source: PathBuf,
    pub outcome: RenameOutcome,
}

/// Everything the caller needs to show after a batch: one line per input
/// file, successes and failures never merged.
#[derive(Debug)]
pub struct BatchReport {
    pub batch_id: String,
    pub reports: Vec<FileReport>,
}

impl BatchReport {
    pub fn renamed_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r.outcome, RenameOutcome::Renamed { .. }))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r.outcome, RenameOutcome::Skipped { .. }))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r.outcome, RenameOutcome::Failed(_)))
            .count()
    }
}

/// A planned (not yet executed) target for one file, used for dry-run
/// previews.
#[derive(Debug, Clone)]
pub struct RenamePlan {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub subfolder: String,
    pub new_name: String,
}
