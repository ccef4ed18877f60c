//! Linear undo/redo history over rename batches.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::fsops::move_file;
use super::types::{OperationBatch, RenameError};

fn default_max_history() -> usize {
    50
}

/// Two explicit stacks: `history` holds undoable batches, `future` holds
/// redoable ones. Pushing a new batch after an undo clears `future`
/// (standard linear history). Serializable so a front end can persist it
/// across invocations.
#[derive(Debug, Serialize, Deserialize)]
pub struct UndoManager {
    history: Vec<OperationBatch>,
    future: Vec<OperationBatch>,
    #[serde(default = "default_max_history")]
    max_history: usize,
}

impl Default for UndoManager {
    fn default() -> Self {
        Self::with_max_history(default_max_history())
    }
}

/// Result of replaying one batch in either direction.
#[derive(Debug)]
pub struct UndoReport {
    pub batch_id: String,
    pub job_number: String,
    /// Operations whose move went through.
    pub applied: usize,
    /// Operations that could not be replayed, with their reasons.
    pub failures: Vec<(std::path::PathBuf, RenameError)>,
}

impl UndoManager {
    pub fn with_max_history(max_history: usize) -> Self {
        Self { history: Vec::new(), future: Vec::new(), max_history }
    }

    /// Record a freshly executed batch. Clears the redo side and trims
    /// the oldest history entries past the configured depth.
    pub fn push(&mut self, batch: OperationBatch) {
        self.history.push(batch);
        self.future.clear();
        while self.history.len() > self.max_history {
            self.history.remove(0);
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    /// Undo the most recent batch, or `None` when there is nothing to
    /// undo.
    ///
    /// Inverses run in reverse order so chained overwrites unwind
    /// correctly. An expected file that has gone missing (the user
    /// touched the filesystem) is reported as stale for that operation
    /// and the rest of the batch continues. The batch moves to the redo
    /// stack either way.
    pub fn undo(&mut self) -> Option<UndoReport> {
        let batch = self.history.pop()?;
        let mut applied = 0;
        let mut failures = Vec::new();

        for op in batch.operations.iter().rev() {
            if !op.dest_path.exists() {
                warn!(path = %op.dest_path.display(), "undo target missing");
                failures.push((
                    op.dest_path.clone(),
                    RenameError::StaleState(op.dest_path.clone()),
                ));
                continue;
            }
            match move_file(&op.dest_path, &op.source_path) {
                Ok(()) => applied += 1,
                Err(e) => failures.push((
                    op.dest_path.clone(),
                    RenameError::Io { path: op.dest_path.clone(), source: e },
                )),
            }
        }

        info!(batch = %batch.id, applied, failed = failures.len(), "undid batch");
        let report = UndoReport {
            batch_id: batch.id.clone(),
            job_number: batch.job_number.clone(),
            applied,
            failures,
        };
        self.future.push(batch);
        Some(report)
    }

    /// Redo the most recently undone batch, or `None` when there is
    /// nothing to redo. Operations replay forward, in original order.
    pub fn redo(&mut self) -> Option<UndoReport> {
        let batch = self.future.pop()?;
        let mut applied = 0;
        let mut failures = Vec::new();

        for op in &batch.operations {
            if !op.source_path.exists() {
                warn!(path = %op.source_path.display(), "redo source missing");
                failures.push((
                    op.source_path.clone(),
                    RenameError::StaleState(op.source_path.clone()),
                ));
                continue;
            }
            match move_file(&op.source_path, &op.dest_path) {
                Ok(()) => applied += 1,
                Err(e) => failures.push((
                    op.source_path.clone(),
                    RenameError::Io { path: op.source_path.clone(), source: e },
                )),
            }
        }

        info!(batch = %batch.id, applied, failed = failures.len(), "redid batch");
        let report = UndoReport {
            batch_id: batch.id.clone(),
            job_number: batch.job_number.clone(),
            applied,
            failures,
        };
        self.history.push(batch);
        Some(report)
    }
}
