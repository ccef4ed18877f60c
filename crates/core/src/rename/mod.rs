//! Batch rename orchestration.
//!
//! For each input file the service derives the canonical target name
//! (auto-filling the revision), resolves the destination subfolder,
//! applies the configured conflict policy, performs the move and records
//! a reversible operation. Errors are collected per file; nothing short
//! of unusable configuration aborts a batch.

mod fsops;
mod types;
mod undo;

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{info, warn};

pub use fsops::move_file;
pub use types::{
    BatchReport, FileReport, FileSpec, OperationBatch, RenameBatchRequest, RenameError,
    RenameOperation, RenameOutcome, RenamePlan, ServiceError,
};
pub use undo::{UndoManager, UndoReport};

use crate::config::{Config, ConflictPolicy};
use crate::job::JobInfo;
use crate::naming::{FilenameBuilder, NamingFields};
use crate::revision;
use crate::routing::RoutingTable;

/// Retry bound for the increment policy.
const MAX_INCREMENT_ATTEMPTS: u32 = 1000;

/// Orchestrates rename batches against a job folder.
pub struct RenameService<'a> {
    config: &'a Config,
    routing: RoutingTable,
    builder: FilenameBuilder,
}

impl<'a> RenameService<'a> {
    /// Build the service from resolved configuration.
    ///
    /// Refuses to start when the configuration leaves nothing to work
    /// with: an empty SKU list or no usable routing.
    pub fn new(config: &'a Config) -> Result<Self, ServiceError> {
        if config.naming.product_skus.is_empty() {
            return Err(ServiceError::UnusableConfig(
                "product SKU list is empty".to_string(),
            ));
        }
        let routing = RoutingTable::from_config(&config.routing);
        if routing.is_empty() {
            return Err(ServiceError::UnusableConfig(
                "no routes and no default subfolder configured".to_string(),
            ));
        }
        let builder = FilenameBuilder::new(config.naming.artwork_ref_max_len);
        Ok(Self { config, routing, builder })
    }

    pub fn default_policy(&self) -> ConflictPolicy {
        self.config.rename.on_conflict
    }

    /// Derive the target for one file without touching the filesystem
    /// beyond the revision scan. Used for dry-run previews.
    pub fn plan_file(
        &self,
        job_folder: &Path,
        job: &JobInfo,
        spec: &FileSpec,
    ) -> Result<RenamePlan, RenameError> {
        let subfolder = self.routing.resolve(&spec.purpose).to_string();
        let dest_dir = job_folder.join(&subfolder);

        let fields = self.naming_fields(&dest_dir, job, spec)?;
        let new_name = self.builder.build(&fields);
        let dest = dest_dir.join(&new_name);

        Ok(RenamePlan { source: spec.source.clone(), dest, subfolder, new_name })
    }

    /// Plan the whole batch, one result per input file, in input order.
    pub fn plan_batch(
        &self,
        req: &RenameBatchRequest,
    ) -> Vec<Result<RenamePlan, RenameError>> {
        req.files
            .iter()
            .map(|spec| {
                if spec.source.is_file() {
                    self.plan_file(&req.job_folder, &req.job, spec)
                } else {
                    Err(RenameError::SourceUnavailable(spec.source.clone()))
                }
            })
            .collect()
    }

    /// Execute a rename batch.
    ///
    /// Files are processed in input order; a failure on one file never
    /// aborts the rest. The successful operations form one batch pushed
    /// to the undo manager after all files have been processed, so a
    /// partially failed batch still supports partial undo.
    pub fn rename_batch(
        &self,
        req: &RenameBatchRequest,
        undo: &mut UndoManager,
    ) -> BatchReport {
        let mut batch = OperationBatch::new(req.job.job_number.clone());
        let mut reports = Vec::with_capacity(req.files.len());

        for spec in &req.files {
            let outcome = self.rename_one(req, spec, &mut batch);
            if let RenameOutcome::Failed(ref e) = outcome {
                warn!(source = %spec.source.display(), error = %e, "file failed");
            }
            reports.push(FileReport { source: spec.source.clone(), outcome });
        }

        let batch_id = batch.id.clone();
        if !batch.is_empty() {
            info!(
                batch = %batch_id,
                operations = batch.operations.len(),
                "recorded rename batch"
            );
            undo.push(batch);
        }

        BatchReport { batch_id, reports }
    }

    fn rename_one(
        &self,
        req: &RenameBatchRequest,
        spec: &FileSpec,
        batch: &mut OperationBatch,
    ) -> RenameOutcome {
        if !spec.source.is_file() {
            return RenameOutcome::Failed(RenameError::SourceUnavailable(
                spec.source.clone(),
            ));
        }

        let subfolder = self.routing.resolve(&spec.purpose);
        let dest_dir = req.job_folder.join(subfolder);

        let mut fields = match self.naming_fields(&dest_dir, &req.job, spec) {
            Ok(f) => f,
            Err(e) => return RenameOutcome::Failed(e),
        };

        let mut dest = dest_dir.join(self.builder.build(&fields));

        if dest.exists() {
            match req.policy {
                ConflictPolicy::Skip => {
                    return RenameOutcome::Skipped { existing: dest };
                }
                ConflictPolicy::Increment => {
                    match self.bump_until_free(&dest_dir, &mut fields) {
                        Ok(free) => dest = free,
                        Err(e) => return RenameOutcome::Failed(e),
                    }
                }
                ConflictPolicy::Overwrite => {
                    if let Err(e) = std::fs::remove_file(&dest) {
                        return RenameOutcome::Failed(RenameError::Io {
                            path: dest,
                            source: e,
                        });
                    }
                }
            }
        }

        let original_name = file_name_of(&spec.source);
        let new_name = file_name_of(&dest);

        if let Err(e) = move_file(&spec.source, &dest) {
            let err = if e.kind() == std::io::ErrorKind::NotFound {
                RenameError::SourceUnavailable(spec.source.clone())
            } else {
                RenameError::Io { path: spec.source.clone(), source: e }
            };
            return RenameOutcome::Failed(err);
        }

        info!(from = %spec.source.display(), to = %dest.display(), "renamed");
        batch.operations.push(RenameOperation {
            source_path: spec.source.clone(),
            dest_path: dest.clone(),
            original_name,
            new_name,
            timestamp: Utc::now(),
        });

        RenameOutcome::Renamed { dest }
    }

    /// Bump the revision until the built name is unused, bounded so a
    /// pathological directory cannot spin forever.
    fn bump_until_free(
        &self,
        dest_dir: &Path,
        fields: &mut NamingFields,
    ) -> Result<PathBuf, RenameError> {
        for _ in 0..MAX_INCREMENT_ATTEMPTS {
            fields.revision += 1;
            let candidate = dest_dir.join(self.builder.build(fields));
            if !candidate.exists() {
                return Ok(candidate);
            }
        }
        Err(RenameError::ResolutionExhausted {
            name: self.builder.build(fields),
            attempts: MAX_INCREMENT_ATTEMPTS,
        })
    }

    fn naming_fields(
        &self,
        dest_dir: &Path,
        job: &JobInfo,
        spec: &FileSpec,
    ) -> Result<NamingFields, RenameError> {
        let revision = match spec.revision {
            Some(pinned) => pinned,
            None if dest_dir.is_dir() => revision::next_revision(
                dest_dir,
                &job.job_number,
                &spec.sku,
                &spec.artwork_ref,
                &spec.purpose,
            )
            .map_err(|e| RenameError::Io { path: dest_dir.to_path_buf(), source: e })?,
            // Destination subfolder not created yet: nothing to scan.
            None => 1,
        };

        let extension = spec
            .source
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_string();

        Ok(NamingFields {
            job_number: job.job_number.clone(),
            sku: spec.sku.clone(),
            artwork_ref: spec.artwork_ref.clone(),
            purpose: spec.purpose.clone(),
            revision,
            extension,
        })
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default()
}
