//! End-to-end pipeline through the public API: parse a job folder name,
//! plan and execute a batch, then walk it back and forward again.

use artdrop_core::config::{Config, ConflictPolicy};
use artdrop_core::job;
use artdrop_core::rename::{
    FileSpec, RenameBatchRequest, RenameService, UndoManager,
};
use artdrop_core::routing;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const JOB_FOLDER: &str = "12345_JohnDoe_AcmeCorp_MUG-11OZ x 100_(PO-98765)";

fn file_spec(source: &Path, purpose: &str) -> FileSpec {
    FileSpec {
        source: source.to_path_buf(),
        sku: "MUG-11OZ".into(),
        artwork_ref: "Blue Dog".into(),
        purpose: purpose.into(),
        revision: None,
    }
}

#[test]
fn batch_rename_then_undo_then_redo() {
    let tmp = tempdir().unwrap();
    let job_folder = tmp.path().join(JOB_FOLDER);
    fs::create_dir_all(&job_folder).unwrap();
    routing::ensure_job_subfolders(&job_folder).unwrap();

    let info = job::parse(JOB_FOLDER).unwrap();
    assert_eq!(info.job_number, "12345");
    assert_eq!(info.sku, "MUG-11OZ");
    assert_eq!(info.quantity, 100);

    let proof_src = tmp.path().join("blue dog proof.psd");
    let print_src = tmp.path().join("blue dog print.tif");
    fs::write(&proof_src, "proof bytes").unwrap();
    fs::write(&print_src, "print bytes").unwrap();

    let cfg = Config::default();
    let service = RenameService::new(&cfg).unwrap();
    let mut undo = UndoManager::default();

    let req = RenameBatchRequest {
        job_folder: job_folder.clone(),
        job: info,
        files: vec![file_spec(&proof_src, "PROOF"), file_spec(&print_src, "PRINT")],
        policy: ConflictPolicy::Skip,
    };

    let plans = service.plan_batch(&req);
    assert_eq!(plans.len(), 2);
    assert!(plans.iter().all(Result::is_ok));

    let report = service.rename_batch(&req, &mut undo);
    assert_eq!(report.renamed_count(), 2);

    let proof_dest = job_folder
        .join("5_VirtualProofs")
        .join("12345_MUG-11OZ_(Blue Dog)_PROOF_1.psd");
    let print_dest = job_folder
        .join("4_ArtSetups")
        .join("12345_MUG-11OZ_(Blue Dog)_PRINT_1.tif");
    assert!(proof_dest.is_file());
    assert!(print_dest.is_file());
    assert!(!proof_src.exists());
    assert!(!print_src.exists());

    let undone = undo.undo().unwrap();
    assert_eq!(undone.applied, 2);
    assert!(undone.failures.is_empty());
    assert!(proof_src.is_file());
    assert!(print_src.is_file());
    assert!(!proof_dest.exists());
    assert!(!print_dest.exists());

    let redone = undo.redo().unwrap();
    assert_eq!(redone.applied, 2);
    assert!(proof_dest.is_file());
    assert!(print_dest.is_file());

    assert!(undo.redo().is_none());
}

#[test]
fn second_batch_for_same_artwork_takes_the_next_revision() {
    let tmp = tempdir().unwrap();
    let job_folder = tmp.path().join(JOB_FOLDER);
    fs::create_dir_all(&job_folder).unwrap();

    let info = job::parse(JOB_FOLDER).unwrap();
    let cfg = Config::default();
    let service = RenameService::new(&cfg).unwrap();
    let mut undo = UndoManager::default();

    for round in 1..=3u32 {
        let src = tmp.path().join(format!("proof_{round}.psd"));
        fs::write(&src, "bytes").unwrap();
        let req = RenameBatchRequest {
            job_folder: job_folder.clone(),
            job: info.clone(),
            files: vec![file_spec(&src, "PROOF")],
            policy: ConflictPolicy::Skip,
        };
        let report = service.rename_batch(&req, &mut undo);
        assert_eq!(report.renamed_count(), 1);

        let dest = job_folder
            .join("5_VirtualProofs")
            .join(format!("12345_MUG-11OZ_(Blue Dog)_PROOF_{round}.psd"));
        assert!(dest.is_file(), "missing revision {round}");
    }
}
