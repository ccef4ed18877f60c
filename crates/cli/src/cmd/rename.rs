//! Rename command: route a batch of files into a job folder.

use artdrop_core::config::{Config, ConflictPolicy};
use artdrop_core::job;
use artdrop_core::rename::{
    FileSpec, RenameBatchRequest, RenameOutcome, RenameService,
};
use artdrop_core::routing;

use crate::{state, RenameArgs};

pub fn run(config: &Config, args: &RenameArgs) {
    let folder_name = args
        .job_folder
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let job = match job::parse(&folder_name) {
        Ok(info) => info,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let policy = match &args.policy {
        Some(s) => match s.parse::<ConflictPolicy>() {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        None => config.rename.on_conflict,
    };

    let service = match RenameService::new(config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let files = args
        .files
        .iter()
        .map(|source| FileSpec {
            source: source.clone(),
            sku: args.sku.clone(),
            artwork_ref: args.art_ref.clone(),
            purpose: args.purpose.clone(),
            revision: args.revision,
        })
        .collect();

    let req = RenameBatchRequest {
        job_folder: args.job_folder.clone(),
        job,
        files,
        policy,
    };

    if args.dry_run {
        for plan in service.plan_batch(&req) {
            match plan {
                Ok(p) => println!(
                    "plan: {} -> {}/{}",
                    p.source.display(),
                    p.subfolder,
                    p.new_name
                ),
                Err(e) => println!("plan: {e}"),
            }
        }
        println!();
        println!("(dry-run mode - no changes made)");
        return;
    }

    if let Err(e) = routing::ensure_job_subfolders(&args.job_folder) {
        eprintln!("Error preparing job subfolders: {e}");
        std::process::exit(1);
    }

    let mut app = state::load();
    let report = service.rename_batch(&req, &mut app.undo);

    let mut failed = false;
    for file in &report.reports {
        match &file.outcome {
            RenameOutcome::Renamed { dest } => {
                println!("renamed: {} -> {}", file.source.display(), dest.display());
            }
            RenameOutcome::Skipped { existing } => {
                println!(
                    "skipped: {} (already exists: {})",
                    file.source.display(),
                    existing.display()
                );
            }
            RenameOutcome::Failed(e) => {
                failed = true;
                println!("failed: {} ({e})", file.source.display());
            }
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    app.session.increment_files_renamed(report.renamed_count() as u32);
    state::save(&app);

    println!();
    println!(
        "{} renamed, {} skipped, {} failed",
        report.renamed_count(),
        report.skipped_count(),
        report.failed_count()
    );

    if failed {
        std::process::exit(1);
    }
}
