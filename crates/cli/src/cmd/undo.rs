//! Undo and redo of persisted rename batches.

use artdrop_core::rename::UndoReport;

use crate::state;

pub fn run_undo() {
    let mut app = state::load();
    match app.undo.undo() {
        Some(report) => {
            print_report("undid", &report);
            state::save(&app);
            if !report.failures.is_empty() {
                std::process::exit(1);
            }
        }
        None => println!("Nothing to undo."),
    }
}

pub fn run_redo() {
    let mut app = state::load();
    match app.undo.redo() {
        Some(report) => {
            print_report("redid", &report);
            state::save(&app);
            if !report.failures.is_empty() {
                std::process::exit(1);
            }
        }
        None => println!("Nothing to redo."),
    }
}

fn print_report(verb: &str, report: &UndoReport) {
    println!(
        "{verb} batch {} (job #{}): {} file(s)",
        report.batch_id, report.job_number, report.applied
    );
    for (path, error) in &report.failures {
        println!("failed: {} ({error})", path.display());
    }
}
