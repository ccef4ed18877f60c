//! Clock-in/out and session status.

use chrono::Utc;

use artdrop_core::config::{expand_path, Config};
use artdrop_core::job;
use artdrop_core::timelog::TimeLogService;

use crate::{state, ClockInArgs, ClockOutArgs};

pub fn run_clock_in(config: &Config, args: &ClockInArgs) {
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

    let mut app = state::load();
    app.session.warning_minutes = config.timer.warning_minutes;

    match app.session.clock_in(&job.job_number, Some(args.job_folder.clone())) {
        Ok(()) => {
            state::save(&app);
            println!("Clocked in to job #{} at {}", job.job_number, Utc::now().format("%H:%M"));
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

pub fn run_clock_out(config: &Config, args: &ClockOutArgs) {
    let mut app = state::load();

    let entry = match app.session.clock_out(&args.notes) {
        Ok(entry) => entry,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let service = TimeLogService::new(expand_path(&config.timelog.directory));
    if let Err(e) = service.append(&entry) {
        eprintln!("Error writing time log: {e}");
        std::process::exit(1);
    }
    state::save(&app);

    println!(
        "Clocked out of job #{}: {:.1} minutes, {} file(s) renamed",
        entry.job_number, entry.duration_minutes, entry.files_renamed
    );
    println!("logged to: {}", service.day_file(entry.date).display());
}

pub fn run_status(config: &Config) {
    let app = state::load();
    let now = Utc::now();

    if app.session.is_clocked_in() {
        let elapsed = app.session.elapsed(now);
        let minutes = elapsed.num_minutes();
        println!(
            "clocked in: job #{} ({}h{:02}m elapsed)",
            app.session.job_number.as_deref().unwrap_or("?"),
            minutes / 60,
            minutes % 60
        );
        if app.session.warning_due(now) {
            println!(
                "warning: session has run past {} minutes",
                app.session.warning_minutes
            );
        }
    } else {
        println!("clocked out");
    }

    println!("undo history: {} batch(es)", app.undo.undo_depth());
    println!("redo queue: {} batch(es)", app.undo.redo_depth());
    println!("on_conflict: {}", config.rename.on_conflict);
}
