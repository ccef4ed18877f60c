//! Doctor command: validate configuration and print the resolved settings.

use std::path::Path;

use artdrop_core::config::{self, Config};
use artdrop_core::rename::RenameService;

pub fn run(config_path: Option<&Path>, config: &Config) {
    // Surface parse errors here even though normal startup falls back to
    // defaults silently.
    if let Some(path) = config_path {
        if let Err(e) = config::load_file(path) {
            eprintln!("Error in config file: {e}");
            std::process::exit(1);
        }
    }

    if let Err(e) = RenameService::new(config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    println!("OK   artdrop doctor");
    println!(
        "config: {}",
        config_path
            .map_or_else(|| config::default_config_path().display().to_string(), |p| p
                .display()
                .to_string())
    );
    println!("skus: {}", config.naming.product_skus.join(", "));
    println!("purposes: {}", config.naming.file_purposes.join(", "));
    println!("default_subfolder: {}", config.routing.default_subfolder);
    println!("on_conflict: {}", config.rename.on_conflict);
    println!("warning_minutes: {}", config.timer.warning_minutes);
    println!("timelog_directory: {}", config.timelog.directory);
    if let Some(ref base) = config.jobs.base_directory {
        println!("jobs_base_directory: {}", config::expand_path(base).display());
    }
}
