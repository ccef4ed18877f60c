mod cmd;
mod logging;
mod state;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "artdrop", version, about = "Artwork file renaming for print job folders")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print the resolved settings
    Doctor,

    /// Parse a job folder name and print the extracted fields
    Parse(ParseArgs),

    /// Rename and route files into a job folder
    Rename(RenameArgs),

    /// Undo the most recent rename batch
    Undo,

    /// Redo the most recently undone batch
    Redo,

    /// Clock in to start tracking time against a job folder
    ClockIn(ClockInArgs),

    /// Clock out and append the session to the time log
    ClockOut(ClockOutArgs),

    /// Show session and history status
    Status,
}

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Job folder name, e.g. "12345_JohnDoe_AcmeCorp_MUG-11OZ x 100_(PO-98765)"
    pub folder_name: String,
}

#[derive(Debug, Args)]
pub struct RenameArgs {
    /// Path to the job folder the files are routed into
    #[arg(long)]
    pub job_folder: PathBuf,

    /// Product SKU embedded in the new names
    #[arg(long)]
    pub sku: String,

    /// Artwork reference (free text, sanitized)
    #[arg(long)]
    pub art_ref: String,

    /// File purpose token (SOURCE, PROOF, PRINT, ...)
    #[arg(long)]
    pub purpose: String,

    /// Pin a revision instead of auto-detecting the next one
    #[arg(long)]
    pub revision: Option<u32>,

    /// Conflict policy: skip, increment or overwrite (default from config)
    #[arg(long)]
    pub policy: Option<String>,

    /// Show the planned targets without touching any file
    #[arg(long)]
    pub dry_run: bool,

    /// Files to rename
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ClockInArgs {
    /// Path to the job folder being worked on
    #[arg(long)]
    pub job_folder: PathBuf,
}

#[derive(Debug, Args)]
pub struct ClockOutArgs {
    /// Free-text notes for this session
    #[arg(long, default_value = "")]
    pub notes: String,
}

fn main() {
    let cli = Cli::parse();

    let config = artdrop_core::config::load(cli.config.as_deref());
    logging::init(&config);

    match cli.command {
        Commands::Doctor => cmd::doctor::run(cli.config.as_deref(), &config),
        Commands::Parse(args) => cmd::parse::run(&args),
        Commands::Rename(args) => cmd::rename::run(&config, &args),
        Commands::Undo => cmd::undo::run_undo(),
        Commands::Redo => cmd::undo::run_redo(),
        Commands::ClockIn(args) => cmd::clock::run_clock_in(&config, &args),
        Commands::ClockOut(args) => cmd::clock::run_clock_out(&config, &args),
        Commands::Status => cmd::clock::run_status(&config),
    }
}
