use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the rename service reacts to an existing file at the target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Leave the source untouched and report the file as skipped.
    #[default]
    Skip,
    /// Bump the revision until an unused name is found (bounded retry).
    Increment,
    /// Replace the destination. The previous destination content is not
    /// recoverable; this is an explicit user choice, never a default.
    Overwrite,
}

impl FromStr for ConflictPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "increment" => Ok(Self::Increment),
            "overwrite" => Ok(Self::Overwrite),
            other => Err(format!(
                "unknown conflict policy '{other}' (expected skip, increment or overwrite)"
            )),
        }
    }
}

impl std::fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Skip => write!(f, "skip"),
            Self::Increment => write!(f, "increment"),
            Self::Overwrite => write!(f, "overwrite"),
        }
    }
}

/// Product lists and filename composition limits.
#[derive(Debug, Clone, Deserialize)]
pub struct NamingConfig {
    #[serde(default = "default_product_skus")]
    pub product_skus: Vec<String>,
    #[serde(default = "default_file_purposes")]
    pub file_purposes: Vec<String>,
    /// Revision options offered in the front end dropdown.
    #[serde(default = "default_revisions")]
    pub revisions: Vec<u32>,
    /// Truncate the artwork reference to this many characters.
    #[serde(default = "default_artwork_ref_max_len")]
    pub artwork_ref_max_len: usize,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            product_skus: default_product_skus(),
            file_purposes: default_file_purposes(),
            revisions: default_revisions(),
            artwork_ref_max_len: default_artwork_ref_max_len(),
        }
    }
}

fn default_product_skus() -> Vec<String> {
    ["MUG-11OZ", "MUG-15OZ", "TEE-S", "TEE-M", "TEE-L", "POSTER-24x36", "CUSTOM"]
        .map(String::from)
        .to_vec()
}

fn default_file_purposes() -> Vec<String> {
    ["SOURCE", "PROOF", "PRINT", "CUTFILE", "SUBLIMATION", "WEB"]
        .map(String::from)
        .to_vec()
}

fn default_revisions() -> Vec<u32> {
    vec![1, 2, 3, 4, 5]
}

pub fn default_artwork_ref_max_len() -> usize {
    64
}

/// Purpose token to job-subfolder mapping.
#[derive(Debug, Clone, Deserialize)]
pub struct RoutingConfig {
    /// Where unrecognized purpose tokens land.
    #[serde(default = "default_subfolder")]
    pub default_subfolder: String,
    #[serde(default = "default_routes")]
    pub routes: HashMap<String, String>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self { default_subfolder: default_subfolder(), routes: default_routes() }
    }
}

fn default_subfolder() -> String {
    crate::routing::SUBFOLDER_ART_SETUPS.to_string()
}

fn default_routes() -> HashMap<String, String> {
    use crate::routing::{SUBFOLDER_ART_SETUPS, SUBFOLDER_PROOFS};
    [
        ("SOURCE", SUBFOLDER_ART_SETUPS),
        ("PROOF", SUBFOLDER_PROOFS),
        ("PRINT", SUBFOLDER_ART_SETUPS),
        ("CUTFILE", SUBFOLDER_ART_SETUPS),
        ("SUBLIMATION", SUBFOLDER_ART_SETUPS),
        ("WEB", SUBFOLDER_ART_SETUPS),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// Rename service behavior.
#[derive(Debug, Clone, Deserialize)]
pub struct RenameConfig {
    /// Default conflict policy; the request can override it per batch.
    #[serde(default)]
    pub on_conflict: ConflictPolicy,
    /// Undo history depth before old batches are dropped.
    #[serde(default = "default_max_history")]
    pub max_history: usize,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self { on_conflict: ConflictPolicy::default(), max_history: default_max_history() }
    }
}

fn default_max_history() -> usize {
    50
}

/// Elapsed-time warning for the work session timer.
#[derive(Debug, Clone, Deserialize)]
pub struct TimerConfig {
    #[serde(default = "default_warning_minutes")]
    pub warning_minutes: u64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self { warning_minutes: default_warning_minutes() }
    }
}

fn default_warning_minutes() -> u64 {
    30
}

/// Job folder discovery.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct JobsConfig {
    /// Base directory the job folders live under.
    #[serde(default)]
    pub base_directory: Option<String>,
}

/// Time log journal location.
#[derive(Debug, Clone, Deserialize)]
pub struct TimelogConfig {
    #[serde(default = "default_timelog_directory")]
    pub directory: String,
}

impl Default for TimelogConfig {
    fn default() -> Self {
        Self { directory: default_timelog_directory() }
    }
}

fn default_timelog_directory() -> String {
    "time_logs".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// The full resolved configuration, immutable after startup.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub naming: NamingConfig,
    #[serde(default)]
    pub routing: RoutingConfig,
    #[serde(default)]
    pub rename: RenameConfig,
    #[serde(default)]
    pub timer: TimerConfig,
    #[serde(default)]
    pub jobs: JobsConfig,
    #[serde(default)]
    pub timelog: TimelogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}
