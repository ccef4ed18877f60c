//! Persisted per-user state so undo/redo and the session clock survive
//! across invocations of a short-lived CLI process.

use std::path::{Path, PathBuf};
use std::{env, fs};

use serde::{Deserialize, Serialize};
use tracing::warn;

use artdrop_core::rename::UndoManager;
use artdrop_core::timelog::SessionState;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub undo: UndoManager,
    #[serde(default)]
    pub session: SessionState,
}

pub fn state_path() -> PathBuf {
    if let Ok(dir) = env::var("ARTDROP_DATA_HOME") {
        return Path::new(&dir).join("artdrop").join("state.json");
    }
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("artdrop").join("state.json")
}

/// Load the state file; a missing or corrupt file resets to empty state.
pub fn load() -> AppState {
    let path = state_path();
    match fs::read_to_string(&path) {
        Ok(s) => serde_json::from_str(&s).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "corrupt state file, resetting");
            AppState::default()
        }),
        Err(_) => AppState::default(),
    }
}

pub fn save(state: &AppState) {
    let path = state_path();
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("Failed to create state directory {}: {}", parent.display(), e);
            std::process::exit(1);
        }
    }
    match serde_json::to_string_pretty(state) {
        Ok(json) => {
            if let Err(e) = fs::write(&path, json) {
                eprintln!("Failed to write state file {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Failed to serialize state: {e}");
            std::process::exit(1);
        }
    }
}
