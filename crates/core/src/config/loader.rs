use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use thiserror::Error;
use tracing::{info, warn};

use super::types::Config;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),
}

/// Load the configuration, falling back to built-in defaults.
///
/// A missing file is normal (first run); an unreadable or malformed file
/// is logged and replaced by the defaults rather than aborting. Unknown
/// fields inside the file are ignored and missing fields take their own
/// defaults, so partial configs stay valid across versions.
pub fn load(config_path: Option<&Path>) -> Config {
    let path = config_path.map_or_else(default_config_path, Path::to_path_buf);

    if !path.exists() {
        info!(path = %path.display(), "no config file, using built-in defaults");
        return Config::default();
    }

    match load_file(&path) {
        Ok(cfg) => {
            info!(path = %path.display(), "loaded config");
            cfg
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring bad config, using defaults");
            Config::default()
        }
    }
}

/// Strict variant of [`load`] for callers that want to surface the error
/// (e.g. `doctor`).
pub fn load_file(path: &Path) -> Result<Config, ConfigError> {
    let s = fs::read_to_string(path)
        .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;
    toml::from_str(&s).map_err(|e| ConfigError::ParseError(path.display().to_string(), e))
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("artdrop").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("artdrop").join("config.toml")
}

/// Expand `~` and environment variables in a configured path.
pub fn expand_path(input: &str) -> PathBuf {
    match shellexpand::full(input) {
        Ok(expanded) => PathBuf::from(expanded.to_string()),
        Err(_) => PathBuf::from(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConflictPolicy;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = load(Some(Path::new("/nonexistent/artdrop.toml")));
        assert_eq!(cfg.timer.warning_minutes, 30);
        assert_eq!(cfg.rename.max_history, 50);
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "this is not = = valid toml [[").unwrap();

        let cfg = load(Some(f.path()));
        assert_eq!(cfg.timelog.directory, "time_logs");
    }

    #[test]
    fn fields_fall_back_independently() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(
            f,
            r#"
[timer]
warning_minutes = 45

[rename]
on_conflict = "increment"
"#
        )
        .unwrap();

        let cfg = load(Some(f.path()));
        // Overridden fields.
        assert_eq!(cfg.timer.warning_minutes, 45);
        assert_eq!(cfg.rename.on_conflict, ConflictPolicy::Increment);
        // Everything else keeps its default.
        assert_eq!(cfg.rename.max_history, 50);
        assert!(cfg.naming.file_purposes.contains(&"PROOF".to_string()));
        assert_eq!(cfg.routing.default_subfolder, "4_ArtSetups");
    }

    #[test]
    fn expand_path_passes_plain_paths_through() {
        assert_eq!(expand_path("/tmp/jobs"), PathBuf::from("/tmp/jobs"));
    }
}
