//! Configuration loading and resolution.
//!
//! Loaded once at startup and passed by reference to the components that
//! need it; changes require a restart. Every field falls back to its
//! built-in default independently, so a sparse or outdated config file
//! never blocks the tool.

mod loader;
mod types;

pub use loader::{default_config_path, expand_path, load, load_file, ConfigError};
pub use types::{
    default_artwork_ref_max_len, Config, ConflictPolicy, JobsConfig, LoggingConfig,
    NamingConfig, RenameConfig, RoutingConfig, TimelogConfig, TimerConfig,
};
