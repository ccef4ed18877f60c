//! Purpose-to-subfolder routing inside a job folder.
//!
//! Every job folder carries the same five subfolders; the routing table
//! decides which one a dropped file lands in based on its declared
//! purpose. Unrecognized purposes fall back to the configured default so
//! an odd token never fails a batch.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use tracing::warn;

use crate::config::RoutingConfig;

pub const SUBFOLDER_THEIR_POS: &str = "1_TheirPOs";
pub const SUBFOLDER_OUR_DOCS: &str = "2_OurDocs";
pub const SUBFOLDER_PROVIDED_ART: &str = "3_ProvidedArt";
pub const SUBFOLDER_ART_SETUPS: &str = "4_ArtSetups";
pub const SUBFOLDER_PROOFS: &str = "5_VirtualProofs";

/// The fixed subfolders every job folder is expected to contain.
pub const JOB_SUBFOLDERS: [&str; 5] = [
    SUBFOLDER_THEIR_POS,
    SUBFOLDER_OUR_DOCS,
    SUBFOLDER_PROVIDED_ART,
    SUBFOLDER_ART_SETUPS,
    SUBFOLDER_PROOFS,
];

/// Immutable purpose-to-subfolder mapping, built once from configuration.
#[derive(Debug, Clone)]
pub struct RoutingTable {
    routes: HashMap<String, String>,
    default_subfolder: String,
}

impl RoutingTable {
    /// Build the table from configuration. Purpose tokens are keyed
    /// case-insensitively. A route that targets a directory outside the
    /// five standard subfolders is kept but logged, since it usually
    /// means a typo in the config file.
    pub fn from_config(cfg: &RoutingConfig) -> Self {
        let mut routes = HashMap::with_capacity(cfg.routes.len());
        for (purpose, subfolder) in &cfg.routes {
            if !JOB_SUBFOLDERS.contains(&subfolder.as_str()) {
                warn!(%purpose, %subfolder, "route targets a non-standard subfolder");
            }
            routes.insert(purpose.to_uppercase(), subfolder.clone());
        }
        Self { routes, default_subfolder: cfg.default_subfolder.clone() }
    }

    /// Resolve a purpose token to its relative subfolder path.
    ///
    /// Pure function of configuration + purpose; unknown tokens resolve
    /// to the default subfolder.
    pub fn resolve(&self, purpose: &str) -> &str {
        self.routes
            .get(&purpose.to_uppercase())
            .map_or(self.default_subfolder.as_str(), String::as_str)
    }

    /// True when no route and no default are usable.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty() && self.default_subfolder.is_empty()
    }
}

/// Create the five standard subfolders under a job folder.
///
/// Called on job selection so routing targets always exist.
pub fn ensure_job_subfolders(job_folder: &Path) -> io::Result<()> {
    for sub in JOB_SUBFOLDERS {
        fs::create_dir_all(job_folder.join(sub))?;
    }
    Ok(())
}
