//! Time log journal records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One completed clock-in/out session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeLogEntry {
    pub job_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_folder: Option<String>,
    pub clock_in: DateTime<Utc>,
    pub clock_out: DateTime<Utc>,
    pub duration_minutes: f64,
    /// Day the session started on; keys the per-day journal file.
    pub date: NaiveDate,
    #[serde(default)]
    pub files_renamed: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
}
