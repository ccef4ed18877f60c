//! Append-only time log journal, one file per day.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

use super::types::TimeLogEntry;

#[derive(Debug, Error)]
pub enum TimeLogError {
    #[error("failed to write time log: {0}")]
    WriteError(#[from] std::io::Error),

    #[error("failed to serialize entry: {0}")]
    SerializeError(#[from] serde_json::Error),
}

type Result<T> = std::result::Result<T, TimeLogError>;

/// Appends session records to `timelog_<YYYY-MM-DD>.jsonl` files under the
/// configured directory. Strictly append-only: prior days' files are
/// never rewritten.
pub struct TimeLogService {
    log_dir: PathBuf,
}

impl TimeLogService {
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self { log_dir: log_dir.into() }
    }

    /// Append one completed session to its day's journal file.
    pub fn append(&self, entry: &TimeLogEntry) -> Result<()> {
        fs::create_dir_all(&self.log_dir)?;

        let path = self.day_file(entry.date);
        let json = serde_json::to_string(entry)?;

        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        writeln!(file, "{json}")?;
        debug!(path = %path.display(), job = %entry.job_number, "appended time log entry");
        Ok(())
    }

    /// Read back one day's entries. Blank and unparseable lines are
    /// skipped; a missing file is an empty day.
    pub fn read_day(&self, date: NaiveDate) -> Result<Vec<TimeLogEntry>> {
        let path = self.day_file(date);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&path)?);
        let mut entries = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            if let Ok(entry) = serde_json::from_str::<TimeLogEntry>(&line) {
                entries.push(entry);
            }
        }
        Ok(entries)
    }

    pub fn day_file(&self, date: NaiveDate) -> PathBuf {
        self.log_dir.join(format!("timelog_{}.jsonl", date.format("%Y-%m-%d")))
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::tempdir;

    fn entry(date: NaiveDate, job: &str) -> TimeLogEntry {
        TimeLogEntry {
            job_number: job.to_string(),
            job_folder: None,
            clock_in: Utc::now(),
            clock_out: Utc::now(),
            duration_minutes: 5.0,
            date,
            files_renamed: 2,
            notes: String::new(),
        }
    }

    #[test]
    fn appends_to_per_day_file() {
        let tmp = tempdir().unwrap();
        let svc = TimeLogService::new(tmp.path());
        let day = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();

        svc.append(&entry(day, "1")).unwrap();
        svc.append(&entry(day, "2")).unwrap();

        let path = tmp.path().join("timelog_2026-08-23.jsonl");
        assert!(path.is_file());
        assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 2);
    }

    #[test]
    fn different_days_go_to_different_files() {
        let tmp = tempdir().unwrap();
        let svc = TimeLogService::new(tmp.path());

        svc.append(&entry(NaiveDate::from_ymd_opt(2026, 8, 22).unwrap(), "1")).unwrap();
        svc.append(&entry(NaiveDate::from_ymd_opt(2026, 8, 23).unwrap(), "2")).unwrap();

        assert!(tmp.path().join("timelog_2026-08-22.jsonl").is_file());
        assert!(tmp.path().join("timelog_2026-08-23.jsonl").is_file());
    }

    #[test]
    fn read_day_round_trips_entries() {
        let tmp = tempdir().unwrap();
        let svc = TimeLogService::new(tmp.path());
        let day = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();

        svc.append(&entry(day, "12345")).unwrap();
        let entries = svc.read_day(day).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].job_number, "12345");
        assert_eq!(entries[0].files_renamed, 2);
    }

    #[test]
    fn missing_day_is_empty() {
        let tmp = tempdir().unwrap();
        let svc = TimeLogService::new(tmp.path());
        let day = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert!(svc.read_day(day).unwrap().is_empty());
    }
}
