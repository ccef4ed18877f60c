//! In-memory state of the current work session.

use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use super::types::TimeLogEntry;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("already clocked in")]
    AlreadyClockedIn,

    #[error("not clocked in")]
    NotClockedIn,
}

/// Created at app start, mutated by clock-in/out and job selection,
/// discarded at exit once the time log entry is persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub job_folder: Option<PathBuf>,
    pub job_number: Option<String>,
    pub clock_in: Option<DateTime<Utc>>,
    pub files_renamed: u32,
    /// Elapsed-time warning threshold.
    pub warning_minutes: u64,
}

impl SessionState {
    pub fn new(warning_minutes: u64) -> Self {
        Self { warning_minutes, ..Self::default() }
    }

    pub fn is_clocked_in(&self) -> bool {
        self.clock_in.is_some()
    }

    /// Start tracking time against a job.
    pub fn clock_in(
        &mut self,
        job_number: &str,
        job_folder: Option<PathBuf>,
    ) -> Result<(), SessionError> {
        if self.is_clocked_in() {
            return Err(SessionError::AlreadyClockedIn);
        }
        self.clock_in = Some(Utc::now());
        self.job_number = Some(job_number.to_string());
        self.job_folder = job_folder;
        self.files_renamed = 0;
        info!(job = job_number, "clocked in");
        Ok(())
    }

    /// Stop tracking and produce the journal entry for this session.
    pub fn clock_out(&mut self, notes: &str) -> Result<TimeLogEntry, SessionError> {
        let clock_in = self.clock_in.take().ok_or(SessionError::NotClockedIn)?;
        let clock_out = Utc::now();
        let duration = clock_out - clock_in;
        #[allow(clippy::cast_precision_loss)]
        let duration_minutes = duration.num_seconds() as f64 / 60.0;

        let entry = TimeLogEntry {
            job_number: self.job_number.take().unwrap_or_default(),
            job_folder: self
                .job_folder
                .take()
                .map(|p| p.display().to_string()),
            clock_in,
            clock_out,
            duration_minutes,
            date: clock_in.date_naive(),
            files_renamed: std::mem::take(&mut self.files_renamed),
            notes: notes.to_string(),
        };
        info!(job = %entry.job_number, minutes = entry.duration_minutes, "clocked out");
        Ok(entry)
    }

    pub fn increment_files_renamed(&mut self, count: u32) {
        if self.is_clocked_in() {
            self.files_renamed += count;
        }
    }

    /// Wall-clock time since clock-in; zero when not clocked in.
    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        self.clock_in.map_or_else(Duration::zero, |t| now - t)
    }

    /// True once the session has run past the warning threshold. Purely
    /// informational: drives the timer flash in the front end, never the
    /// rename logic.
    pub fn warning_due(&self, now: DateTime<Utc>) -> bool {
        self.is_clocked_in()
            && self.elapsed(now)
                >= Duration::minutes(i64::try_from(self.warning_minutes).unwrap_or(i64::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_in_twice_is_rejected() {
        let mut s = SessionState::new(30);
        s.clock_in("12345", None).unwrap();
        assert_eq!(s.clock_in("12345", None), Err(SessionError::AlreadyClockedIn));
    }

    #[test]
    fn clock_out_without_clock_in_is_rejected() {
        let mut s = SessionState::new(30);
        assert!(matches!(s.clock_out(""), Err(SessionError::NotClockedIn)));
    }

    #[test]
    fn clock_out_produces_an_entry_and_resets() {
        let mut s = SessionState::new(30);
        s.clock_in("12345", Some(PathBuf::from("/jobs/12345"))).unwrap();
        s.increment_files_renamed(3);

        let entry = s.clock_out("proofing").unwrap();
        assert_eq!(entry.job_number, "12345");
        assert_eq!(entry.job_folder.as_deref(), Some("/jobs/12345"));
        assert_eq!(entry.files_renamed, 3);
        assert_eq!(entry.notes, "proofing");
        assert!(entry.duration_minutes >= 0.0);

        assert!(!s.is_clocked_in());
        assert_eq!(s.files_renamed, 0);
    }

    #[test]
    fn files_renamed_only_counts_while_clocked_in() {
        let mut s = SessionState::new(30);
        s.increment_files_renamed(5);
        assert_eq!(s.files_renamed, 0);
    }

    #[test]
    fn warning_fires_after_threshold() {
        let mut s = SessionState::new(30);
        assert!(!s.warning_due(Utc::now()));

        s.clock_in("1", None).unwrap();
        let now = Utc::now();
        assert!(!s.warning_due(now));
        assert!(s.warning_due(now + Duration::minutes(31)));
    }
}
