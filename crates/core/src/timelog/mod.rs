//! Work session tracking and the append-only time log journal.

mod service;
mod session;
mod types;

pub use service::{TimeLogError, TimeLogService};
pub use session::{SessionError, SessionState};
pub use types::TimeLogEntry;
