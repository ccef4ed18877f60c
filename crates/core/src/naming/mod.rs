//! Canonical artwork filename grammar.
//!
//! The one compatibility-critical format in the system:
//! `<Job#>_<SKU>_(<ArtRef>)_<Purpose>_<Rev>.<ext>`: five
//! underscore-delimited groups where group 3 is parenthesized, the job
//! number is a digit run, the revision a positive integer, and the
//! extension keeps its original case.

mod builder;
mod sanitize;
mod types;

pub use builder::FilenameBuilder;
pub use sanitize::sanitize_component;
pub use types::{NameParseError, NamingFields};
