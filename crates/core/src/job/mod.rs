//! Job folder name parsing.
//!
//! Job folders follow the lenient convention
//! `<Job#>_<Customer>_<Company>_<SKU> x <Qty>_(<PO#>)`. Only the job
//! number is mandatory; every other field degrades to an empty default
//! because the operator can override them in the front end.

mod parser;
mod types;

pub use parser::{parse, suggest_folder_name};
pub use types::{JobInfo, JobParseError};
