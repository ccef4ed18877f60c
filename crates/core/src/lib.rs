#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod config;
pub mod job;
pub mod naming;
pub mod rename;
pub mod revision;
pub mod routing;
pub mod timelog;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
