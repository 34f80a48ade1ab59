//! Dataset subsystem
//!
//! Loads the candidates-by-features table once at startup and serves it
//! read-only for the process lifetime. Malformed input is fatal: the
//! process refuses to start rather than guess against a broken table.

mod errors;
mod loader;
mod types;

pub use errors::{DatasetError, DatasetErrorCode, DatasetResult};
pub use loader::{load_dataset, parse_dataset};
pub use types::{Candidate, Dataset};
