//! # attest-store
//!
//! Persistence for Attest audit logs.
//!
//! - [`table`]: reads and writes the delimited tables audit logs are stored as
//! - [`migrate`]: normalizes a loaded table to the canonical column set and
//!   produces typed [`LoggedRecord`](attest_core::entities::LoggedRecord)s
//! - [`log_store`]: path layout, prior-log lookup, and versioned writes that
//!   retire an existing file by renaming it before the new one is written
//!
//! Errors are reported as [`StoreError`]. A missing file and a corrupt file
//! are distinct variants: callers may treat the first as "no prior data" but
//! must surface the second.

pub mod error;
pub mod log_store;
pub mod migrate;
pub mod table;

pub use error::StoreError;
pub use log_store::{LogStore, PriorLog, load_log};
pub use migrate::{CANONICAL_COLUMNS, MigratedTable};
pub use table::RawTable;
