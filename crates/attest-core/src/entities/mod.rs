//! Entity structs for the audit record lifecycle.
//!
//! All record structs derive `Serialize`, `Deserialize`, and `JsonSchema`
//! so the CLI can exchange them as JSON documents with published schemas.

mod control;
mod log;
mod record;

pub use control::Control;
pub use log::AuditLog;
pub use record::{AuditRecord, DraftRecord, LoggedRecord};
