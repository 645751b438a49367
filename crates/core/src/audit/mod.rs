//! Audit trail for administrative mutations.
//!
//! Admin endpoints describe each mutation as an [`AdminAction`]. Valid
//! actions are shaped into an [`AuditRecord`], the row appended to the audit
//! history. Records are never updated or deleted.

pub mod error;
pub mod shaper;
pub mod types;

pub use error::AuditError;
pub use shaper::shape;
pub use types::{Action, Actor, AdminAction, AuditRecord, Subject};
