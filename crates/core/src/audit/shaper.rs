//! Shaping admin actions into audit records.

use serde::Serialize;
use tracing::error;

use super::error::AuditError;
use super::types::{AdminAction, AuditRecord};

impl<M: Serialize> AdminAction<M> {
    /// Renders the action as an audit record.
    ///
    /// A meta payload that cannot be encoded is logged and stored as an
    /// empty string; the record itself is always produced.
    #[must_use]
    pub fn to_audit_record(&self) -> AuditRecord {
        let meta = match serde_json::to_string(&self.meta) {
            Ok(meta) => meta,
            Err(e) => {
                let err = AuditError::from(e);
                error!(
                    error = %err,
                    actor = %self.actor_address(),
                    subject = ?self.subject,
                    action = ?self.action,
                    "Failed to serialize audit meta, storing empty meta"
                );
                String::new()
            }
        };

        AuditRecord {
            actor: self.actor_address().to_string(),
            subject: self.subject.map(|s| s.as_str().to_string()).unwrap_or_default(),
            action: self.action.map(|a| a.as_str().to_string()).unwrap_or_default(),
            meta,
        }
    }
}

/// Validates an admin action and shapes it into an audit record.
///
/// # Errors
///
/// Returns `InvalidDescriptor` if the action has no actor address, subject
/// or action; no record is produced for it.
pub fn shape<M: Serialize>(action: &AdminAction<M>) -> Result<AuditRecord, AuditError> {
    if !action.is_valid() {
        let missing: Vec<&str> = [
            ("actor", action.actor_address().is_empty()),
            ("subject", action.subject.is_none()),
            ("action", action.action.is_none()),
        ]
        .into_iter()
        .filter_map(|(field, missing)| missing.then_some(field))
        .collect();
        return Err(AuditError::InvalidDescriptor(format!(
            "missing {}",
            missing.join(", ")
        )));
    }

    Ok(action.to_audit_record())
}
