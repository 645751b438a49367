//! Audit log repository: append-only storage for admin action records.

use horizon_core::audit::{AdminAction, AuditError, AuditRecord, shape};
use horizon_shared::AppError;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect, Set,
};
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::entities::audit_logs;
use crate::filters::ClosedAtRange;

/// Error types for audit log operations.
#[derive(Debug, thiserror::Error)]
pub enum AuditLogError {
    /// The admin action could not be shaped into a record.
    #[error(transparent)]
    Audit(#[from] AuditError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<AuditLogError> for AppError {
    fn from(err: AuditLogError) -> Self {
        match err {
            AuditLogError::Audit(e) => e.into(),
            AuditLogError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Audit log repository. Records are only ever inserted.
#[derive(Debug, Clone)]
pub struct AuditLogRepository {
    db: DatabaseConnection,
}

impl AuditLogRepository {
    /// Creates a new audit log repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a shaped record to the audit history.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn append(&self, record: &AuditRecord) -> Result<audit_logs::Model, DbErr> {
        let entry = audit_logs::ActiveModel {
            id: Set(Uuid::now_v7()),
            actor: Set(record.actor.clone()),
            subject: Set(record.subject.clone()),
            action: Set(record.action.clone()),
            meta: Set(record.meta.clone()),
            created_at: Set(chrono::Utc::now().into()),
        };

        entry.insert(&self.db).await
    }

    /// Validates an admin action, shapes it and appends the record.
    ///
    /// # Errors
    ///
    /// Returns `Audit` for an invalid descriptor (nothing is stored) or
    /// `Database` if the insert fails.
    pub async fn record<M: Serialize>(
        &self,
        action: &AdminAction<M>,
    ) -> Result<audit_logs::Model, AuditLogError> {
        let record = shape(action)?;

        match self.append(&record).await {
            Ok(model) => {
                info!(
                    audit_id = %model.id,
                    actor = %model.actor,
                    subject = %model.subject,
                    action = %model.action,
                    "Audit record appended"
                );
                Ok(model)
            }
            Err(e) => {
                error!(error = %e, actor = %record.actor, "Failed to append audit record");
                Err(e.into())
            }
        }
    }

    /// Lists records created within `range`, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        range: &ClosedAtRange,
        limit: u64,
    ) -> Result<Vec<audit_logs::Model>, DbErr> {
        range
            .apply(audit_logs::Entity::find(), audit_logs::Column::CreatedAt)
            .order_by_desc(audit_logs::Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
    }
}
