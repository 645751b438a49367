//! `SeaORM` Entity for audit_logs table.

use horizon_core::audit::AuditRecord;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "audit_logs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub actor: String,
    pub subject: String,
    pub action: String,
    #[sea_orm(column_type = "Text")]
    pub meta: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for AuditRecord {
    fn from(model: Model) -> Self {
        Self {
            actor: model.actor,
            subject: model.subject,
            action: model.action,
            meta: model.meta,
        }
    }
}
