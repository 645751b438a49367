//! `SeaORM` entity definitions.

pub mod audit_logs;
