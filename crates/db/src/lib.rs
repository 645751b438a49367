//! History database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions
//! - Reusable query filters
//! - Repository abstractions for data access

pub mod entities;
pub mod filters;
pub mod repositories;

pub use filters::ClosedAtRange;
pub use repositories::{AuditLogError, AuditLogRepository};
