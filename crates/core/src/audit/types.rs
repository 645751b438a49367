//! Audit domain types.

use serde::{Deserialize, Serialize};

/// What an administrative action changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    /// Commission (fee) schedules.
    Commission,
    /// Account traits.
    Traits,
    /// Per-account limits.
    AccountLimits,
}

impl Subject {
    /// Returns the value stored in the `subject` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Commission => "commission",
            Self::Traits => "traits",
            Self::AccountLimits => "account_limits",
        }
    }
}

/// How the subject was changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// A new entry was created.
    Insert,
    /// An existing entry was modified.
    Update,
    /// An entry was removed.
    Delete,
}

impl Action {
    /// Returns the value stored in the `action` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// The administrator performing an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Public account address of the administrator.
    pub account_id: String,
}

/// An administrative action as reported by the admin API.
///
/// Fields are optional because descriptors are assembled from request
/// data; see [`AdminAction::is_valid`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminAction<M = serde_json::Value> {
    /// Who performed the action.
    pub actor: Option<Actor>,
    /// What was changed.
    pub subject: Option<Subject>,
    /// How it was changed.
    pub action: Option<Action>,
    /// Free-form payload describing the change.
    pub meta: M,
}

impl<M> AdminAction<M> {
    /// Creates a complete descriptor.
    pub fn new(actor: impl Into<String>, subject: Subject, action: Action, meta: M) -> Self {
        Self {
            actor: Some(Actor {
                account_id: actor.into(),
            }),
            subject: Some(subject),
            action: Some(action),
            meta,
        }
    }

    /// Returns the actor address, or an empty string when there is no actor.
    #[must_use]
    pub fn actor_address(&self) -> &str {
        self.actor.as_ref().map_or("", |a| a.account_id.as_str())
    }

    /// A descriptor is valid when it has an actor with a non-empty address,
    /// a subject and an action.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.actor.is_some()
            && !self.actor_address().is_empty()
            && self.subject.is_some()
            && self.action.is_some()
    }
}

/// Persistable projection of an admin action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// Actor address.
    pub actor: String,
    /// Subject column value.
    pub subject: String,
    /// Action column value.
    pub action: String,
    /// JSON-encoded meta payload; empty if it could not be encoded.
    pub meta: String,
}
