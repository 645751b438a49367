//! Reusable query filters.

use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, Condition, QueryFilter};
use serde::{Deserialize, Serialize};

/// Optional time bounds on a `closed_at`-style column, both inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosedAtRange {
    /// Earliest accepted time.
    pub start: Option<DateTime<Utc>>,
    /// Latest accepted time.
    pub end: Option<DateTime<Utc>>,
}

impl ClosedAtRange {
    /// Creates a range from optional bounds.
    #[must_use]
    pub const fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    /// Returns true if neither bound is set.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Builds `column >= start AND column <= end`, keeping only the bounds that are set.
    pub fn condition<C: ColumnTrait>(&self, column: C) -> Condition {
        let mut condition = Condition::all();
        if let Some(start) = self.start {
            condition = condition.add(column.gte(start));
        }
        if let Some(end) = self.end {
            condition = condition.add(column.lte(end));
        }
        condition
    }

    /// Restricts `query` to the range. An unbounded range leaves the query unchanged.
    #[must_use]
    pub fn apply<Q: QueryFilter, C: ColumnTrait>(&self, query: Q, column: C) -> Q {
        if self.is_unbounded() {
            return query;
        }
        query.filter(self.condition(column))
    }
}
