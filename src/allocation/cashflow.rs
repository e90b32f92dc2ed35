//! Project earnings and their recalculation fact.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::ProjectId;

/// Project earnings in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Earnings(i64);

impl Earnings {
    /// Earnings of a given amount.
    #[must_use]
    pub const fn of(value: i64) -> Self {
        Self(value)
    }

    /// The amount in currency units.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Strictly-greater comparison used by the risk threshold check.
    #[must_use]
    pub const fn greater_than(&self, other: Self) -> bool {
        self.0 > other.0
    }
}

/// A project's earnings were recalculated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsRecalculated {
    /// The project whose earnings changed.
    pub project_id: ProjectId,
    /// The new earnings value.
    pub earnings: Earnings,
    /// When the recalculation happened.
    pub occurred_at: DateTime<Utc>,
}
