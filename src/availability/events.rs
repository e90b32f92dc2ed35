//! Facts emitted when ledger ownership changes hands.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{Owner, ResourceId};

/// A resource's blocks were taken away from their previous owners, e.g. the
/// resource was disabled or reassigned out from under running projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceTakenOver {
    /// The resource whose blocks changed hands.
    pub resource_id: ResourceId,
    /// Owners that held blocks of the resource before the takeover.
    pub previous_owners: Vec<Owner>,
    /// When the takeover happened.
    pub occurred_at: DateTime<Utc>,
}
