//! A single block row of a resource's calendar.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{Owner, ResourceId, TimeSlot};

/// Status of one ledger row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceStatus {
    /// The block is free to be taken.
    Available,
    /// The block is locked by its owner.
    Blocked,
    /// The block was withdrawn from scheduling by its owner.
    Disabled,
}

/// One row of the availability ledger: a single block of one resource's
/// calendar, with its status and current owner.
///
/// Status and owner stay consistent: an available row carries [`Owner::none`],
/// a blocked or disabled row carries the party that performed the transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceAvailability {
    id: Uuid,
    resource_id: ResourceId,
    slot: TimeSlot,
    owner: Owner,
    status: ResourceStatus,
}

impl ResourceAvailability {
    /// Create a fresh available row for one block of a resource's calendar.
    #[must_use]
    pub fn new(resource_id: ResourceId, slot: TimeSlot) -> Self {
        Self {
            id: Uuid::new_v4(),
            resource_id,
            slot,
            owner: Owner::none(),
            status: ResourceStatus::Available,
        }
    }

    /// Row identifier.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// The resource this row belongs to.
    #[must_use]
    pub const fn resource_id(&self) -> ResourceId {
        self.resource_id
    }

    /// The single block this row covers.
    #[must_use]
    pub const fn slot(&self) -> TimeSlot {
        self.slot
    }

    /// Current owner; [`Owner::none`] while available.
    #[must_use]
    pub const fn owner(&self) -> Owner {
        self.owner
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> ResourceStatus {
        self.status
    }

    /// Take the block for `requester`. Fails unless the row is available.
    pub fn block(&mut self, requester: Owner) -> bool {
        if self.status != ResourceStatus::Available {
            return false;
        }
        self.owner = requester;
        self.status = ResourceStatus::Blocked;
        true
    }

    /// Give the block back. Fails unless `requester` is the current owner and
    /// the row is not disabled.
    pub fn release(&mut self, requester: Owner) -> bool {
        if self.owner != requester || self.status == ResourceStatus::Disabled {
            return false;
        }
        self.owner = Owner::none();
        self.status = ResourceStatus::Available;
        true
    }

    /// Withdraw the block from scheduling. Succeeds regardless of prior
    /// status; `requester` becomes the recorded owner.
    pub fn disable(&mut self, requester: Owner) -> bool {
        self.owner = requester;
        self.status = ResourceStatus::Disabled;
        true
    }
}
