//! Allocation facts and their append-only-by-value collection.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AllocatableCapabilityId, Capability, ResourceId, TimeSlot};

/// One allocation fact: a capability instance locked for an interval.
///
/// The allocation id is derived from the allocatable capability id, so
/// allocating the same (resource, capability, slot) triple twice produces a
/// value-equal fact and the second add is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocatedCapability {
    /// Identifier of this allocation.
    pub allocated_capability_id: Uuid,
    /// The availability-ledger resource backing the allocation.
    pub resource_id: ResourceId,
    /// What was allocated.
    pub capability: Capability,
    /// The interval the capability is allocated for.
    pub slot: TimeSlot,
}

impl AllocatedCapability {
    /// Build the allocation fact for a capability instance over a slot.
    #[must_use]
    pub fn new(id: AllocatableCapabilityId, capability: Capability, slot: TimeSlot) -> Self {
        Self {
            allocated_capability_id: id.id(),
            resource_id: id.to_availability_resource_id(),
            capability,
            slot,
        }
    }
}

/// Ordered collection of allocation facts with value equality, used to detect
/// no-op adds and removes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocations {
    all: Vec<AllocatedCapability>,
}

impl Allocations {
    /// The empty collection.
    #[must_use]
    pub const fn none() -> Self {
        Self { all: Vec::new() }
    }

    /// Collection from explicit facts.
    #[must_use]
    pub fn of(all: Vec<AllocatedCapability>) -> Self {
        Self { all }
    }

    /// The contained facts in insertion order.
    #[must_use]
    pub fn all(&self) -> &[AllocatedCapability] {
        &self.all
    }

    /// Whether no capability is allocated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// New collection with `allocated` appended; unchanged (value-equal) when
    /// the same fact is already present.
    #[must_use]
    pub fn add(&self, allocated: AllocatedCapability) -> Self {
        if self.all.contains(&allocated) {
            return self.clone();
        }
        let mut all = self.all.clone();
        all.push(allocated);
        Self { all }
    }

    /// New collection without the fact matching exactly (id, slot); unchanged
    /// when nothing matched.
    #[must_use]
    pub fn remove(&self, allocated_capability_id: Uuid, slot: &TimeSlot) -> Self {
        let all = self
            .all
            .iter()
            .filter(|a| !(a.allocated_capability_id == allocated_capability_id && a.slot == *slot))
            .cloned()
            .collect();
        Self { all }
    }
}
