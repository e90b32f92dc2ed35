//! Outstanding capability demands and the missing-demand computation.

use serde::{Deserialize, Serialize};

use crate::allocation::capabilities::Allocations;
use crate::core::{Capability, TimeSlot};

/// A single capability requirement, optionally bound to an interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demand {
    /// The required capability.
    pub capability: Capability,
    /// The interval the capability is needed for; `None` means any interval.
    pub slot: Option<TimeSlot>,
}

impl Demand {
    /// Demand for a capability over a specific interval.
    #[must_use]
    pub const fn new(capability: Capability, slot: TimeSlot) -> Self {
        Self {
            capability,
            slot: Some(slot),
        }
    }

    /// Demand for a capability with no time bound.
    #[must_use]
    pub const fn for_capability(capability: Capability) -> Self {
        Self {
            capability,
            slot: None,
        }
    }

    fn satisfied_by(&self, allocations: &Allocations) -> bool {
        allocations.all().iter().any(|allocated| {
            allocated.capability == self.capability
                && self
                    .slot
                    .as_ref()
                    .is_none_or(|slot| slot.within(&allocated.slot))
        })
    }
}

/// Collection of demands; the empty value is the identity for merging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demands {
    all: Vec<Demand>,
}

impl Demands {
    /// No demands.
    #[must_use]
    pub const fn none() -> Self {
        Self { all: Vec::new() }
    }

    /// Collection from explicit demands.
    #[must_use]
    pub fn of(all: Vec<Demand>) -> Self {
        Self { all }
    }

    /// The contained demands.
    #[must_use]
    pub fn all(&self) -> &[Demand] {
        &self.all
    }

    /// Whether there are no demands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Additive merge; duplicates by value are kept as given.
    #[must_use]
    pub fn with_new(&self, new_demands: &Self) -> Self {
        let mut all = self.all.clone();
        all.extend(new_demands.all.iter().cloned());
        Self { all }
    }

    /// Every demand not covered by an allocation with an equal capability
    /// over a containing interval. Always derived, never cached.
    #[must_use]
    pub fn missing_demands(&self, allocations: &Allocations) -> Self {
        let all = self
            .all
            .iter()
            .filter(|demand| !demand.satisfied_by(allocations))
            .cloned()
            .collect();
        Self { all }
    }
}
