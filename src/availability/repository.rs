//! Storage abstraction for ledger rows.

use std::sync::Arc;

use crate::availability::resource_availability::{ResourceAvailability, ResourceStatus};
use crate::core::{LedgerError, ResourceId, TimeSlot};

/// Storage abstraction for [`ResourceAvailability`] rows. Rows are keyed by
/// their own id; `save_all` upserts. Whether `save_all` is atomic is the
/// backend's concern and part of the caller's transaction contract.
pub trait AvailabilityRepository: Send + Sync {
    /// Upsert a batch of rows.
    fn save_all(&self, rows: Vec<ResourceAvailability>) -> Result<(), LedgerError>;

    /// All rows of one resource's calendar.
    fn load_by_resource(
        &self,
        resource_id: ResourceId,
    ) -> Result<Vec<ResourceAvailability>, LedgerError>;

    /// Rows of one resource whose block lies within `slot`.
    fn load_within_slot(
        &self,
        resource_id: ResourceId,
        slot: &TimeSlot,
    ) -> Result<Vec<ResourceAvailability>, LedgerError> {
        Ok(self
            .load_by_resource(resource_id)?
            .into_iter()
            .filter(|row| row.slot().within(slot))
            .collect())
    }

    /// Rows of one resource within `slot` that currently have `status`.
    fn load_within_slot_with_status(
        &self,
        resource_id: ResourceId,
        slot: &TimeSlot,
        status: ResourceStatus,
    ) -> Result<Vec<ResourceAvailability>, LedgerError> {
        Ok(self
            .load_within_slot(resource_id, slot)?
            .into_iter()
            .filter(|row| row.status() == status)
            .collect())
    }
}

impl<T: AvailabilityRepository + ?Sized> AvailabilityRepository for Arc<T> {
    fn save_all(&self, rows: Vec<ResourceAvailability>) -> Result<(), LedgerError> {
        (**self).save_all(rows)
    }

    fn load_by_resource(
        &self,
        resource_id: ResourceId,
    ) -> Result<Vec<ResourceAvailability>, LedgerError> {
        (**self).load_by_resource(resource_id)
    }

    fn load_within_slot(
        &self,
        resource_id: ResourceId,
        slot: &TimeSlot,
    ) -> Result<Vec<ResourceAvailability>, LedgerError> {
        (**self).load_within_slot(resource_id, slot)
    }
}
