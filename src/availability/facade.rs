//! Block-granular locking of a resource's calendar over arbitrary intervals.

use chrono::TimeDelta;

use crate::availability::repository::AvailabilityRepository;
use crate::availability::resource_availability::ResourceAvailability;
use crate::core::{LedgerError, Owner, ResourceId, TimeSlot};

/// Entry point to the availability ledger.
///
/// Every requested interval is first normalized to the configured block grid,
/// then translated into the set of covering block rows. Block and disable
/// refuse any request the provisioned rows cannot fully cover; a gap is never
/// turned into a partial lock. Mutations happen on fetched copies and are
/// committed with one `save_all` only when every row transition succeeded, so
/// a failed call leaves the stored rows untouched.
pub struct AvailabilityFacade<R> {
    repository: R,
    block_size: TimeDelta,
}

impl<R: AvailabilityRepository> AvailabilityFacade<R> {
    /// Create a facade over `repository` with the given block granularity.
    pub const fn new(repository: R, block_size: TimeDelta) -> Self {
        Self {
            repository,
            block_size,
        }
    }

    /// The configured block granularity.
    #[must_use]
    pub const fn block_size(&self) -> TimeDelta {
        self.block_size
    }

    /// Access to the underlying row storage.
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Provision one available row per block covering `slot`. Calling twice
    /// for overlapping slots creates duplicate rows; callers own idempotency.
    pub fn create_resource_slots(
        &self,
        resource_id: ResourceId,
        slot: &TimeSlot,
    ) -> Result<(), LedgerError> {
        let rows: Vec<_> = slot
            .split_to_blocks(self.block_size)
            .into_iter()
            .map(|block| ResourceAvailability::new(resource_id, block))
            .collect();
        tracing::debug!(%resource_id, blocks = rows.len(), "creating resource slots");
        self.repository.save_all(rows)
    }

    /// Lock every block of `slot` for `requester`. Returns `Ok(false)` when
    /// the slot is not fully provisioned or any block is not available.
    pub fn block(
        &self,
        resource_id: ResourceId,
        slot: &TimeSlot,
        requester: Owner,
    ) -> Result<bool, LedgerError> {
        let Some(mut rows) = self.load_covering_rows(resource_id, slot)? else {
            return Ok(false);
        };
        for row in &mut rows {
            if !row.block(requester) {
                tracing::debug!(%resource_id, row = %row.id(), "block refused, row not available");
                return Ok(false);
            }
        }
        self.repository.save_all(rows)?;
        tracing::info!(%resource_id, "blocked slot");
        Ok(true)
    }

    /// Release every block of `slot` held by `requester`. Fails as a whole if
    /// any covering row is owned by someone else or disabled.
    pub fn release(
        &self,
        resource_id: ResourceId,
        slot: &TimeSlot,
        requester: Owner,
    ) -> Result<bool, LedgerError> {
        let normalized = slot.normalized_to_blocks(self.block_size);
        let mut rows = self.repository.load_within_slot(resource_id, &normalized)?;
        for row in &mut rows {
            if !row.release(requester) {
                tracing::debug!(%resource_id, row = %row.id(), "release refused, owner mismatch");
                return Ok(false);
            }
        }
        self.repository.save_all(rows)?;
        tracing::info!(%resource_id, "released slot");
        Ok(true)
    }

    /// Withdraw every block of `slot` from scheduling, stamping `requester`
    /// as the new owner. Only the coverage precondition can fail.
    pub fn disable(
        &self,
        resource_id: ResourceId,
        slot: &TimeSlot,
        requester: Owner,
    ) -> Result<bool, LedgerError> {
        let Some(mut rows) = self.load_covering_rows(resource_id, slot)? else {
            return Ok(false);
        };
        for row in &mut rows {
            row.disable(requester);
        }
        self.repository.save_all(rows)?;
        tracing::info!(%resource_id, "disabled slot");
        Ok(true)
    }

    /// Fetch the rows covering `slot`, or `None` when the provisioned rows do
    /// not exactly cover the normalized request.
    fn load_covering_rows(
        &self,
        resource_id: ResourceId,
        slot: &TimeSlot,
    ) -> Result<Option<Vec<ResourceAvailability>>, LedgerError> {
        let normalized = slot.normalized_to_blocks(self.block_size);
        let rows = self.repository.load_within_slot(resource_id, &normalized)?;
        let expected = slot.block_count(self.block_size);
        if rows.len() != expected {
            tracing::debug!(
                %resource_id,
                found = rows.len(),
                expected,
                "slot not fully provisioned"
            );
            return Ok(None);
        }
        Ok(Some(rows))
    }
}
