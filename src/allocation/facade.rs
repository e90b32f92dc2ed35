//! Orchestration of the availability ledger and the allocation aggregate.

use uuid::Uuid;

use crate::allocation::capabilities::Allocations;
use crate::allocation::demands::Demands;
use crate::allocation::events::{AllocationEvent, EventPublisher};
use crate::allocation::project_allocations::ProjectAllocations;
use crate::allocation::repository::ProjectAllocationsRepository;
use crate::availability::{AvailabilityFacade, AvailabilityRepository};
use crate::core::{AllocatableCapabilityId, Capability, LedgerError, Owner, ProjectId, TimeSlot};
use crate::util::clock::Clock;

/// Oracle answering whether a capability instance is currently registered.
pub trait CapabilityFinder: Send + Sync {
    /// Whether the capability instance exists.
    fn is_present(&self, id: AllocatableCapabilityId) -> bool;
}

impl<T: CapabilityFinder + ?Sized> CapabilityFinder for std::sync::Arc<T> {
    fn is_present(&self, id: AllocatableCapabilityId) -> bool {
        (**self).is_present(id)
    }
}

/// Coordinates the capability oracle, the availability ledger, and the
/// project allocation aggregate as one logical transaction.
///
/// The facade itself performs no rollback: when the aggregate refuses an
/// allocation after the ledger block succeeded, the surrounding unit of work
/// is expected to undo the block.
pub struct AllocationFacade<PR, AR, CF, EP, C> {
    projects: PR,
    availability: AvailabilityFacade<AR>,
    capability_finder: CF,
    events: EP,
    clock: C,
}

impl<PR, AR, CF, EP, C> AllocationFacade<PR, AR, CF, EP, C>
where
    PR: ProjectAllocationsRepository,
    AR: AvailabilityRepository,
    CF: CapabilityFinder,
    EP: EventPublisher,
    C: Clock,
{
    /// Wire the facade from its collaborators.
    pub const fn new(
        projects: PR,
        availability: AvailabilityFacade<AR>,
        capability_finder: CF,
        events: EP,
        clock: C,
    ) -> Self {
        Self {
            projects,
            availability,
            capability_finder,
            events,
            clock,
        }
    }

    /// The availability ledger this facade locks slots through.
    pub const fn availability(&self) -> &AvailabilityFacade<AR> {
        &self.availability
    }

    /// Create a new allocation aggregate with a declared slot and initial
    /// demands; returns its project id.
    pub fn create_allocation(
        &self,
        slot: TimeSlot,
        scheduled_demands: Demands,
    ) -> Result<ProjectId, LedgerError> {
        let project_id = ProjectId::new_one();
        let project =
            ProjectAllocations::new(project_id, Allocations::none(), scheduled_demands, slot);
        self.projects.save(&project)?;
        tracing::info!(%project_id, "created allocation project");
        Ok(project_id)
    }

    /// Allocate a capability instance to a project over a slot.
    ///
    /// Returns `Ok(None)` when the capability is unknown, the ledger cannot
    /// block the slot, or the aggregate refuses the allocation. The aggregate
    /// is saved regardless of whether a fact was produced.
    pub fn allocate_to_project(
        &self,
        project_id: ProjectId,
        id: AllocatableCapabilityId,
        capability: Capability,
        slot: TimeSlot,
    ) -> Result<Option<Uuid>, LedgerError> {
        // One unit of work crossing the ledger and the aggregate.
        if !self.capability_finder.is_present(id) {
            tracing::debug!(%project_id, capability = %id, "capability not registered");
            return Ok(None);
        }
        let owner = Owner::of(project_id.id());
        if !self
            .availability
            .block(id.to_availability_resource_id(), &slot, owner)?
        {
            tracing::debug!(%project_id, capability = %id, "slot could not be blocked");
            return Ok(None);
        }

        let mut project = self.load_project(project_id)?;
        let event = project.allocate(id, capability, slot, self.clock.now());
        self.projects.save(&project)?;

        Ok(event.map(|event| {
            let allocated_capability_id = event.allocated_capability_id;
            tracing::info!(%project_id, %allocated_capability_id, "capability allocated");
            self.events
                .publish(AllocationEvent::CapabilitiesAllocated(event));
            allocated_capability_id
        }))
    }

    /// Release a previously allocated capability from a project.
    ///
    /// Does not consult the capability oracle: an allocation may be released
    /// even if the capability registration was later revoked. Returns whether
    /// the aggregate recorded a release.
    pub fn release_from_project(
        &self,
        project_id: ProjectId,
        id: AllocatableCapabilityId,
        slot: TimeSlot,
    ) -> Result<bool, LedgerError> {
        let owner = Owner::of(project_id.id());
        let ledger_released =
            self.availability
                .release(id.to_availability_resource_id(), &slot, owner)?;
        if !ledger_released {
            tracing::debug!(%project_id, capability = %id, "ledger did not release the slot");
        }

        let mut project = self.load_project(project_id)?;
        let event = project.release(id.id(), &slot, self.clock.now());
        self.projects.save(&project)?;

        Ok(event.is_some_and(|event| {
            tracing::info!(%project_id, capability = %id, "capability released");
            self.events.publish(AllocationEvent::CapabilityReleased(event));
            true
        }))
    }

    /// Merge new demands into a project's demand set, creating the aggregate
    /// on first use.
    pub fn schedule_project_allocation_demands(
        &self,
        project_id: ProjectId,
        demands: &Demands,
    ) -> Result<(), LedgerError> {
        let mut project = self
            .projects
            .find_by_id(project_id)?
            .unwrap_or_else(|| ProjectAllocations::empty(project_id));
        let event = project.add_demands(demands, self.clock.now());
        self.projects.save(&project)?;
        self.events
            .publish(AllocationEvent::ProjectAllocationsDemandsScheduled(event));
        Ok(())
    }

    /// Define or redefine a project's declared time slot.
    pub fn edit_project_dates(
        &self,
        project_id: ProjectId,
        from_to: TimeSlot,
    ) -> Result<(), LedgerError> {
        let mut project = self.load_project(project_id)?;
        let event = project.define_slot(from_to, self.clock.now());
        self.projects.save(&project)?;
        self.events
            .publish(AllocationEvent::ProjectAllocationScheduled(event));
        Ok(())
    }

    fn load_project(&self, project_id: ProjectId) -> Result<ProjectAllocations, LedgerError> {
        self.projects
            .find_by_id(project_id)?
            .ok_or_else(|| LedgerError::NotFound(format!("project allocations {project_id}")))
    }
}
