//! In-memory storage backends and collaborator doubles for development and
//! testing.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use parking_lot::Mutex;
use uuid::Uuid;

use crate::allocation::demands::Demands;
use crate::allocation::events::{AllocationEvent, EventPublisher};
use crate::allocation::facade::CapabilityFinder;
use crate::allocation::project_allocations::ProjectAllocations;
use crate::allocation::repository::ProjectAllocationsRepository;
use crate::availability::repository::AvailabilityRepository;
use crate::availability::resource_availability::ResourceAvailability;
use crate::core::{AllocatableCapabilityId, LedgerError, ProjectId, ResourceId};
use crate::risk::repository::RiskSagaRepository;
use crate::risk::saga::RiskPeriodicCheckSaga;

/// In-memory availability ledger rows keyed by row id.
#[derive(Default)]
pub struct InMemoryAvailabilityRepository {
    rows: Mutex<HashMap<Uuid, ResourceAvailability>>,
}

impl InMemoryAvailabilityRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl AvailabilityRepository for InMemoryAvailabilityRepository {
    fn save_all(&self, rows: Vec<ResourceAvailability>) -> Result<(), LedgerError> {
        let mut stored = self.rows.lock();
        for row in rows {
            stored.insert(row.id(), row);
        }
        Ok(())
    }

    fn load_by_resource(
        &self,
        resource_id: ResourceId,
    ) -> Result<Vec<ResourceAvailability>, LedgerError> {
        Ok(self
            .rows
            .lock()
            .values()
            .filter(|row| row.resource_id() == resource_id)
            .cloned()
            .collect())
    }
}

/// In-memory project allocation aggregates keyed by project id.
#[derive(Default)]
pub struct InMemoryProjectAllocationsRepository {
    projects: Mutex<HashMap<ProjectId, ProjectAllocations>>,
}

impl InMemoryProjectAllocationsRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProjectAllocationsRepository for InMemoryProjectAllocationsRepository {
    fn find_by_id(&self, project_id: ProjectId) -> Result<Option<ProjectAllocations>, LedgerError> {
        Ok(self.projects.lock().get(&project_id).cloned())
    }

    fn find_all(&self) -> Result<Vec<ProjectAllocations>, LedgerError> {
        Ok(self.projects.lock().values().cloned().collect())
    }

    fn save(&self, project: &ProjectAllocations) -> Result<(), LedgerError> {
        self.projects
            .lock()
            .insert(project.project_id(), project.clone());
        Ok(())
    }
}

/// In-memory risk sagas keyed by project id, with the version
/// compare-and-swap enforced on save.
#[derive(Default)]
pub struct InMemoryRiskSagaRepository {
    sagas: Mutex<HashMap<ProjectId, RiskPeriodicCheckSaga>>,
}

impl InMemoryRiskSagaRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RiskSagaRepository for InMemoryRiskSagaRepository {
    fn find_by_project_id(
        &self,
        project_id: ProjectId,
    ) -> Result<Option<RiskPeriodicCheckSaga>, LedgerError> {
        Ok(self.sagas.lock().get(&project_id).cloned())
    }

    fn find_all(&self) -> Result<Vec<RiskPeriodicCheckSaga>, LedgerError> {
        Ok(self.sagas.lock().values().cloned().collect())
    }

    fn save(&self, saga: &RiskPeriodicCheckSaga) -> Result<(), LedgerError> {
        let mut stored = self.sagas.lock();
        if let Some(existing) = stored.get(&saga.project_id()) {
            if existing.version() != saga.version() {
                return Err(LedgerError::VersionConflict(format!(
                    "saga for project {} is at version {}, attempted save of version {}",
                    saga.project_id(),
                    existing.version(),
                    saga.version()
                )));
            }
        }
        let mut updated = saga.clone();
        updated.bump_version();
        stored.insert(updated.project_id(), updated);
        Ok(())
    }
}

/// Registry-backed capability oracle.
#[derive(Default)]
pub struct InMemoryCapabilityFinder {
    present: Mutex<HashSet<AllocatableCapabilityId>>,
}

impl InMemoryCapabilityFinder {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a capability instance as existing.
    pub fn register(&self, id: AllocatableCapabilityId) {
        self.present.lock().insert(id);
    }
}

impl CapabilityFinder for InMemoryCapabilityFinder {
    fn is_present(&self, id: AllocatableCapabilityId) -> bool {
        self.present.lock().contains(&id)
    }
}

/// Event sink that records every published fact.
#[derive(Default)]
pub struct InMemoryEventPublisher {
    events: Mutex<Vec<AllocationEvent>>,
}

impl InMemoryEventPublisher {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything published so far.
    #[must_use]
    pub fn events(&self) -> Vec<AllocationEvent> {
        self.events.lock().clone()
    }
}

impl EventPublisher for InMemoryEventPublisher {
    fn publish(&self, event: AllocationEvent) {
        self.events.lock().push(event);
    }
}

/// One recorded risk decision delivery.
#[derive(Debug, Clone, PartialEq)]
pub enum RiskNotification {
    /// `notify_demands_satisfied` was called.
    DemandsSatisfied(ProjectId),
    /// `notify_about_possible_risk` was called.
    PossibleRisk(ProjectId),
    /// `suggest_replacement` was called.
    ReplacementSuggested(ProjectId, Demands),
    /// `search_available` was called.
    AvailabilitySearch(ProjectId, Demands),
}

/// Notification channel that records every delivered decision.
#[derive(Default)]
pub struct RecordingRiskNotifier {
    deliveries: Mutex<Vec<RiskNotification>>,
}

impl RecordingRiskNotifier {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything delivered so far.
    #[must_use]
    pub fn deliveries(&self) -> Vec<RiskNotification> {
        self.deliveries.lock().clone()
    }
}

#[async_trait]
impl crate::risk::dispatcher::RiskPushNotification for RecordingRiskNotifier {
    async fn notify_demands_satisfied(&self, project_id: ProjectId) {
        self.deliveries
            .lock()
            .push(RiskNotification::DemandsSatisfied(project_id));
    }

    async fn notify_about_possible_risk(&self, project_id: ProjectId) {
        self.deliveries
            .lock()
            .push(RiskNotification::PossibleRisk(project_id));
    }

    async fn suggest_replacement(&self, project_id: ProjectId, missing_demands: &Demands) {
        self.deliveries.lock().push(RiskNotification::ReplacementSuggested(
            project_id,
            missing_demands.clone(),
        ));
    }

    async fn search_available(&self, project_id: ProjectId, missing_demands: &Demands) {
        self.deliveries.lock().push(RiskNotification::AvailabilitySearch(
            project_id,
            missing_demands.clone(),
        ));
    }
}
