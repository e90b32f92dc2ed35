//! Per-project risk saga: event-driven state plus a periodic deadline check.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::allocation::cashflow::{Earnings, EarningsRecalculated};
use crate::allocation::demands::Demands;
use crate::allocation::events::{
    CapabilitiesAllocated, CapabilityReleased, ProjectAllocationScheduled,
    ProjectAllocationsDemandsScheduled,
};
use crate::availability::events::ResourceTakenOver;
use crate::config::RiskConfig;
use crate::core::ProjectId;

/// Follow-up action decided by the saga. The saga only decides; performing
/// the action belongs to the dispatcher's collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskPeriodicCheckSagaStep {
    /// No action required.
    DoNothing,
    /// All demands of the project are now covered.
    NotifyAboutDemandsSatisfied,
    /// A resource the project relied on was lost before its deadline.
    NotifyAboutPossibleRisk,
    /// Deadline is close and the project is valuable: suggest a replacement.
    SuggestReplacement,
    /// Deadline is approaching: search for available candidates.
    FindAvailable,
}

/// Closed union of the domain events the saga reacts to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RiskEvent {
    /// Project earnings were recalculated.
    EarningsRecalculated(EarningsRecalculated),
    /// A project's demand set changed.
    ProjectAllocationsDemandsScheduled(ProjectAllocationsDemandsScheduled),
    /// A project's slot (and hence deadline) was declared.
    ProjectAllocationScheduled(ProjectAllocationScheduled),
    /// A resource was taken away from its owners.
    ResourceTakenOver(ResourceTakenOver),
    /// A capability was released from a project.
    CapabilityReleased(CapabilityReleased),
    /// A capability was allocated to a project.
    CapabilitiesAllocated(CapabilitiesAllocated),
}

impl RiskEvent {
    /// The project the event belongs to; `None` for resource-scoped events,
    /// which address sagas through the previous owners instead.
    #[must_use]
    pub const fn project_id(&self) -> Option<ProjectId> {
        match self {
            Self::EarningsRecalculated(e) => Some(e.project_id),
            Self::ProjectAllocationsDemandsScheduled(e) => Some(e.project_id),
            Self::ProjectAllocationScheduled(e) => Some(e.project_id),
            Self::CapabilityReleased(e) => Some(e.project_id),
            Self::CapabilitiesAllocated(e) => Some(e.project_id),
            Self::ResourceTakenOver(_) => None,
        }
    }
}

/// Long-lived risk picture of one project: its missing demands, earnings,
/// and deadline, updated by every relevant event and evaluated on a periodic
/// tick.
///
/// The version counter detects stale concurrent updates; the repository
/// enforces it on save, the saga only carries it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskPeriodicCheckSaga {
    saga_id: Uuid,
    project_id: ProjectId,
    missing_demands: Demands,
    earnings: Option<Earnings>,
    deadline: Option<DateTime<Utc>>,
    version: u64,
}

impl RiskPeriodicCheckSaga {
    /// Saga created when a project first schedules demands.
    #[must_use]
    pub fn new(project_id: ProjectId, missing_demands: Demands) -> Self {
        Self {
            saga_id: Uuid::new_v4(),
            project_id,
            missing_demands,
            earnings: None,
            deadline: None,
            version: 0,
        }
    }

    /// Saga created when a project first records earnings.
    #[must_use]
    pub fn with_earnings(project_id: ProjectId, earnings: Earnings) -> Self {
        Self {
            saga_id: Uuid::new_v4(),
            project_id,
            missing_demands: Demands::none(),
            earnings: Some(earnings),
            deadline: None,
            version: 0,
        }
    }

    /// Saga identifier.
    #[must_use]
    pub const fn saga_id(&self) -> Uuid {
        self.saga_id
    }

    /// The tracked project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Latest missing-demand snapshot.
    #[must_use]
    pub const fn missing_demands(&self) -> &Demands {
        &self.missing_demands
    }

    /// Latest known earnings.
    #[must_use]
    pub const fn earnings(&self) -> Option<Earnings> {
        self.earnings
    }

    /// End of the project's declared slot, once known.
    #[must_use]
    pub const fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    /// Optimistic-concurrency counter, bumped by the repository on save.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Whether no demand is currently missing.
    #[must_use]
    pub fn are_demands_satisfied(&self) -> bool {
        self.missing_demands.is_empty()
    }

    /// Apply one domain event. Returns `None` for pure internal updates that
    /// carry no decision.
    pub fn handle(&mut self, event: &RiskEvent) -> Option<RiskPeriodicCheckSagaStep> {
        match event {
            RiskEvent::EarningsRecalculated(e) => {
                self.earnings = Some(e.earnings);
                Some(RiskPeriodicCheckSagaStep::DoNothing)
            }
            RiskEvent::ProjectAllocationsDemandsScheduled(e) => {
                self.missing_demands = e.missing_demands.clone();
                Some(self.demands_step())
            }
            RiskEvent::CapabilitiesAllocated(e) => {
                self.missing_demands = e.missing_demands.clone();
                Some(self.demands_step())
            }
            RiskEvent::ProjectAllocationScheduled(e) => {
                self.deadline = Some(e.from_to.to());
                None
            }
            RiskEvent::ResourceTakenOver(e) => match self.deadline {
                Some(deadline) if e.occurred_at <= deadline => {
                    Some(RiskPeriodicCheckSagaStep::NotifyAboutPossibleRisk)
                }
                _ => Some(RiskPeriodicCheckSagaStep::DoNothing),
            },
            RiskEvent::CapabilityReleased(_) => Some(RiskPeriodicCheckSagaStep::DoNothing),
        }
    }

    /// Evaluate deadline proximity on the periodic tick. First matching rule
    /// wins: nothing to do without a deadline, after it, or once demands are
    /// satisfied; replacement suggestion inside the close window when earnings
    /// exceed the risk threshold; availability search inside the wider window.
    #[must_use]
    pub fn handle_weekly_check(
        &self,
        when: DateTime<Utc>,
        config: &RiskConfig,
    ) -> RiskPeriodicCheckSagaStep {
        let Some(deadline) = self.deadline else {
            return RiskPeriodicCheckSagaStep::DoNothing;
        };
        if when > deadline || self.are_demands_satisfied() {
            return RiskPeriodicCheckSagaStep::DoNothing;
        }

        if Self::is_deadline_close(when, deadline, config) && self.earnings_exceed_threshold(config)
        {
            return RiskPeriodicCheckSagaStep::SuggestReplacement;
        }

        if Self::is_deadline_upcoming(when, deadline, config) {
            return RiskPeriodicCheckSagaStep::FindAvailable;
        }

        RiskPeriodicCheckSagaStep::DoNothing
    }

    /// Bump the version counter; called by repositories on successful save.
    pub(crate) fn bump_version(&mut self) {
        self.version += 1;
    }

    fn demands_step(&self) -> RiskPeriodicCheckSagaStep {
        if self.are_demands_satisfied() {
            RiskPeriodicCheckSagaStep::NotifyAboutDemandsSatisfied
        } else {
            RiskPeriodicCheckSagaStep::DoNothing
        }
    }

    fn earnings_exceed_threshold(&self, config: &RiskConfig) -> bool {
        self.earnings
            .is_some_and(|earnings| earnings.greater_than(config.risk_threshold()))
    }

    fn is_deadline_close(when: DateTime<Utc>, deadline: DateTime<Utc>, config: &RiskConfig) -> bool {
        when > deadline - TimeDelta::days(config.upcoming_deadline_replacement_suggestion_days)
    }

    fn is_deadline_upcoming(
        when: DateTime<Utc>,
        deadline: DateTime<Utc>,
        config: &RiskConfig,
    ) -> bool {
        when > deadline - TimeDelta::days(config.upcoming_deadline_availability_search_days)
    }
}
