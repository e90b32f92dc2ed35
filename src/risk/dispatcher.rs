//! Routes domain events and the periodic tick to saga instances.

use async_trait::async_trait;

use crate::allocation::demands::Demands;
use crate::config::RiskConfig;
use crate::core::{AppResult, ProjectId};
use crate::risk::repository::RiskSagaRepository;
use crate::risk::saga::{RiskEvent, RiskPeriodicCheckSaga, RiskPeriodicCheckSagaStep};
use crate::util::clock::Clock;

/// Outbound channel for saga decisions. Delivery (push, mail, search jobs) is
/// an external concern; the crate only hands decisions over.
#[async_trait]
pub trait RiskPushNotification: Send + Sync {
    /// All demands of the project are covered.
    async fn notify_demands_satisfied(&self, project_id: ProjectId);
    /// A resource was lost before the project's deadline.
    async fn notify_about_possible_risk(&self, project_id: ProjectId);
    /// Suggest replacement capacity for the still-missing demands.
    async fn suggest_replacement(&self, project_id: ProjectId, missing_demands: &Demands);
    /// Search for available candidates for the still-missing demands.
    async fn search_available(&self, project_id: ProjectId, missing_demands: &Demands);
}

#[async_trait]
impl<T: RiskPushNotification + ?Sized> RiskPushNotification for std::sync::Arc<T> {
    async fn notify_demands_satisfied(&self, project_id: ProjectId) {
        (**self).notify_demands_satisfied(project_id).await;
    }

    async fn notify_about_possible_risk(&self, project_id: ProjectId) {
        (**self).notify_about_possible_risk(project_id).await;
    }

    async fn suggest_replacement(&self, project_id: ProjectId, missing_demands: &Demands) {
        (**self).suggest_replacement(project_id, missing_demands).await;
    }

    async fn search_available(&self, project_id: ProjectId, missing_demands: &Demands) {
        (**self).search_available(project_id, missing_demands).await;
    }
}

/// Per-project saga driver: feeds events into the matching saga (creating it
/// on first contact), persists the updated state, and forwards the decided
/// step to the notification channel.
pub struct RiskPeriodicCheckSagaDispatcher<SR, N, C> {
    sagas: SR,
    notification: N,
    clock: C,
    config: RiskConfig,
}

impl<SR, N, C> RiskPeriodicCheckSagaDispatcher<SR, N, C>
where
    SR: RiskSagaRepository,
    N: RiskPushNotification,
    C: Clock,
{
    /// Wire the dispatcher from its collaborators.
    pub const fn new(sagas: SR, notification: N, clock: C, config: RiskConfig) -> Self {
        Self {
            sagas,
            notification,
            clock,
            config,
        }
    }

    /// Route one domain event to the saga(s) it concerns. A version conflict
    /// on save propagates so the caller can retry the whole operation.
    pub async fn handle(&self, event: &RiskEvent) -> AppResult<()> {
        if let Some(project_id) = event.project_id() {
            return self.handle_for_project(project_id, event).await;
        }
        if let RiskEvent::ResourceTakenOver(taken_over) = event {
            // Resource-scoped event: address every project that held blocks.
            for owner in &taken_over.previous_owners {
                if let Some(id) = owner.id() {
                    self.handle_for_project(ProjectId::from_uuid(id), event)
                        .await?;
                }
            }
        }
        Ok(())
    }

    /// Run the periodic deadline evaluation over every stored saga.
    pub async fn weekly_check(&self) -> AppResult<()> {
        let when = self.clock.now();
        for saga in self.sagas.find_all()? {
            let step = saga.handle_weekly_check(when, &self.config);
            tracing::debug!(project_id = %saga.project_id(), ?step, "weekly check evaluated");
            self.perform(step, &saga).await;
        }
        Ok(())
    }

    async fn handle_for_project(&self, project_id: ProjectId, event: &RiskEvent) -> AppResult<()> {
        let mut saga = match self.sagas.find_by_project_id(project_id)? {
            Some(saga) => saga,
            None => Self::fresh_saga(project_id, event),
        };
        let step = saga.handle(event);
        self.sagas.save(&saga)?;
        if let Some(step) = step {
            self.perform(step, &saga).await;
        }
        Ok(())
    }

    fn fresh_saga(project_id: ProjectId, event: &RiskEvent) -> RiskPeriodicCheckSaga {
        match event {
            RiskEvent::EarningsRecalculated(e) => {
                RiskPeriodicCheckSaga::with_earnings(project_id, e.earnings)
            }
            RiskEvent::ProjectAllocationsDemandsScheduled(e) => {
                RiskPeriodicCheckSaga::new(project_id, e.missing_demands.clone())
            }
            _ => RiskPeriodicCheckSaga::new(project_id, Demands::none()),
        }
    }

    async fn perform(&self, step: RiskPeriodicCheckSagaStep, saga: &RiskPeriodicCheckSaga) {
        let project_id = saga.project_id();
        match step {
            RiskPeriodicCheckSagaStep::DoNothing => {}
            RiskPeriodicCheckSagaStep::NotifyAboutDemandsSatisfied => {
                self.notification.notify_demands_satisfied(project_id).await;
            }
            RiskPeriodicCheckSagaStep::NotifyAboutPossibleRisk => {
                self.notification
                    .notify_about_possible_risk(project_id)
                    .await;
            }
            RiskPeriodicCheckSagaStep::SuggestReplacement => {
                self.notification
                    .suggest_replacement(project_id, saga.missing_demands())
                    .await;
            }
            RiskPeriodicCheckSagaStep::FindAvailable => {
                self.notification
                    .search_available(project_id, saga.missing_demands())
                    .await;
            }
        }
    }
}
