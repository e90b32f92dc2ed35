//! Storage abstraction for risk sagas.

use std::sync::Arc;

use crate::core::{LedgerError, ProjectId};
use crate::risk::saga::RiskPeriodicCheckSaga;

/// Storage abstraction for [`RiskPeriodicCheckSaga`] instances, one per
/// project.
///
/// `save` performs the optimistic-concurrency check: it compares the saga's
/// version against the stored one and fails with
/// [`LedgerError::VersionConflict`] when they differ, so events arriving out
/// of order for the same project never silently overwrite each other.
pub trait RiskSagaRepository: Send + Sync {
    /// The saga tracking `project_id`, if one exists.
    fn find_by_project_id(
        &self,
        project_id: ProjectId,
    ) -> Result<Option<RiskPeriodicCheckSaga>, LedgerError>;

    /// All stored sagas, for the periodic sweep.
    fn find_all(&self) -> Result<Vec<RiskPeriodicCheckSaga>, LedgerError>;

    /// Save with a compare-and-swap on the version counter.
    fn save(&self, saga: &RiskPeriodicCheckSaga) -> Result<(), LedgerError>;
}

impl<T: RiskSagaRepository + ?Sized> RiskSagaRepository for Arc<T> {
    fn find_by_project_id(
        &self,
        project_id: ProjectId,
    ) -> Result<Option<RiskPeriodicCheckSaga>, LedgerError> {
        (**self).find_by_project_id(project_id)
    }

    fn find_all(&self) -> Result<Vec<RiskPeriodicCheckSaga>, LedgerError> {
        (**self).find_all()
    }

    fn save(&self, saga: &RiskPeriodicCheckSaga) -> Result<(), LedgerError> {
        (**self).save(saga)
    }
}
