//! Storage abstraction for project allocation aggregates.

use std::sync::Arc;

use crate::allocation::project_allocations::ProjectAllocations;
use crate::core::{LedgerError, ProjectId};

/// Storage abstraction for [`ProjectAllocations`] aggregates, keyed by
/// project id.
pub trait ProjectAllocationsRepository: Send + Sync {
    /// Load one aggregate, if it exists.
    fn find_by_id(&self, project_id: ProjectId) -> Result<Option<ProjectAllocations>, LedgerError>;

    /// All stored aggregates.
    fn find_all(&self) -> Result<Vec<ProjectAllocations>, LedgerError>;

    /// Upsert an aggregate.
    fn save(&self, project: &ProjectAllocations) -> Result<(), LedgerError>;
}

impl<T: ProjectAllocationsRepository + ?Sized> ProjectAllocationsRepository for Arc<T> {
    fn find_by_id(&self, project_id: ProjectId) -> Result<Option<ProjectAllocations>, LedgerError> {
        (**self).find_by_id(project_id)
    }

    fn find_all(&self) -> Result<Vec<ProjectAllocations>, LedgerError> {
        (**self).find_all()
    }

    fn save(&self, project: &ProjectAllocations) -> Result<(), LedgerError> {
        (**self).save(project)
    }
}
