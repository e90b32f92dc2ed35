//! Infrastructure adapters for storage backends and collaborator doubles.

pub mod repository;

pub use repository::{
    InMemoryAvailabilityRepository, InMemoryCapabilityFinder, InMemoryEventPublisher,
    InMemoryProjectAllocationsRepository, InMemoryRiskSagaRepository, PostgresSchema,
    RecordingRiskNotifier, RiskNotification,
};
