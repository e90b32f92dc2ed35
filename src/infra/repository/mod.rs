//! Storage backend implementations.

pub mod memory;
pub mod postgres;

pub use memory::{
    InMemoryAvailabilityRepository, InMemoryCapabilityFinder, InMemoryEventPublisher,
    InMemoryProjectAllocationsRepository, InMemoryRiskSagaRepository, RecordingRiskNotifier,
    RiskNotification,
};
pub use postgres::PostgresSchema;
