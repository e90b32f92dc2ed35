//! Periodic risk check: a per-project saga fed by domain events and a
//! recurring tick, deciding what follow-up action to take.

pub mod dispatcher;
pub mod repository;
pub mod saga;

pub use dispatcher::{RiskPeriodicCheckSagaDispatcher, RiskPushNotification};
pub use repository::RiskSagaRepository;
pub use saga::{RiskEvent, RiskPeriodicCheckSaga, RiskPeriodicCheckSagaStep};
