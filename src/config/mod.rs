//! Configuration models for the ledger and the risk check.

pub mod engine;

pub use engine::{EngineConfig, LedgerConfig, RiskConfig};
