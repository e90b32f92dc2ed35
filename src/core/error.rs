//! Error types for ledger and allocation operations.

use thiserror::Error;

/// Errors produced by the availability, allocation, and risk components.
///
/// Precondition failures (capability unknown, slot not fully provisioned,
/// owner mismatch, duplicate allocation) are expected outcomes and surface as
/// `false`/`None` results, never as a variant here.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// An aggregate or saga was looked up by id and does not exist.
    #[error("not found: {0}")]
    NotFound(String),
    /// A save raced with a concurrent update; the caller may retry the whole
    /// operation.
    #[error("version conflict: {0}")]
    VersionConflict(String),
    /// Backend-specific failure with context.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
