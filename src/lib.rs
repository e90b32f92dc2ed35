//! # Slot Ledger
//!
//! A time-slot capacity engine for resource scheduling workloads.
//!
//! This library tracks, reserves, and releases time-bounded capacity of named
//! resources (people, equipment, capability instances) on behalf of competing
//! projects, and reacts to a changing risk picture — missing capability
//! demand, resource loss, approaching deadlines — by deciding what follow-up
//! action to take.
//!
//! ## Core Pieces
//!
//! - **Availability ledger**: one row per (resource, block) pair with
//!   ownership-checked block/release/disable transitions. An arbitrary
//!   requested interval is normalized to the block grid and translated into
//!   its covering rows; any coverage gap rejects the whole request, so a
//!   resource is never left half-locked by a single call.
//! - **Allocation aggregate**: per-project state combining the declared time
//!   slot, current allocations, and outstanding demands. Allocate/release
//!   enforce the project's own time bound and emit facts carrying a freshly
//!   derived missing-demand snapshot.
//! - **Risk saga**: a long-lived, per-project state machine fed by domain
//!   events plus a recurring tick, deciding between doing nothing, notifying
//!   of satisfied demand, searching for replacements, or suggesting a
//!   substitution.
//!
//! ## Example
//!
//! ```rust,ignore
//! use slot_ledger::availability::AvailabilityFacade;
//! use slot_ledger::config::EngineConfig;
//! use slot_ledger::core::{Owner, ResourceId, TimeSlot};
//! use slot_ledger::infra::InMemoryAvailabilityRepository;
//!
//! let config = EngineConfig::default();
//! let ledger = AvailabilityFacade::new(
//!     InMemoryAvailabilityRepository::new(),
//!     config.ledger.block_size(),
//! );
//!
//! let resource = ResourceId::new_one();
//! let day = TimeSlot::create_daily_time_slot_utc(2024, 6, 1).unwrap();
//! ledger.create_resource_slots(resource, &day)?;
//! assert!(ledger.block(resource, &day, Owner::new_one())?);
//! ```
//!
//! Storage, event delivery, and the capability oracle are collaborator traits;
//! `infra` ships in-memory backends for development and testing. Ledger and
//! aggregate mutations are synchronous and expected to run inside one atomic
//! unit of work per call — the crate performs no internal rollback across the
//! ledger/aggregate boundary.

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Shared value objects (time slots, identifiers) and error types.
pub mod core;
/// Availability ledger: block-granular resource locking.
pub mod availability;
/// Project allocations, demands, and the coordinating facade.
pub mod allocation;
/// Periodic risk check saga and its dispatcher.
pub mod risk;
/// Configuration models for the ledger and the risk check.
pub mod config;
/// Storage backend implementations.
pub mod infra;
/// Runtime adapters driving the periodic check.
#[cfg(feature = "tokio-runtime")]
pub mod runtime;
/// Shared utilities.
pub mod util;
