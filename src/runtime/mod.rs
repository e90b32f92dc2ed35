//! Runtime adapters driving the periodic check.

pub mod periodic;
pub mod tokio_spawner;

use std::future::Future;

pub use periodic::spawn_periodic_check;
pub use tokio_spawner::TokioSpawner;

/// Abstraction for spawning task execution on a runtime.
pub trait Spawn {
    /// Spawn an async task that returns a future.
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static;
}
