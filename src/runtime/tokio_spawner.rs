//! Tokio-backed implementation of the [`Spawn`] seam.

use std::future::Future;

use crate::runtime::Spawn;

/// Spawner that hands futures to a tokio runtime.
#[derive(Clone)]
pub struct TokioSpawner {
    handle: tokio::runtime::Handle,
}

impl TokioSpawner {
    /// Spawner over an existing runtime handle.
    #[must_use]
    pub const fn new(handle: tokio::runtime::Handle) -> Self {
        Self { handle }
    }

    /// Spawner over the runtime of the current async context.
    ///
    /// # Panics
    ///
    /// Panics outside a tokio runtime, as [`tokio::runtime::Handle::current`]
    /// does.
    #[must_use]
    pub fn current() -> Self {
        Self::new(tokio::runtime::Handle::current())
    }
}

impl Spawn for TokioSpawner {
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.handle.spawn(fut);
    }
}
