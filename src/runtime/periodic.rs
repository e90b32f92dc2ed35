//! Recurring tick driver for the weekly risk check.

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

use crate::runtime::Spawn;

/// Spawn a loop that invokes `tick` once per `period` until `shutdown` is
/// flipped to `true` (or its sender is dropped).
///
/// The ledger core has no background threads of its own; this is the external
/// scheduler that drives `weekly_check` on a dispatcher.
pub fn spawn_periodic_check<S, F, Fut>(
    spawner: &S,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
    tick: F,
) where
    S: Spawn,
    F: Fn() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    spawner.spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                _ = interval.tick() => tick().await,
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        tracing::info!("periodic check shutting down");
                        break;
                    }
                }
            }
        }
    });
}
