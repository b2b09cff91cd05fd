//! Periodic clock loop

use std::sync::Arc;
use tokio::{
    sync::watch,
    time::{interval_at, Instant},
};
use tracing::{debug, info};

use crate::state::{Clock, ClockStatus};

/// Drive the clock until it reaches its limit or a stop is requested
///
/// Firings run strictly one after another on this task. The interval is
/// created here and dropped when the loop exits, and the returned status is
/// also published through [`Clock::status`].
pub async fn clock_task(clock: Arc<Clock>, mut stop_rx: watch::Receiver<bool>) -> ClockStatus {
    let period = clock.period();
    debug!("Starting clock task with period {:?}", period);

    // The first firing happens one full period after start
    let mut ticker = interval_at(Instant::now() + period, period);

    let status = loop {
        tokio::select! {
            biased;

            changed = stop_rx.changed() => {
                // A closed channel means nobody can ask for anything else either
                if changed.is_err() || *stop_rx.borrow_and_update() {
                    info!("Clock stopped after {} seconds", clock.elapsed_seconds());
                    break ClockStatus::Stopped;
                }
            }

            _ = ticker.tick() => {
                if clock.fire() {
                    info!("Clock limit of {} seconds reached", clock.limit_seconds());
                    break ClockStatus::Completed;
                }
            }
        }
    };

    drop(ticker);
    clock.finish(status);
    status
}
