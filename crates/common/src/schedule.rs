//! Repeating poll task
//!
//! Polls once immediately, then once per interval until cancelled. Each tick
//! runs its poll as a separate task, so a slow backend never delays the
//! schedule and polls may overlap.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::loader::Dashboard;

/// Interval between polls unless configured otherwise
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(15_000);

/// Shortest interval the schedule accepts; shorter ones are raised to it
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

pub struct PollTask;

impl PollTask {
    pub fn spawn(dashboard: Dashboard, interval: Duration, clock: Arc<dyn Clock>) -> PollTaskHandle {
        let interval = interval.max(MIN_POLL_INTERVAL);
        let token = CancellationToken::new();
        let tracker = TaskTracker::new();

        let join = tokio::spawn(run(
            dashboard,
            interval,
            clock,
            token.clone(),
            tracker.clone(),
        ));

        PollTaskHandle {
            token,
            tracker,
            join,
        }
    }
}

async fn run(
    dashboard: Dashboard,
    interval: Duration,
    clock: Arc<dyn Clock>,
    token: CancellationToken,
    tracker: TaskTracker,
) {
    info!("Polling {} every {:?}", dashboard.endpoint().base(), interval);
    let mut tick: u64 = 0;

    loop {
        tick += 1;
        let dashboard = dashboard.clone();
        tracker.spawn(async move {
            match dashboard.poll().await {
                Ok(outcome) => debug!(tick, ?outcome, "Poll finished"),
                Err(e) => warn!(tick, "Poll failed, retrying next interval: {}", e),
            }
        });

        tokio::select! {
            _ = token.cancelled() => break,
            _ = clock.sleep(interval) => {}
        }
    }

    debug!("Poll task stopped after {} tick(s)", tick);
}

/// Handle to a running [`PollTask`]. Dropping it leaves the task running.
pub struct PollTaskHandle {
    token: CancellationToken,
    tracker: TaskTracker,
    join: JoinHandle<()>,
}

impl PollTaskHandle {
    /// Stop scheduling new polls. In-flight polls still complete.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Cancel and wait for the schedule and any in-flight polls to finish
    pub async fn shutdown(self) {
        self.token.cancel();
        if let Err(e) = self.join.await {
            warn!("Poll task ended abnormally: {}", e);
        }
        self.tracker.close();
        self.tracker.wait().await;
    }
}
