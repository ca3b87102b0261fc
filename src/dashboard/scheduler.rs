use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::{Notify, mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::dashboard::state::SharedDashboard;
use crate::event::Event;
use crate::system::snapshot::Snapshot;
use crate::system::source::MetricSampler;

/// Asks the scheduler for an immediate out-of-band tick.
#[derive(Debug, Clone, Default)]
pub struct RefreshTrigger(Arc<Notify>);

impl RefreshTrigger {
    pub fn request(&self) {
        self.0.notify_one();
    }
}

/// Background task that samples on a fixed period, applies each snapshot to
/// the shared dashboard and then notifies the UI.
///
/// The first tick fires immediately so the dashboard is populated at startup.
pub struct RefreshScheduler {
    shutdown: watch::Sender<bool>,
    trigger: RefreshTrigger,
    task: Option<JoinHandle<()>>,
}

impl RefreshScheduler {
    pub fn spawn(
        sampler: MetricSampler,
        dashboard: SharedDashboard,
        period: Duration,
        tx: mpsc::UnboundedSender<Event>,
    ) -> Self {
        let (shutdown, shutdown_rx) = watch::channel(false);
        let trigger = RefreshTrigger::default();
        let task = tokio::spawn(run(
            sampler,
            dashboard,
            period,
            tx,
            shutdown_rx,
            Arc::clone(&trigger.0),
        ));

        Self {
            shutdown,
            trigger,
            task: Some(task),
        }
    }

    pub fn trigger(&self) -> RefreshTrigger {
        self.trigger.clone()
    }

    /// Stop the loop and wait for it to finish. No state update happens once
    /// this returns.
    pub async fn shutdown(mut self) {
        self.shutdown.send_replace(true);
        if let Some(task) = self.task.take()
            && let Err(err) = task.await
        {
            tracing::warn!(error = %err, "refresh task ended abnormally");
        }
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        self.shutdown.send_replace(true);
    }
}

async fn run(
    sampler: MetricSampler,
    dashboard: SharedDashboard,
    period: Duration,
    tx: mpsc::UnboundedSender<Event>,
    mut shutdown: watch::Receiver<bool>,
    refresh: Arc<Notify>,
) {
    tracing::info!(
        period_ms = period.as_millis() as u64,
        source = sampler.source_name(),
        "refresh scheduler started"
    );

    let sampler = Arc::new(Mutex::new(sampler));
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
                continue;
            }
            _ = ticker.tick() => {}
            _ = refresh.notified() => {
                tracing::debug!("manual refresh requested");
            }
        }

        // Sources may block on OS queries; keep them off the async workers.
        let sampler = Arc::clone(&sampler);
        let sampled = tokio::task::spawn_blocking(move || {
            sampler
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .sample()
        })
        .await;
        let snapshot = sampled.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "sampling task failed, using zero-filled snapshot");
            Snapshot::zeroed()
        });

        if *shutdown.borrow() {
            break;
        }

        let tick = {
            let _span = tracing::debug_span!("scheduler.tick").entered();
            let cpu = snapshot.cpu_percent;
            let tick = dashboard.apply(snapshot);
            tracing::debug!(tick, cpu, "dashboard updated");
            tick
        };

        if tx.send(Event::Refreshed(tick)).is_err() {
            tracing::debug!("event receiver dropped");
            break;
        }
    }

    tracing::info!("refresh scheduler stopped");
}
