use std::sync::{Arc, PoisonError, RwLock};

use serde::Serialize;

use crate::system::history::HistoryBuffer;
use crate::system::snapshot::Snapshot;

/// Latest snapshot plus the rolling CPU history.
#[derive(Debug, Clone)]
pub struct DashboardState {
    latest: Arc<Snapshot>,
    cpu_history: HistoryBuffer,
    tick: u64,
}

impl DashboardState {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            latest: Arc::new(Snapshot::zeroed()),
            cpu_history: HistoryBuffer::new(history_capacity),
            tick: 0,
        }
    }

    /// Replace the snapshot and record its CPU reading in one step.
    pub fn apply(&mut self, snapshot: Snapshot) {
        self.cpu_history.append(snapshot.cpu_percent);
        self.latest = Arc::new(snapshot);
        self.tick += 1;
    }

    pub fn latest(&self) -> &Snapshot {
        &self.latest
    }

    pub fn cpu_history(&self) -> &HistoryBuffer {
        &self.cpu_history
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn view(&self) -> DashboardView {
        DashboardView {
            tick: self.tick,
            latest: Arc::clone(&self.latest),
            cpu_history: self.cpu_history.to_vec(),
        }
    }
}

/// Immutable copy of the state taken under a single lock acquisition, so
/// every panel drawn from it sees the same tick.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub tick: u64,
    pub latest: Arc<Snapshot>,
    pub cpu_history: Vec<f64>,
}

/// Cloneable handle shared by the scheduler (writer) and the UI (readers).
#[derive(Debug, Clone)]
pub struct SharedDashboard {
    inner: Arc<RwLock<DashboardState>>,
}

impl SharedDashboard {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(DashboardState::new(history_capacity))),
        }
    }

    pub fn apply(&self, snapshot: Snapshot) -> u64 {
        let mut state = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        state.apply(snapshot);
        state.tick()
    }

    pub fn view(&self) -> DashboardView {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .view()
    }
}
