use serde::Serialize;

use super::process::ProcessInfo;

/// One tick's worth of sampled metrics. Never mutated after it is produced;
/// the next tick builds a fresh one.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Snapshot {
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub disk_percent: f64,
    /// KB/s
    pub network_in: u64,
    /// KB/s
    pub network_out: u64,
    pub processes: Vec<ProcessInfo>,
}

impl Snapshot {
    /// The zero-filled snapshot used when a sample cannot be taken.
    pub fn zeroed() -> Self {
        Self::default()
    }
}

/// Clamp a raw percentage into `[0, 100]`, mapping NaN to 0.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}
