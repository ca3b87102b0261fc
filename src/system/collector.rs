use std::time::Instant;

use sysinfo::{Disks, Networks, ProcessRefreshKind, ProcessesToUpdate, System};

use super::process::ProcessInfo;
use super::snapshot::{Snapshot, clamp_percent};
use super::source::{MetricSource, SampleError};

/// Metric source backed by the host OS through `sysinfo`.
pub struct Collector {
    sys: System,
    disks: Disks,
    networks: Networks,
    last_network_refresh: Instant,
    max_processes: usize,
}

impl Collector {
    pub fn new(max_processes: usize) -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        sys.refresh_cpu_usage();
        sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_memory().with_cpu(),
        );
        Collector {
            sys,
            disks: Disks::new_with_refreshed_list(),
            networks: Networks::new_with_refreshed_list(),
            last_network_refresh: Instant::now(),
            max_processes,
        }
    }

    fn refresh(&mut self) {
        self.sys.refresh_memory();
        self.sys.refresh_cpu_usage();
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_memory().with_cpu(),
        );
        self.disks.refresh(true);
    }

    fn disk_percent(&self) -> f64 {
        let (total, available) = self
            .disks
            .list()
            .iter()
            .fold((0u64, 0u64), |(total, available), disk| {
                (total + disk.total_space(), available + disk.available_space())
            });
        if total == 0 {
            return 0.0;
        }
        clamp_percent(total.saturating_sub(available) as f64 / total as f64 * 100.0)
    }

    /// Returns (in, out) in KB/s since the previous call.
    fn network_rates(&mut self) -> (u64, u64) {
        self.networks.refresh(true);
        let elapsed = self.last_network_refresh.elapsed().as_secs_f64();
        self.last_network_refresh = Instant::now();

        let (received, transmitted) = self
            .networks
            .iter()
            .fold((0u64, 0u64), |(rx, tx), (_, data)| {
                (rx + data.received(), tx + data.transmitted())
            });
        if elapsed <= 0.0 {
            return (0, 0);
        }
        let per_sec = |bytes: u64| (bytes as f64 / 1024.0 / elapsed) as u64;
        (per_sec(received), per_sec(transmitted))
    }

    fn top_processes(&self, total_memory: u64) -> Vec<ProcessInfo> {
        let mut processes: Vec<ProcessInfo> = self
            .sys
            .processes()
            .iter()
            .map(|(pid, process)| ProcessInfo {
                pid: pid.as_u32(),
                name: process.name().to_string_lossy().to_string(),
                cpu_percent: f64::from(process.cpu_usage()).max(0.0),
                memory_percent: clamp_percent(
                    process.memory() as f64 / total_memory as f64 * 100.0,
                ),
                status: process.status().into(),
            })
            .collect();

        processes.sort_by(|a, b| {
            b.cpu_percent
                .partial_cmp(&a.cpu_percent)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.pid.cmp(&b.pid))
        });
        processes.truncate(self.max_processes);
        processes
    }
}

impl MetricSource for Collector {
    fn name(&self) -> &'static str {
        "system"
    }

    fn sample(&mut self) -> Result<Snapshot, SampleError> {
        self.refresh();

        let total_memory = self.sys.total_memory();
        if total_memory == 0 {
            return Err(SampleError::Unavailable("memory"));
        }
        let memory_percent =
            clamp_percent(self.sys.used_memory() as f64 / total_memory as f64 * 100.0);
        let (network_in, network_out) = self.network_rates();

        Ok(Snapshot {
            cpu_percent: clamp_percent(f64::from(self.sys.global_cpu_usage())),
            memory_percent,
            disk_percent: self.disk_percent(),
            network_in,
            network_out,
            processes: self.top_processes(total_memory),
        })
    }
}
