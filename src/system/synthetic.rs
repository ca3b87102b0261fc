use std::time::{SystemTime, UNIX_EPOCH};

use super::process::{ProcessInfo, ProcessState};
use super::snapshot::Snapshot;
use super::source::{MetricSource, SampleError};

/// (pid, name, cpu scale, memory scale)
const PROCESSES: [(u32, &str, f64, f64); 4] = [
    (1, "docker", 0.5, 1.0),
    (123, "go-app", 15.0, 5.0),
    (456, "nginx", 2.0, 1.5),
    (789, "db-server", 10.0, 8.0),
];

const NETWORK_IN_MAX: u64 = 1000;
const NETWORK_OUT_MAX: u64 = 500;

/// LCG with the Numerical Recipes constants.
#[derive(Debug, Clone)]
struct SeededRng {
    state: u64,
}

impl SeededRng {
    fn new(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    /// Uniform in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        // Top 53 bits so the result is exactly representable and never 1.0.
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn next_below(&mut self, max: u64) -> u64 {
        if max == 0 {
            return 0;
        }
        (self.next_u64() >> 33) % max
    }
}

/// Random stand-in for a real metric source.
pub struct SyntheticSource {
    rng: SeededRng,
}

impl SyntheticSource {
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_default()
        });
        Self {
            rng: SeededRng::new(seed),
        }
    }
}

impl MetricSource for SyntheticSource {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    fn sample(&mut self) -> Result<Snapshot, SampleError> {
        let rng = &mut self.rng;
        let cpu_percent = rng.next_f64() * 100.0;
        let memory_percent = rng.next_f64() * 100.0;
        let disk_percent = rng.next_f64() * 100.0;
        let network_in = rng.next_below(NETWORK_IN_MAX);
        let network_out = rng.next_below(NETWORK_OUT_MAX);

        let processes = PROCESSES
            .iter()
            .map(|&(pid, name, cpu_scale, mem_scale)| ProcessInfo {
                pid,
                name: name.to_string(),
                cpu_percent: rng.next_f64() * cpu_scale,
                memory_percent: rng.next_f64() * mem_scale,
                status: ProcessState::Running,
            })
            .collect();

        Ok(Snapshot {
            cpu_percent,
            memory_percent,
            disk_percent,
            network_in,
            network_out,
            processes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_stay_in_reference_ranges() {
        let mut source = SyntheticSource::new(Some(7));
        for _ in 0..500 {
            let snap = source.sample().unwrap();
            for pct in [snap.cpu_percent, snap.memory_percent, snap.disk_percent] {
                assert!((0.0..100.0).contains(&pct), "{pct} out of range");
            }
            assert!(snap.network_in < NETWORK_IN_MAX);
            assert!(snap.network_out < NETWORK_OUT_MAX);
            assert_eq!(snap.processes.len(), 4);
            for (p, &(pid, name, cpu_scale, mem_scale)) in snap.processes.iter().zip(&PROCESSES) {
                assert_eq!(p.pid, pid);
                assert_eq!(p.name, name);
                assert!(p.cpu_percent >= 0.0 && p.cpu_percent < cpu_scale);
                assert!(p.memory_percent >= 0.0 && p.memory_percent < mem_scale);
                assert_eq!(p.status, ProcessState::Running);
            }
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SyntheticSource::new(Some(42));
        let mut b = SyntheticSource::new(Some(42));
        for _ in 0..10 {
            assert_eq!(a.sample().unwrap(), b.sample().unwrap());
        }
    }

    #[test]
    fn consecutive_samples_differ() {
        let mut source = SyntheticSource::new(Some(1));
        let first = source.sample().unwrap();
        let second = source.sample().unwrap();
        assert_ne!(first, second);
    }
}
