use thiserror::Error;

use super::snapshot::Snapshot;

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("metric source unavailable: {0}")]
    Unavailable(&'static str),
    #[error("metric source failed: {0}")]
    Failed(String),
}

/// Anything that can produce a [`Snapshot`] on demand.
pub trait MetricSource: Send {
    fn name(&self) -> &'static str;
    fn sample(&mut self) -> Result<Snapshot, SampleError>;
}

/// Wraps a [`MetricSource`] so that sampling never fails: errors are logged
/// and replaced by a zero-filled snapshot.
pub struct MetricSampler {
    source: Box<dyn MetricSource>,
    failures: u64,
}

impl MetricSampler {
    pub fn new(source: Box<dyn MetricSource>) -> Self {
        Self {
            source,
            failures: 0,
        }
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Total samples that fell back to zeros.
    pub fn failures(&self) -> u64 {
        self.failures
    }

    pub fn sample(&mut self) -> Snapshot {
        let _span = tracing::debug_span!("sampler.sample", source = self.source.name()).entered();

        match self.source.sample() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                self.failures += 1;
                tracing::warn!(
                    source = self.source.name(),
                    failures = self.failures,
                    error = %err,
                    "sample failed, using zero-filled snapshot"
                );
                Snapshot::zeroed()
            }
        }
    }
}
