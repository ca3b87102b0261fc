pub mod collector;
pub mod history;
pub mod process;
pub mod snapshot;
pub mod source;
pub mod synthetic;

use source::MetricSource;

/// Which metric source to sample from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Synthetic,
    System,
}

impl SourceKind {
    /// `None` for names that match no source.
    pub fn from_config_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "synthetic" | "fake" => Some(SourceKind::Synthetic),
            "system" | "sysinfo" | "os" => Some(SourceKind::System),
            _ => None,
        }
    }

    pub fn build(self, seed: Option<u64>, max_processes: usize) -> Box<dyn MetricSource> {
        match self {
            SourceKind::Synthetic => Box::new(synthetic::SyntheticSource::new(seed)),
            SourceKind::System => Box::new(collector::Collector::new(max_processes)),
        }
    }
}
