use std::fmt;

use serde::Serialize;

/// Scheduler state of a process as reported by the metric source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum ProcessState {
    Running,
    Sleeping,
    Idle,
    Stopped,
    Zombie,
    Dead,
    Other(String),
}

impl ProcessState {
    pub fn label(&self) -> &str {
        match self {
            ProcessState::Running => "Running",
            ProcessState::Sleeping => "Sleeping",
            ProcessState::Idle => "Idle",
            ProcessState::Stopped => "Stopped",
            ProcessState::Zombie => "Zombie",
            ProcessState::Dead => "Dead",
            ProcessState::Other(label) => label,
        }
    }
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<sysinfo::ProcessStatus> for ProcessState {
    fn from(status: sysinfo::ProcessStatus) -> Self {
        use sysinfo::ProcessStatus;
        match status {
            ProcessStatus::Run => ProcessState::Running,
            ProcessStatus::Sleep => ProcessState::Sleeping,
            ProcessStatus::Idle => ProcessState::Idle,
            ProcessStatus::Stop => ProcessState::Stopped,
            ProcessStatus::Zombie => ProcessState::Zombie,
            ProcessStatus::Dead => ProcessState::Dead,
            other => ProcessState::Other(other.to_string()),
        }
    }
}

/// One row of the process table. The pid is only unique within the snapshot
/// that produced it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProcessInfo {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub status: ProcessState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_labels() {
        assert_eq!(ProcessState::Running.label(), "Running");
        assert_eq!(ProcessState::Zombie.to_string(), "Zombie");
        assert_eq!(ProcessState::Other("Parked".into()).label(), "Parked");
    }

    #[test]
    fn sysinfo_status_maps_to_state() {
        assert_eq!(
            ProcessState::from(sysinfo::ProcessStatus::Run),
            ProcessState::Running
        );
        assert_eq!(
            ProcessState::from(sysinfo::ProcessStatus::Sleep),
            ProcessState::Sleeping
        );
        assert!(matches!(
            ProcessState::from(sysinfo::ProcessStatus::Unknown(42)),
            ProcessState::Other(_)
        ));
    }
}
