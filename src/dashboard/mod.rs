pub mod scheduler;
pub mod state;

pub use scheduler::{RefreshScheduler, RefreshTrigger};
pub use state::{DashboardState, DashboardView, SharedDashboard};
