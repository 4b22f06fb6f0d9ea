pub mod dashboard_repo;
pub use dashboard_repo::{DashboardRepository, DashboardStore};
