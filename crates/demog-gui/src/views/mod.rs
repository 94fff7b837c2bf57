//! View components

mod chart;
mod dashboard;

pub use chart::ChartView;
pub use dashboard::DashboardView;
