mod dashboard;

pub use dashboard::DashboardOverview;
