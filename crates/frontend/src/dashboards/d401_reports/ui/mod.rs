mod report_views;
mod reports;

pub use reports::ReportsPage;
