mod insights;
mod summary;
pub mod views;

pub use summary::DashboardReport;

pub(crate) use insights::generate_highlights;
