pub mod dashboard;
pub mod filters;
pub mod orders_table;

pub use dashboard::OrderInsightsDashboard;
