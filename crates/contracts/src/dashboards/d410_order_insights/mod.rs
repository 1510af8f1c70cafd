pub mod config;
pub mod dto;
pub mod insights;

pub use config::AdminDashboardConfig;
pub use dto::*;
pub use insights::{
    compute_filtered_view, compute_filtered_view_at, compute_stats, parse_order_date,
    OrderInsights,
};
