pub mod d410_order_insights;

pub use d410_order_insights::ui::OrderInsightsDashboard;
