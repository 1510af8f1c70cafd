pub mod d410_order_insights;
