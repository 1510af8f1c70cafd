pub mod order_store;
pub mod storage;
