pub mod store;
pub mod timestamp;
pub mod types;
