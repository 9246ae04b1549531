pub mod activity;
pub mod classify;
pub mod error;
pub mod import;
pub mod query;
pub mod seed;
pub mod supervisor;

pub mod types;

pub use crate::error::PaywatchError;
pub use crate::supervisor::Supervisor;
