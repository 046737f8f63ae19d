//! Catalog domain types and the abstractions the commands build on

pub mod carousel;
pub mod catalog;
pub mod category;
pub mod config;
pub mod fund;
pub mod impact;
pub mod log;

// Re-export main types for cleaner imports
pub use catalog::FundStore;
pub use fund::{FundRecord, FundType, Returns};
