//! Core business logic module
//!
//! This module contains the record storage and billing components:
//! - `traits` - The `RecordStore` abstraction shared by all backends
//! - `file_store` - Store backed by the line-oriented text file
//! - `memory_store` - Vec-backed store with the same semantics
//! - `report` - Bill rendering (amounts, total, text table)

pub mod file_store;
pub mod memory_store;
pub mod report;
pub mod traits;

pub use file_store::{FileStore, DEFAULT_STORE_PATH};
pub use memory_store::MemoryStore;
pub use report::{render, BillReport, BillRow};
pub use traits::RecordStore;
