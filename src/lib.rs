//! Supermarket Billing Library
//! # Overview
//!
//! This library keeps a flat bill of line items (item name, unit rate,
//! quantity) in a plain-text store file and drives it from an interactive menu.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (LineItem, BillingError)
//! - [`io`] - Store line format, streaming store reader, CSV export
//! - [`core`] - Storage and billing logic:
//!   - [`core::traits`] - The `RecordStore` abstraction
//!   - [`core::file_store`] - File-backed store with rewrite-and-replace
//!   - [`core::memory_store`] - In-memory store with identical semantics
//!   - [`core::report`] - Amount and total computation, table rendering
//! - [`menu`] - Interactive menu loop
//! - [`cli`] - CLI arguments parsing
//! - [`app`] - Wiring of arguments, store and front end
//!
//! # Store Format
//!
//! One record per line, `item : rate : quantity`, in insertion order. Update
//! and delete act on the first record with a matching name and preserve the
//! relative order of everything else.
//!
//! # Operations
//!
//! - **Add**: append a record to the end of the store
//! - **Print Bill**: list every record with `amount = rate * quantity` and the total
//! - **Search**: show the first record with a given name
//! - **Update**: overwrite rate and quantity of the first match in place
//! - **Delete**: remove the first match

// Module declarations
pub mod app;
pub mod cli;
pub mod core;
pub mod io;
pub mod menu;
pub mod types;

pub use crate::core::{render, BillReport, BillRow, FileStore, MemoryStore, RecordStore};
pub use io::write_bill_csv;
pub use types::{Amount, BillingError, LineItem, Quantity, Rate};
