//! I/O module
//!
//! Handles the store's text format and report output.
//!
//! # Components
//!
//! - `line_format` - Store line format (record decode/encode)
//! - `store_reader` - Streaming reader over a store file with line numbers
//! - `csv_export` - CSV serialization of a rendered bill

pub mod csv_export;
pub mod line_format;
pub mod store_reader;

pub use csv_export::write_bill_csv;
pub use line_format::{decode, encode, is_valid_item_name};
pub use store_reader::{StoreReader, StoredLine};
