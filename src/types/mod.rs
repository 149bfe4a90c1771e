//! Types module
//!
//! Contains core data structures used throughout the application:
//! - `record`: the line item record and its numeric aliases
//! - `error`: error types for the billing ledger

pub mod error;
pub mod record;

pub use error::BillingError;
pub use record::{Amount, LineItem, Quantity, Rate};
