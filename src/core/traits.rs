//! Core trait for record storage
//!
//! This module defines the storage abstraction that both the file-backed
//! store and the in-memory store implement, so the report and the menu can
//! run against either.

use crate::types::{BillingError, LineItem, Quantity, Rate};

/// Trait for an ordered list of line item records
///
/// Lookups match the item name exactly (case-sensitive) and act on the first
/// matching record only. Implementations must preserve the relative order of
/// records they do not touch.
pub trait RecordStore {
    /// Append a record at the end of the store
    fn append(&mut self, record: &LineItem) -> Result<(), BillingError>;

    /// Find the first record with the given item name
    fn find_first(&self, item: &str) -> Result<LineItem, BillingError>;

    /// Overwrite rate and quantity of the first matching record, in place
    ///
    /// Returns the record as written.
    fn update(
        &mut self,
        item: &str,
        rate: Rate,
        quantity: Quantity,
    ) -> Result<LineItem, BillingError>;

    /// Remove the first matching record
    ///
    /// Returns the record that was removed.
    fn delete(&mut self, item: &str) -> Result<LineItem, BillingError>;

    /// All well-formed records in store order
    fn records(&self) -> Result<Vec<LineItem>, BillingError>;
}
