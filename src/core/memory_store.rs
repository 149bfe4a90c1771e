//! In-memory record store
//!
//! A Vec-backed implementation of [`RecordStore`] with the same first-match
//! and ordering rules as the file store. Useful for driving the menu and the
//! report without touching the filesystem.

use crate::core::traits::RecordStore;
use crate::types::{BillingError, LineItem, Quantity, Rate};

/// Record store held entirely in memory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    records: Vec<LineItem>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, item: &str) -> Result<usize, BillingError> {
        self.records
            .iter()
            .position(|record| record.item == item)
            .ok_or_else(|| BillingError::not_found(item))
    }
}

impl From<Vec<LineItem>> for MemoryStore {
    fn from(records: Vec<LineItem>) -> Self {
        MemoryStore { records }
    }
}

impl RecordStore for MemoryStore {
    fn append(&mut self, record: &LineItem) -> Result<(), BillingError> {
        self.records.push(record.clone());
        Ok(())
    }

    fn find_first(&self, item: &str) -> Result<LineItem, BillingError> {
        let index = self.position(item)?;
        Ok(self.records[index].clone())
    }

    fn update(
        &mut self,
        item: &str,
        rate: Rate,
        quantity: Quantity,
    ) -> Result<LineItem, BillingError> {
        let index = self.position(item)?;
        let record = &mut self.records[index];
        record.rate = rate;
        record.quantity = quantity;
        Ok(record.clone())
    }

    fn delete(&mut self, item: &str) -> Result<LineItem, BillingError> {
        let index = self.position(item)?;
        Ok(self.records.remove(index))
    }

    fn records(&self) -> Result<Vec<LineItem>, BillingError> {
        Ok(self.records.clone())
    }
}
