//! Line item types for the billing ledger
//!
//! This module defines the single record type persisted in the store and the
//! integer aliases used for its numeric fields.

use serde::{Deserialize, Serialize};

/// Unit price of an item
///
/// Plain integer units, no currency or decimal modelling.
pub type Rate = i64;

/// Number of units purchased
pub type Quantity = i64;

/// Derived `rate * quantity` for a line
pub type Amount = i64;

/// One billed item as stored on disk
///
/// The item name acts as the lookup key for search, update and delete.
/// The store does not enforce uniqueness; operations act on the first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item name, a single token without whitespace or `:`
    pub item: String,

    /// Unit price
    pub rate: Rate,

    /// Units purchased
    pub quantity: Quantity,
}

impl LineItem {
    /// Create a new line item
    pub fn new(item: impl Into<String>, rate: Rate, quantity: Quantity) -> Self {
        LineItem {
            item: item.into(),
            rate,
            quantity,
        }
    }

    /// Compute `rate * quantity`
    ///
    /// # Returns
    ///
    /// * `Some(Amount)` - The line amount
    /// * `None` - If the multiplication overflows
    pub fn amount(&self) -> Option<Amount> {
        self.rate.checked_mul(self.quantity)
    }

    /// Return a copy with new rate and quantity, keeping the name
    pub fn with_values(&self, rate: Rate, quantity: Quantity) -> Self {
        LineItem {
            item: self.item.clone(),
            rate,
            quantity,
        }
    }
}
