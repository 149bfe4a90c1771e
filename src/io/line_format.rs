//! Store line format for line item records
//!
//! Each record occupies one line of the store in the form
//! `item : rate : quantity`. This module converts between that text form and
//! [`LineItem`]. All functions are pure (no I/O) for easy testing.
//!
//! # Format limitation
//!
//! There is no escaping. An item name containing `:` or whitespace cannot be
//! encoded in a way that decodes back to the same record; such a line is
//! rejected by [`decode`] when read back. Callers collecting names from users
//! should refuse those characters up front (see [`is_valid_item_name`]).

use crate::types::{BillingError, LineItem, Quantity, Rate};

/// Field separator used in the store
pub const FIELD_SEPARATOR: char = ':';

/// Check whether a name can be stored without corrupting the line format
pub fn is_valid_item_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains(FIELD_SEPARATOR)
        && !name.chars().any(char::is_whitespace)
}

/// Decode a stored line into a LineItem
///
/// Splits on `:` into exactly three fields and trims each. The item must be a
/// single non-empty token; rate and quantity must be integers.
///
/// # Returns
///
/// * `Ok(LineItem)` - Successfully decoded record
/// * `Err(BillingError::Parse)` - Description of why the line is malformed
///   (without line number; the reader attaches it)
pub fn decode(line: &str) -> Result<LineItem, BillingError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();

    let [item, rate, quantity] = fields.as_slice() else {
        return Err(BillingError::parse(format!(
            "expected 3 '{}'-separated fields, found {}",
            FIELD_SEPARATOR,
            fields.len()
        )));
    };

    if item.is_empty() {
        return Err(BillingError::parse("missing item name"));
    }
    if item.chars().any(char::is_whitespace) {
        return Err(BillingError::parse(format!(
            "item name '{}' contains whitespace",
            item
        )));
    }

    let rate: Rate = rate
        .parse()
        .map_err(|_| BillingError::parse(format!("invalid rate '{}' for '{}'", rate, item)))?;
    let quantity: Quantity = quantity.parse().map_err(|_| {
        BillingError::parse(format!("invalid quantity '{}' for '{}'", quantity, item))
    })?;

    Ok(LineItem::new(*item, rate, quantity))
}

/// Encode a LineItem as a store line (without trailing newline)
pub fn encode(record: &LineItem) -> String {
    format!(
        "{} {} {} {} {}",
        record.item, FIELD_SEPARATOR, record.rate, FIELD_SEPARATOR, record.quantity
    )
}
