//! Bill rendering
//!
//! Reads every record from a store, computes each line's amount and the
//! running total, and renders the result as a text table. Rendering never
//! mutates the store.

use crate::core::traits::RecordStore;
use crate::types::{Amount, BillingError, LineItem, Quantity, Rate};
use serde::Serialize;
use std::io::{self, Write};

/// One row of the bill
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BillRow {
    pub item: String,
    pub rate: Rate,
    pub quantity: Quantity,
    pub amount: Amount,
}

/// Rendered bill: rows in store order plus the grand total
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BillReport {
    pub rows: Vec<BillRow>,
    pub total: Amount,
}

impl BillReport {
    /// Build a report from records, in the given order
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if any amount or the running total
    /// does not fit in an `i64`.
    pub fn from_records(records: Vec<LineItem>) -> Result<Self, BillingError> {
        let mut report = BillReport::default();

        for record in records {
            let amount = record
                .amount()
                .ok_or_else(|| BillingError::arithmetic_overflow("amount", &record.item))?;
            report.total = report
                .total
                .checked_add(amount)
                .ok_or_else(|| BillingError::arithmetic_overflow("total", &record.item))?;
            report.rows.push(BillRow {
                item: record.item,
                rate: record.rate,
                quantity: record.quantity,
                amount,
            });
        }

        Ok(report)
    }

    /// Write the bill as an aligned text table
    pub fn write_table(&self, out: &mut dyn Write) -> io::Result<()> {
        let iw = column_width("Item", self.rows.iter().map(|r| r.item.chars().count()));
        let rw = column_width("Rate", self.rows.iter().map(|r| r.rate.to_string().len()));
        let qw = column_width(
            "Quantity",
            self.rows.iter().map(|r| r.quantity.to_string().len()),
        );
        let aw = column_width(
            "Amount",
            self.rows.iter().map(|r| r.amount.to_string().len()),
        );

        writeln!(
            out,
            "\t{:<iw$} | {:>rw$} | {:>qw$} | {:>aw$}",
            "Item", "Rate", "Quantity", "Amount"
        )?;
        for row in &self.rows {
            writeln!(
                out,
                "\t{:<iw$} | {:>rw$} | {:>qw$} | {:>aw$}",
                row.item, row.rate, row.quantity, row.amount
            )?;
        }
        writeln!(out, "\t{}", "-".repeat(iw + rw + qw + aw + 9))?;
        writeln!(out, "\tTotal Bill: {}", self.total)
    }
}

fn column_width(header: &str, cells: impl Iterator<Item = usize>) -> usize {
    cells.max().unwrap_or(0).max(header.len())
}

/// Render the bill for everything currently in the store
pub fn render<S: RecordStore + ?Sized>(store: &S) -> Result<BillReport, BillingError> {
    BillReport::from_records(store.records()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MemoryStore;

    fn row(item: &str, rate: Rate, quantity: Quantity, amount: Amount) -> BillRow {
        BillRow {
            item: item.to_string(),
            rate,
            quantity,
            amount,
        }
    }

    #[test]
    fn test_render_empty_store() {
        let report = render(&MemoryStore::new()).unwrap();

        assert!(report.rows.is_empty());
        assert_eq!(report.total, 0);
    }

    #[test]
    fn test_render_computes_amounts_and_total() {
        let store = MemoryStore::from(vec![
            LineItem::new("Soap", 20, 3),
            LineItem::new("Oil", 150, 2),
        ]);

        let report = render(&store).unwrap();

        assert_eq!(
            report.rows,
            vec![row("Soap", 20, 3, 60), row("Oil", 150, 2, 300)]
        );
        assert_eq!(report.total, 360);
    }

    #[test]
    fn test_total_is_sum_of_amounts() {
        let records: Vec<_> = (1..=20)
            .map(|i| LineItem::new(format!("item{}", i), i, i + 1))
            .collect();

        let report = BillReport::from_records(records).unwrap();

        let expected: Amount = report.rows.iter().map(|r| r.rate * r.quantity).sum();
        assert_eq!(report.total, expected);
    }

    #[test]
    fn test_amount_overflow() {
        let result = BillReport::from_records(vec![LineItem::new("Gold", i64::MAX, 2)]);

        assert_eq!(
            result.unwrap_err(),
            BillingError::arithmetic_overflow("amount", "Gold")
        );
    }

    #[test]
    fn test_total_overflow() {
        let result = BillReport::from_records(vec![
            LineItem::new("Gold", i64::MAX, 1),
            LineItem::new("Silver", 1, 1),
        ]);

        assert_eq!(
            result.unwrap_err(),
            BillingError::arithmetic_overflow("total", "Silver")
        );
    }

    #[test]
    fn test_write_table() {
        let report = BillReport {
            rows: vec![row("Soap", 20, 3, 60), row("Oil", 150, 2, 300)],
            total: 360,
        };
        let mut output = Vec::new();

        report.write_table(&mut output).unwrap();

        let expected = "\tItem | Rate | Quantity | Amount\n\
                        \tSoap |   20 |        3 |     60\n\
                        \tOil  |  150 |        2 |    300\n\
                        \t-------------------------------\n\
                        \tTotal Bill: 360\n";
        assert_eq!(String::from_utf8(output).unwrap(), expected);
    }

    #[test]
    fn test_write_table_widens_for_long_names() {
        let report = BillReport {
            rows: vec![row("Detergent", 1, 1, 1)],
            total: 1,
        };
        let mut output = Vec::new();

        report.write_table(&mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("\tItem      | Rate | Quantity | Amount\n"));
        assert!(text.contains("\tDetergent |    1 |        1 |      1\n"));
    }
}
