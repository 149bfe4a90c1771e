//! CSV export of a rendered bill
//!
//! Writes the bill with columns: item, rate, quantity, amount, followed by a
//! closing `TOTAL` row whose amount column holds the grand total. Rows keep
//! store order.

use crate::core::report::BillReport;
use crate::types::BillingError;
use csv::WriterBuilder;
use std::io::Write;

/// Write a bill report in CSV format
///
/// # Arguments
///
/// * `report` - The rendered bill
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(BillingError::Io)` if a write error occurred
pub fn write_bill_csv(report: &BillReport, output: &mut dyn Write) -> Result<(), BillingError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);

    writer.write_record(["item", "rate", "quantity", "amount"])?;

    for row in &report.rows {
        writer.serialize(row)?;
    }

    let total = report.total.to_string();
    writer.write_record(["TOTAL", "", "", total.as_str()])?;
    writer.flush()?;

    Ok(())
}
