//! Program orchestration
//!
//! Wires the parsed CLI arguments to a file store and either runs the
//! interactive menu on stdin/stdout or performs a one-shot CSV export.

use crate::cli::{CliArgs, ExportTarget, RunMode};
use crate::core::{render, FileStore, RecordStore};
use crate::io::write_bill_csv;
use crate::menu::MenuController;
use crate::types::BillingError;
use std::fs::File;
use std::io::{self, Write};
use tracing::info;

/// Run the program for the given arguments
///
/// # Errors
///
/// Returns an error only for failures that should end the process: console
/// I/O in interactive mode, or any failure while exporting.
pub fn run(args: &CliArgs) -> Result<(), BillingError> {
    let store = FileStore::new(&args.store);
    info!(store = %store.path().display(), mode = ?args.mode(), "Starting");

    match args.mode() {
        RunMode::Interactive => {
            let stdin = io::stdin();
            MenuController::new(store, stdin.lock(), io::stdout()).run()?;
            Ok(())
        }
        RunMode::Export(target) => export_bill(&store, &target),
    }
}

/// Render the store's bill and write it as CSV to the target
pub fn export_bill<S: RecordStore + ?Sized>(
    store: &S,
    target: &ExportTarget,
) -> Result<(), BillingError> {
    let report = render(store)?;

    match target {
        ExportTarget::Stdout => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_bill_csv(&report, &mut out)?;
            out.flush()?;
        }
        ExportTarget::File(path) => {
            let mut file = File::create(path).map_err(|e| BillingError::Io {
                message: format!("cannot create '{}': {}", path.display(), e),
            })?;
            write_bill_csv(&report, &mut file)?;
            info!(path = %path.display(), rows = report.rows.len(), "Exported bill");
        }
    }

    Ok(())
}
