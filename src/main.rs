//! Supermarket billing CLI
//!
//! Interactive menu for keeping a bill of line items in a plain-text store.
//!
//! # Usage
//!
//! ```bash
//! cargo run                                   # menu over ./Bill.txt
//! cargo run -- --store shop.txt               # menu over another store
//! cargo run -- --export - > bill.csv          # print the bill as CSV and exit
//! RUST_LOG=debug cargo run                    # log store operations to stderr
//! ```
//!
//! # Exit Codes
//!
//! - 0: Session ended through the exit choice or closed input, or export succeeded
//! - 1: Console I/O failed, or the export could not be written

use std::process;
use supermarket_billing::{app, cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let args = cli::parse_args();

    // Logs go to stderr so they never interleave with the menu on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = app::run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
