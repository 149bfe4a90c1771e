use crate::core::DEFAULT_STORE_PATH;
use clap::Parser;
use std::path::PathBuf;

/// Interactive billing ledger backed by a plain-text store
#[derive(Parser, Debug)]
#[command(name = "supermarket-billing")]
#[command(about = "Interactive billing ledger backed by a plain-text store", long_about = None)]
pub struct CliArgs {
    /// Store file holding one `item : rate : quantity` record per line
    #[arg(
        long = "store",
        value_name = "PATH",
        default_value = DEFAULT_STORE_PATH,
        help = "Path to the store file (created on first add)"
    )]
    pub store: PathBuf,

    /// Write the bill as CSV and exit instead of opening the menu
    #[arg(
        long = "export",
        value_name = "PATH",
        help = "Write the bill as CSV to PATH ('-' for stdout) and exit"
    )]
    pub export: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long = "verbose", help = "Log store operations to stderr")]
    pub verbose: bool,
}

/// What the program does once arguments are parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Interactive menu on stdin/stdout
    Interactive,
    /// One-shot CSV export
    Export(ExportTarget),
}

/// Destination of a CSV export
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    Stdout,
    File(PathBuf),
}

impl CliArgs {
    /// Determine the run mode from the parsed flags
    pub fn mode(&self) -> RunMode {
        match &self.export {
            None => RunMode::Interactive,
            Some(path) if path.as_os_str() == "-" => RunMode::Export(ExportTarget::Stdout),
            Some(path) => RunMode::Export(ExportTarget::File(path.clone())),
        }
    }

    /// Default log filter when `RUST_LOG` is not set
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
