//! Error types for the billing ledger
//!
//! This module defines all error types that can occur while reading, writing
//! and reporting on the item store. Errors are designed to be descriptive and
//! user-friendly, since the menu prints them straight to the terminal.
//!
//! # Error Categories
//!
//! - **Store Errors**: store file cannot be opened, other I/O failures
//! - **Lookup Errors**: requested item is absent
//! - **Input Errors**: unrecognised menu choice
//! - **Parse Errors**: malformed stored line
//! - **Arithmetic Errors**: overflow computing an amount or the total

use std::path::Path;
use thiserror::Error;

/// Main error type for the billing ledger
///
/// None of these is fatal to an interactive session: the menu reports the
/// error and prompts again.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BillingError {
    /// The store file (or its rewrite target) could not be opened
    ///
    /// Typically a permission problem or a missing parent directory.
    #[error("Store '{path}' is unavailable: {message}")]
    StoreUnavailable {
        /// Path of the file that could not be opened
        path: String,
        /// Description of the underlying failure
        message: String,
    },

    /// No record with the requested item name exists
    #[error("Item '{item}' not found")]
    NotFound {
        /// The item name that was looked up
        item: String,
    },

    /// Menu selection outside the recognised set
    #[error("Invalid choice '{input}'")]
    InvalidChoice {
        /// The raw input entered at the menu prompt
        input: String,
    },

    /// A stored line could not be decoded into a record
    ///
    /// Recoverable: the line is skipped on read and copied verbatim on rewrite.
    #[error("Malformed record{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Parse {
        /// Line number in the store (if known)
        line: Option<usize>,
        /// Description of the parsing error
        message: String,
    },

    /// I/O error while reading or writing the store
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// Arithmetic overflow while computing an amount or total
    #[error("Arithmetic overflow in {operation} for item '{item}'")]
    ArithmeticOverflow {
        /// Computation that overflowed
        operation: String,
        /// Item whose row triggered the overflow
        item: String,
    },
}

impl From<std::io::Error> for BillingError {
    fn from(error: std::io::Error) -> Self {
        BillingError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for BillingError {
    fn from(error: csv::Error) -> Self {
        BillingError::Io {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl BillingError {
    /// Create a StoreUnavailable error from a path and the failure that caused it
    pub fn store_unavailable(path: &Path, error: &std::io::Error) -> Self {
        BillingError::StoreUnavailable {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }

    /// Create a NotFound error
    pub fn not_found(item: &str) -> Self {
        BillingError::NotFound {
            item: item.to_string(),
        }
    }

    /// Create an InvalidChoice error
    pub fn invalid_choice(input: &str) -> Self {
        BillingError::InvalidChoice {
            input: input.to_string(),
        }
    }

    /// Create a Parse error without line information
    pub fn parse(message: impl Into<String>) -> Self {
        BillingError::Parse {
            line: None,
            message: message.into(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, item: &str) -> Self {
        BillingError::ArithmeticOverflow {
            operation: operation.to_string(),
            item: item.to_string(),
        }
    }

    /// Attach a line number to a Parse error; other variants pass through
    pub fn at_line(self, number: usize) -> Self {
        match self {
            BillingError::Parse { message, .. } => BillingError::Parse {
                line: Some(number),
                message,
            },
            other => other,
        }
    }
}
