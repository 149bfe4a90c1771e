//! Streaming reader over a store file
//!
//! Provides an iterator over the lines of a store, pairing each raw line with
//! its decode result. Delegates format concerns to the line_format module.
//!
//! # Design
//!
//! Callers need both views of a line: the decoded record for matching and
//! totals, and the raw bytes so rewrites can copy untouched lines verbatim.
//! The reader keeps streaming behaviour, holding one line at a time. Lines are
//! read as bytes, so a line in another encoding is just another malformed line.
//!
//! ```no_run
//! use supermarket_billing::io::store_reader::StoreReader;
//! use std::path::Path;
//!
//! let reader = StoreReader::open(Path::new("Bill.txt")).unwrap();
//! for line in reader {
//!     let line = line.unwrap();
//!     match &line.record {
//!         Ok(record) => println!("{}: {:?}", line.number, record),
//!         Err(e) => eprintln!("{}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - A missing store file is an empty store, not an error
//! - Any other failure to open the file is `StoreUnavailable`, returned from `open()`
//! - Read failures mid-file are yielded as `Err(BillingError::Io)`
//! - Malformed lines (including lines that are not valid UTF-8) are yielded as
//!   `Ok(StoredLine)` whose `record` is a Parse error carrying the line number
//! - Blank lines are skipped

use crate::io::line_format::decode;
use crate::types::{BillingError, LineItem};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

/// One non-blank line of the store
#[derive(Debug, Clone, PartialEq)]
pub struct StoredLine {
    /// 1-based line number in the file
    pub number: usize,

    /// Line bytes as stored, without the line terminator
    pub raw: Vec<u8>,

    /// Decoded record, or the parse error for a malformed line
    pub record: Result<LineItem, BillingError>,
}

impl StoredLine {
    /// Whether this line decodes to a record with the given item name
    pub fn is_item(&self, name: &str) -> bool {
        matches!(&self.record, Ok(record) if record.item == name)
    }
}

/// Streaming reader over a store file
#[derive(Debug)]
pub struct StoreReader {
    reader: Option<BufReader<File>>,
    line_num: usize,
}

impl StoreReader {
    /// Open a store file for reading
    ///
    /// # Returns
    ///
    /// * `Ok(StoreReader)` - Reader over the file, or an empty reader if the file does not exist
    /// * `Err(BillingError::StoreUnavailable)` - If the file exists but cannot be opened
    pub fn open(path: &Path) -> Result<Self, BillingError> {
        let reader = match File::open(path) {
            Ok(file) => Some(BufReader::with_capacity(8 * 1024, file)),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => return Err(BillingError::store_unavailable(path, &e)),
        };

        Ok(Self {
            reader,
            line_num: 0,
        })
    }

    /// Whether the underlying file existed when opened
    pub fn exists(&self) -> bool {
        self.reader.is_some()
    }
}

impl Iterator for StoreReader {
    type Item = Result<StoredLine, BillingError>;

    fn next(&mut self) -> Option<Self::Item> {
        let reader = self.reader.as_mut()?;

        loop {
            let mut raw = Vec::new();
            match reader.read_until(b'\n', &mut raw) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e.into())),
            }
            self.line_num += 1;
            trim_line_ending(&mut raw);

            let number = self.line_num;
            let record = match std::str::from_utf8(&raw) {
                Ok(text) if text.trim().is_empty() => continue,
                Ok(text) => decode(text),
                Err(e) => Err(BillingError::parse(format!("line is not valid UTF-8: {}", e))),
            };

            return Some(Ok(StoredLine {
                number,
                raw,
                record: record.map_err(|e| e.at_line(number)),
            }));
        }
    }
}

fn trim_line_ending(raw: &mut Vec<u8>) {
    if raw.last() == Some(&b'\n') {
        raw.pop();
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
    }
}
