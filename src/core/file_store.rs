//! File-backed record store
//!
//! This module provides the FileStore component, the single point through
//! which the store file is read and written. There is no resident copy of the
//! records: every operation re-reads the file.
//!
//! # Rewrite-and-replace
//!
//! Update and delete share one routine: stream the store into a sibling
//! temporary file, applying the edit to the first matching record and copying
//! every other line verbatim, then `rename` the temporary file over the
//! original. The replacement keeps the store's permissions. If no record
//! matches, or any step fails, the temporary file is discarded and the store is
//! left untouched.
//!
//! # Malformed Lines
//!
//! Lines that do not decode are skipped (with a warning) when reading and
//! copied unchanged when rewriting. Blank lines are dropped on rewrite.

use crate::core::traits::RecordStore;
use crate::io::line_format::encode;
use crate::io::store_reader::StoreReader;
use crate::types::{BillingError, LineItem, Quantity, Rate};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default store file name, relative to the working directory
pub const DEFAULT_STORE_PATH: &str = "Bill.txt";

/// Record store backed by a line-oriented text file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store for the given file path
    ///
    /// The file is not touched until the first operation. A missing file
    /// reads as an empty store and is created by the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    /// Path of the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling path used while rewriting
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Rewrite the store, applying `edit` to the first record named `item`
    ///
    /// `edit` returns the replacement record, or `None` to drop the line.
    ///
    /// # Returns
    ///
    /// * `Ok(LineItem)` - The record as it was before the edit
    /// * `Err(BillingError::NotFound)` - No record matched; store untouched
    /// * `Err(BillingError::StoreUnavailable)` - Store or temp file could not be opened
    fn rewrite<F>(&self, item: &str, edit: F) -> Result<LineItem, BillingError>
    where
        F: FnOnce(&LineItem) -> Option<LineItem>,
    {
        let reader = StoreReader::open(&self.path)?;
        if !reader.exists() {
            return Err(BillingError::not_found(item));
        }

        let temp_path = self.temp_path();
        let file =
            File::create(&temp_path).map_err(|e| BillingError::store_unavailable(&temp_path, &e))?;

        match self.copy_with_edit(reader, BufWriter::new(file), item, edit) {
            Ok(Some(original)) => match self.replace_with(&temp_path) {
                Ok(()) => Ok(original),
                Err(e) => {
                    discard(&temp_path);
                    Err(e)
                }
            },
            Ok(None) => {
                discard(&temp_path);
                Err(BillingError::not_found(item))
            }
            Err(e) => {
                discard(&temp_path);
                Err(e)
            }
        }
    }

    /// Move a finished rewrite over the store, keeping the store's permissions
    fn replace_with(&self, temp_path: &Path) -> Result<(), BillingError> {
        let permissions = fs::metadata(&self.path)?.permissions();
        fs::set_permissions(temp_path, permissions)?;
        fs::rename(temp_path, &self.path)?;
        Ok(())
    }

    fn copy_with_edit<F>(
        &self,
        reader: StoreReader,
        mut out: BufWriter<File>,
        item: &str,
        edit: F,
    ) -> Result<Option<LineItem>, BillingError>
    where
        F: FnOnce(&LineItem) -> Option<LineItem>,
    {
        let mut edit = Some(edit);
        let mut original = None;

        for line in reader {
            let line = line?;

            if original.is_none() && line.is_item(item) {
                if let (Ok(record), Some(edit)) = (&line.record, edit.take()) {
                    if let Some(replacement) = edit(record) {
                        writeln!(out, "{}", encode(&replacement))?;
                    }
                    original = Some(record.clone());
                    continue;
                }
            }

            if let Err(e) = &line.record {
                warn!(path = %self.path.display(), error = %e, "Copying malformed line unchanged");
            }
            out.write_all(&line.raw)?;
            out.write_all(b"\n")?;
        }

        let file = out.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;
        Ok(original)
    }
}

/// Remove a leftover temp file; the store itself is never affected
fn discard(temp_path: &Path) {
    if let Err(e) = fs::remove_file(temp_path) {
        warn!(path = %temp_path.display(), error = %e, "Could not remove temp file");
    }
}

impl RecordStore for FileStore {
    fn append(&mut self, record: &LineItem) -> Result<(), BillingError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| BillingError::store_unavailable(&self.path, &e))?;

        writeln!(file, "{}", encode(record))?;
        debug!(path = %self.path.display(), item = %record.item, "Appended record");
        Ok(())
    }

    fn find_first(&self, item: &str) -> Result<LineItem, BillingError> {
        for line in StoreReader::open(&self.path)? {
            let line = line?;
            match line.record {
                Ok(record) if record.item == item => {
                    debug!(item, line = line.number, "Found record");
                    return Ok(record);
                }
                Ok(_) => {}
                Err(e) => warn!(path = %self.path.display(), error = %e, "Skipping malformed line"),
            }
        }
        Err(BillingError::not_found(item))
    }

    fn update(
        &mut self,
        item: &str,
        rate: Rate,
        quantity: Quantity,
    ) -> Result<LineItem, BillingError> {
        let original = self.rewrite(item, |record| Some(record.with_values(rate, quantity)))?;
        debug!(item, rate, quantity, "Updated record");
        Ok(original.with_values(rate, quantity))
    }

    fn delete(&mut self, item: &str) -> Result<LineItem, BillingError> {
        let removed = self.rewrite(item, |_| None)?;
        debug!(item, "Deleted record");
        Ok(removed)
    }

    fn records(&self) -> Result<Vec<LineItem>, BillingError> {
        let mut records = Vec::new();
        for line in StoreReader::open(&self.path)? {
            match line?.record {
                Ok(record) => records.push(record),
                Err(e) => warn!(path = %self.path.display(), error = %e, "Skipping malformed line"),
            }
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileStore {
        FileStore::new(dir.path().join("Bill.txt"))
    }

    fn seeded(dir: &TempDir, content: &str) -> FileStore {
        let store = store_in(dir);
        fs::write(store.path(), content).unwrap();
        store
    }

    fn contents(store: &FileStore) -> String {
        fs::read_to_string(store.path()).unwrap()
    }

    #[test]
    fn test_append_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        store.append(&LineItem::new("Soap", 20, 3)).unwrap();
        store.append(&LineItem::new("Oil", 150, 2)).unwrap();

        assert_eq!(contents(&store), "Soap : 20 : 3\nOil : 150 : 2\n");
    }

    #[test]
    fn test_append_then_find_on_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let record = LineItem::new("Soap", 20, 3);

        store.append(&record).unwrap();

        assert_eq!(store.find_first("Soap").unwrap(), record);
    }

    #[test]
    fn test_append_to_missing_directory_is_store_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("missing").join("Bill.txt"));

        let result = store.append(&LineItem::new("Soap", 20, 3));
        assert!(matches!(result, Err(BillingError::StoreUnavailable { .. })));
    }

    #[test]
    fn test_find_first_returns_first_duplicate() {
        let dir = tempfile::tempdir().unwrap();
        let store = seeded(&dir, "Soap : 20 : 3\nSoap : 99 : 9\n");

        assert_eq!(store.find_first("Soap").unwrap(), LineItem::new("Soap", 20, 3));
    }

    #[test]
    fn test_find_first_is_case_sensitive() {
        let dir = tempfile::tempdir().unwrap();
        let store = seeded(&dir, "Soap : 20 : 3\n");

        assert_eq!(
            store.find_first("soap").unwrap_err(),
            BillingError::not_found("soap")
        );
    }

    #[test]
    fn test_find_first_on_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(matches!(
            store.find_first("Soap"),
            Err(BillingError::NotFound { .. })
        ));
        assert!(!store.path().exists());
    }

    #[test]
    fn test_update_preserves_other_records() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = seeded(&dir, "Soap : 20 : 3\nOil : 150 : 2\nRice : 45 : 10\n");

        let updated = store.update("Oil", 160, 4).unwrap();

        assert_eq!(updated, LineItem::new("Oil", 160, 4));
        assert_eq!(contents(&store), "Soap : 20 : 3\nOil : 160 : 4\nRice : 45 : 10\n");
    }

    #[test]
    fn test_update_only_touches_first_duplicate() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = seeded(&dir, "Soap : 20 : 3\nSoap : 30 : 1\n");

        store.update("Soap", 25, 3).unwrap();

        assert_eq!(contents(&store), "Soap : 25 : 3\nSoap : 30 : 1\n");
    }

    #[test]
    fn test_update_absent_leaves_store_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let original = "Soap:20:3\n\nOil : 150 : 2\n";
        let mut store = seeded(&dir, original);

        let result = store.update("Rice", 1, 1);

        assert_eq!(result.unwrap_err(), BillingError::not_found("Rice"));
        assert_eq!(contents(&store), original);
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn test_update_on_missing_file_does_not_create_it() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        assert!(matches!(
            store.update("Soap", 1, 1),
            Err(BillingError::NotFound { .. })
        ));
        assert!(!store.path().exists());
    }

    #[test]
    fn test_delete_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = seeded(&dir, "Soap : 20 : 3\nOil : 150 : 2\nRice : 45 : 10\n");

        let removed = store.delete("Oil").unwrap();

        assert_eq!(removed, LineItem::new("Oil", 150, 2));
        assert_eq!(contents(&store), "Soap : 20 : 3\nRice : 45 : 10\n");
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn test_delete_keeps_later_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = seeded(&dir, "Soap : 20 : 3\nOil : 150 : 2\nSoap : 30 : 1\n");

        store.delete("Soap").unwrap();

        assert_eq!(contents(&store), "Oil : 150 : 2\nSoap : 30 : 1\n");
    }

    #[test]
    fn test_delete_absent_reports_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = seeded(&dir, "Soap : 20 : 3\n");

        assert_eq!(
            store.delete("Oil").unwrap_err(),
            BillingError::not_found("Oil")
        );
        assert_eq!(contents(&store), "Soap : 20 : 3\n");
    }

    #[test]
    fn test_rewrite_copies_malformed_lines_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = seeded(
            &dir,
            "Soap : 20 : 3\ngarbage here\nOil : x : 2\n\nRice : 45 : 10\n",
        );

        store.delete("Rice").unwrap();

        assert_eq!(contents(&store), "Soap : 20 : 3\ngarbage here\nOil : x : 2\n");
    }

    #[test]
    fn test_non_utf8_line_is_skipped_and_copied_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        fs::write(store.path(), b"Soap : 20 : 3\nCaf\xe9 : 10 : 1\nOil : 150 : 2\n").unwrap();

        assert_eq!(
            store.records().unwrap(),
            vec![LineItem::new("Soap", 20, 3), LineItem::new("Oil", 150, 2)]
        );
        assert_eq!(store.find_first("Oil").unwrap(), LineItem::new("Oil", 150, 2));

        store.delete("Oil").unwrap();

        assert_eq!(
            fs::read(store.path()).unwrap(),
            b"Soap : 20 : 3\nCaf\xe9 : 10 : 1\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_rewrite_keeps_store_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let mut store = seeded(&dir, "Soap : 20 : 3\nOil : 150 : 2\n");
        fs::set_permissions(store.path(), fs::Permissions::from_mode(0o600)).unwrap();

        store.update("Soap", 25, 3).unwrap();
        store.delete("Oil").unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(contents(&store), "Soap : 25 : 3\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_rewrite_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("Bill"));
        fs::create_dir(store.path()).unwrap();

        assert!(matches!(
            store.delete("Soap"),
            Err(BillingError::Io { .. })
        ));
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn test_discard_of_missing_temp_file_is_quiet() {
        let dir = tempfile::tempdir().unwrap();

        discard(&dir.path().join("Bill.txt.tmp"));
    }

    #[test]
    fn test_records_skips_malformed_lines() {
        let dir = tempfile::tempdir().unwrap();
        let store = seeded(&dir, "Soap : 20 : 3\nOil : x : 2\nRice : 45 : 10\n");

        assert_eq!(
            store.records().unwrap(),
            vec![LineItem::new("Soap", 20, 3), LineItem::new("Rice", 45, 10)]
        );
    }

    #[test]
    fn test_records_on_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(store.records().unwrap().is_empty());
    }

    #[test]
    fn test_temp_path_is_sibling() {
        let store = FileStore::new("/data/Bill.txt");
        assert_eq!(store.temp_path(), PathBuf::from("/data/Bill.txt.tmp"));
    }
}
