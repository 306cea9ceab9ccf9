//! Record store - fixed-slot binary account file
//!
//! Slot `i` (0-based) holds account number `i + 1`; the offset formula is
//! `(number - 1) * RECORD_SIZE`. The file is opened once for the process
//! lifetime and held under an advisory exclusive lock, so a second process
//! fails fast instead of interleaving writes.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use fs2::FileExt;

use crate::domain::account::{AccountRecord, RECORD_SIZE};
use crate::domain::result::{Error, Result};

pub struct RecordFile {
    file: Mutex<File>,
    capacity: u32,
}

impl RecordFile {
    /// Open (creating if absent) and pre-size the backing file to exactly
    /// `capacity` empty-sentinel slots. A write failure mid-extension leaves
    /// a short file behind; appended content is always the empty sentinel,
    /// so a later open simply resumes the extension.
    pub fn open(path: &Path, capacity: u32) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(path)?;
        file.try_lock_exclusive().map_err(|_| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("record store {} is locked by another process", path.display()),
            ))
        })?;

        let store = Self {
            file: Mutex::new(file),
            capacity,
        };
        store.extend_to_capacity()?;
        Ok(store)
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Read the record at `number`'s slot. The store does not interpret the
    /// decoded number; a 0 or mismatched value means "no such account" to
    /// the transaction engine.
    pub fn read(&self, number: u32) -> Result<AccountRecord> {
        let offset = self.offset(number)?;
        let mut file = self.lock()?;
        file.seek(SeekFrom::Start(offset))?;
        let mut buf = [0u8; RECORD_SIZE];
        file.read_exact(&mut buf)?;
        Ok(AccountRecord::decode(&buf))
    }

    /// Write one full record and flush before reporting success. Callers
    /// must not assume the mutation persisted if this returns an error.
    pub fn write(&self, number: u32, record: &AccountRecord) -> Result<()> {
        let offset = self.offset(number)?;
        let mut file = self.lock()?;
        file.seek(SeekFrom::Start(offset))?;
        file.write_all(&record.encode())?;
        file.flush()?;
        Ok(())
    }

    fn offset(&self, number: u32) -> Result<u64> {
        if number < 1 || number > self.capacity {
            return Err(Error::out_of_range(format!(
                "account number {number} outside 1..={}",
                self.capacity
            )));
        }
        Ok(u64::from(number - 1) * RECORD_SIZE as u64)
    }

    fn extend_to_capacity(&self) -> Result<()> {
        let mut file = self.lock()?;
        let expected = u64::from(self.capacity) * RECORD_SIZE as u64;
        let mut current = file.seek(SeekFrom::End(0))?;
        let blank = AccountRecord::empty().encode();
        while current < expected {
            file.write_all(&blank)?;
            current += RECORD_SIZE as u64;
        }
        file.flush()?;
        file.seek(SeekFrom::Start(0))?;
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, File>> {
        self.file.lock().map_err(|_| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "record store lock poisoned",
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_presizes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("accounts.dat");
        let store = RecordFile::open(&path, 100).unwrap();

        let size = std::fs::metadata(&path).unwrap().len();
        assert_eq!(size, 100 * RECORD_SIZE as u64);

        // Every slot starts as the empty sentinel
        assert!(store.read(1).unwrap().is_empty());
        assert!(store.read(100).unwrap().is_empty());
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let store = RecordFile::open(&dir.path().join("accounts.dat"), 100).unwrap();

        let record = AccountRecord::new(37, "Stone", "Sam", 34.98);
        store.write(37, &record).unwrap();
        assert_eq!(store.read(37).unwrap(), record);

        // Neighboring slots are untouched
        assert!(store.read(36).unwrap().is_empty());
        assert!(store.read(38).unwrap().is_empty());
    }

    #[test]
    fn test_out_of_range_addressing() {
        let dir = tempdir().unwrap();
        let store = RecordFile::open(&dir.path().join("accounts.dat"), 100).unwrap();

        assert!(matches!(store.read(0), Err(Error::OutOfRange(_))));
        assert!(matches!(store.read(101), Err(Error::OutOfRange(_))));
        let record = AccountRecord::new(101, "Too", "Far", 0.0);
        assert!(matches!(store.write(101, &record), Err(Error::OutOfRange(_))));
    }

    #[test]
    fn test_reopen_preserves_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("accounts.dat");
        let record = AccountRecord::new(5, "White", "Pat", 100.0);
        {
            let store = RecordFile::open(&path, 100).unwrap();
            store.write(5, &record).unwrap();
        }
        let store = RecordFile::open(&path, 100).unwrap();
        assert_eq!(store.read(5).unwrap(), record);
    }
}
