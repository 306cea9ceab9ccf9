//! Credential store - fixed-slot binary PIN-hash file
//!
//! One little-endian u32 hash per slot at `(number - 1) * 4`, index-aligned
//! with the record store so the two never need a join. A stored 0 means "no
//! credential set".

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use crate::domain::result::{Error, Result};

const HASH_SIZE: usize = 4;

pub struct CredentialFile {
    file: Mutex<File>,
    capacity: u32,
}

impl CredentialFile {
    /// Open (creating if absent) and pre-size the backing file to exactly
    /// `capacity` zeroed (no-credential) slots.
    pub fn open(path: &Path, capacity: u32) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(path)?;
        let store = Self {
            file: Mutex::new(file),
            capacity,
        };
        store.extend_to_capacity()?;
        Ok(store)
    }

    pub fn read(&self, number: u32) -> Result<u32> {
        let offset = self.offset(number)?;
        let mut file = self.lock()?;
        file.seek(SeekFrom::Start(offset))?;
        let mut buf = [0u8; HASH_SIZE];
        file.read_exact(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    pub fn write(&self, number: u32, hash: u32) -> Result<()> {
        let offset = self.offset(number)?;
        let mut file = self.lock()?;
        file.seek(SeekFrom::Start(offset))?;
        file.write_all(&hash.to_le_bytes())?;
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
        Ok(u64::from(number - 1) * HASH_SIZE as u64)
    }

    fn extend_to_capacity(&self) -> Result<()> {
        let mut file = self.lock()?;
        let expected = u64::from(self.capacity) * HASH_SIZE as u64;
        let mut current = file.seek(SeekFrom::End(0))?;
        while current < expected {
            file.write_all(&0u32.to_le_bytes())?;
            current += HASH_SIZE as u64;
        }
        file.flush()?;
        file.seek(SeekFrom::Start(0))?;
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, File>> {
        self.file.lock().map_err(|_| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "credential store lock poisoned",
            ))
        })
    }
}
