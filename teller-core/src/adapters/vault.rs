//! Vault - the single logical store over both files
//!
//! Account records and credential hashes live in two independently indexed
//! flat files that must stay in sync. The vault is the only storage entry
//! point the services see: slot creation and erasure are paired operations
//! here, so no call site can update one file and forget the other.
//! Internally each side still performs its own seek and write; a failure
//! between the two is surfaced, not rolled back.

use std::path::Path;

use crate::adapters::credential_file::CredentialFile;
use crate::adapters::record_file::RecordFile;
use crate::domain::account::AccountRecord;
use crate::domain::result::Result;

pub struct Vault {
    records: RecordFile,
    credentials: CredentialFile,
}

impl Vault {
    /// Open both stores, pre-sizing each to `capacity` slots.
    pub fn open(record_path: &Path, credential_path: &Path, capacity: u32) -> Result<Self> {
        Ok(Self {
            records: RecordFile::open(record_path, capacity)?,
            credentials: CredentialFile::open(credential_path, capacity)?,
        })
    }

    pub fn capacity(&self) -> u32 {
        self.records.capacity()
    }

    pub fn read(&self, number: u32) -> Result<AccountRecord> {
        self.records.read(number)
    }

    /// Update a record in place; the slot's credential is untouched.
    pub fn write(&self, number: u32, record: &AccountRecord) -> Result<()> {
        self.records.write(number, record)
    }

    pub fn credential(&self, number: u32) -> Result<u32> {
        self.credentials.read(number)
    }

    pub fn set_credential(&self, number: u32, hash: u32) -> Result<()> {
        self.credentials.write(number, hash)
    }

    /// Populate a slot: record first, then its credential hash.
    pub fn create(&self, record: &AccountRecord, hash: u32) -> Result<()> {
        self.records.write(record.number, record)?;
        self.credentials.write(record.number, hash)
    }

    /// Destroy a slot: overwrite with the empty sentinel and clear the
    /// credential to 0.
    pub fn erase(&self, number: u32) -> Result<()> {
        self.records.write(number, &AccountRecord::empty())?;
        self.credentials.write(number, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn open_vault(dir: &Path) -> Vault {
        Vault::open(&dir.join("accounts.dat"), &dir.join("pins.dat"), 100).unwrap()
    }

    #[test]
    fn test_create_writes_both_sides() {
        let dir = tempdir().unwrap();
        let vault = open_vault(dir.path());

        let record = AccountRecord::new(9, "Dunn", "Stacey", 314.33);
        vault.create(&record, 0xABCD).unwrap();

        assert_eq!(vault.read(9).unwrap(), record);
        assert_eq!(vault.credential(9).unwrap(), 0xABCD);
    }

    #[test]
    fn test_erase_clears_both_sides() {
        let dir = tempdir().unwrap();
        let vault = open_vault(dir.path());

        vault
            .create(&AccountRecord::new(9, "Dunn", "Stacey", 314.33), 0xABCD)
            .unwrap();
        vault.erase(9).unwrap();

        assert!(vault.read(9).unwrap().is_empty());
        assert_eq!(vault.credential(9).unwrap(), 0);
    }

    #[test]
    fn test_plain_write_keeps_credential() {
        let dir = tempdir().unwrap();
        let vault = open_vault(dir.path());

        let mut record = AccountRecord::new(4, "Smith", "Dave", 258.34);
        vault.create(&record, 77).unwrap();

        record.balance = 300.0;
        vault.write(4, &record).unwrap();

        assert_eq!(vault.read(4).unwrap().balance, 300.0);
        assert_eq!(vault.credential(4).unwrap(), 77);
    }
}
