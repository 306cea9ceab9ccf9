//! Plain-text export of occupied account records

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use crate::adapters::vault::Vault;
use crate::domain::result::Result;

pub struct ExportService {
    vault: Arc<Vault>,
}

impl ExportService {
    pub fn new(vault: Arc<Vault>) -> Self {
        Self { vault }
    }

    /// Render every occupied record as fixed-width columns in ascending
    /// account-number order. Returns the number of records written.
    pub fn export(&self, destination: &Path) -> Result<usize> {
        let mut out = BufWriter::new(File::create(destination)?);
        writeln!(
            out,
            "{:<6}{:<16}{:<11}{:>10}",
            "Acct", "Last Name", "First Name", "Balance"
        )?;

        let mut written = 0;
        for number in 1..=self.vault.capacity() {
            let record = self.vault.read(number)?;
            if record.number != number {
                continue;
            }
            writeln!(
                out,
                "{:<6}{:<16}{:<11}{:>10.2}",
                record.number,
                record.last_name.as_str(),
                record.first_name.as_str(),
                record.balance
            )?;
            written += 1;
        }
        out.flush()?;
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::AccountRecord;
    use tempfile::tempdir;

    #[test]
    fn test_export_fixed_width() {
        let dir = tempdir().unwrap();
        let vault = Arc::new(
            Vault::open(
                &dir.path().join("accounts.dat"),
                &dir.path().join("pins.dat"),
                100,
            )
            .unwrap(),
        );
        vault
            .create(&AccountRecord::new(29, "Brown", "Nancy", 24.54), 1)
            .unwrap();
        vault
            .create(&AccountRecord::new(33, "Dunn", "Stacey", 314.33), 2)
            .unwrap();

        let export = ExportService::new(Arc::clone(&vault));
        let destination = dir.path().join("accounts.txt");
        assert_eq!(export.export(&destination).unwrap(), 2);

        let content = std::fs::read_to_string(&destination).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);

        // Fixed-width columns: every line is the same length, fields start
        // at fixed offsets, balances are right-aligned
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
        assert!(lines[0].starts_with("Acct  Last Name"));
        assert!(lines[1].starts_with("29    Brown"));
        assert!(lines[1].ends_with("24.54"));
        assert!(lines[2].starts_with("33    Dunn"));
        assert!(lines[2].ends_with("314.33"));
        assert_eq!(&lines[1][6..11], "Brown");
        assert_eq!(&lines[2][22..28], "Stacey");
    }

    #[test]
    fn test_export_empty_store() {
        let dir = tempdir().unwrap();
        let vault = Arc::new(
            Vault::open(
                &dir.path().join("accounts.dat"),
                &dir.path().join("pins.dat"),
                100,
            )
            .unwrap(),
        );
        let export = ExportService::new(vault);
        let destination = dir.path().join("accounts.txt");
        assert_eq!(export.export(&destination).unwrap(), 0);

        let content = std::fs::read_to_string(&destination).unwrap();
        assert_eq!(content.lines().count(), 1);
    }
}
