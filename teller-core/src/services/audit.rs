//! Audit sink - append-only transaction log
//!
//! One line per security-relevant event, `[YYYY-MM-DD HH:MM:SS] ACTION:
//! details`. Write-only: nothing in the core ever reads it back. The file
//! is opened, written, and closed per event, and failures are swallowed --
//! log loss never blocks a transaction's outcome.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    Transfer,
    PinChange,
    AuthFail,
}

impl AuditAction {
    pub fn as_str(self) -> &'static str {
        match self {
            AuditAction::Create => "CREATE",
            AuditAction::Update => "UPDATE",
            AuditAction::Delete => "DELETE",
            AuditAction::Transfer => "TRANSFER",
            AuditAction::PinChange => "PIN_CHANGE",
            AuditAction::AuthFail => "AUTH_FAIL",
        }
    }
}

pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one event line, ignoring any failure.
    pub fn record(&self, action: AuditAction, details: &str) {
        let _ = self.try_record(action, details);
    }

    fn try_record(&self, action: AuditAction, details: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        writeln!(file, "[{stamp}] {}: {details}", action.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_record_appends_lines() {
        let dir = tempdir().unwrap();
        let log = AuditLog::new(dir.path().join("audit.log"));

        log.record(AuditAction::Create, "Account 5 created");
        log.record(AuditAction::AuthFail, "Account 5 blocked after failed PIN attempts");

        let content = std::fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("] CREATE: Account 5 created"));
        assert!(lines[1].contains("] AUTH_FAIL: Account 5 blocked"));
        assert!(lines[0].starts_with('['));
    }

    #[test]
    fn test_failure_is_swallowed() {
        // A directory path cannot be opened for append; record must not panic
        let dir = tempdir().unwrap();
        let log = AuditLog::new(dir.path().to_path_buf());
        log.record(AuditAction::Delete, "Account 1 deleted");
    }
}
