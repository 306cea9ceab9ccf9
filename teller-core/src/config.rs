//! Configuration management
//!
//! Settings live in `settings.json` inside the teller data directory:
//! ```json
//! {
//!   "capacity": 100,
//!   "recordFile": "accounts.dat",
//!   "credentialFile": "pins.dat",
//!   "auditFile": "audit.log",
//!   "exportFile": "accounts.txt"
//! }
//! ```
//! Every field has a default, so a missing or partial file is fine.

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Number of account slots when no configuration overrides it.
pub const DEFAULT_CAPACITY: u32 = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Account slot count; both stores are pre-sized to exactly this many
    /// slots and valid account numbers are `1..=capacity`.
    pub capacity: u32,
    pub record_file: String,
    pub credential_file: String,
    pub audit_file: String,
    pub export_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            record_file: "accounts.dat".to_string(),
            credential_file: "pins.dat".to_string(),
            audit_file: "audit.log".to_string(),
            export_file: "accounts.txt".to_string(),
        }
    }
}

impl Config {
    /// Load config from the data directory.
    ///
    /// Capacity can be overridden with the `TELLER_CAPACITY` environment
    /// variable (for CI/testing); an unparsable value is ignored.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let settings_path = data_dir.join("settings.json");

        let mut config: Config = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            Config::default()
        };

        if let Some(capacity) = std::env::var("TELLER_CAPACITY")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
        {
            config.capacity = capacity;
        }

        Ok(config)
    }

    /// Save config to the data directory.
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let settings_path = data_dir.join("settings.json");
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_when_missing() {
        let dir = tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
        assert_eq!(config.record_file, "accounts.dat");
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), r#"{"capacity": 25}"#).unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.capacity, 25);
        assert_eq!(config.credential_file, "pins.dat");
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let mut config = Config::default();
        config.capacity = 10;
        config.export_file = "out.txt".to_string();
        config.save(dir.path()).unwrap();

        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded.capacity, 10);
        assert_eq!(loaded.export_file, "out.txt");
    }
}
