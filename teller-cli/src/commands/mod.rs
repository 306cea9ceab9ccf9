//! CLI command implementations

pub mod export;
pub mod list;
pub mod new;
pub mod pin;
pub mod remove;
pub mod transfer;
pub mod update;

use std::path::PathBuf;

use anyhow::{Context, Result};
use teller_core::TellerContext;

/// Get the teller data directory from environment or default
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("TELLER_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".teller")
    }
}

/// Get or create teller context
pub fn get_context() -> Result<TellerContext> {
    let data_dir = get_data_dir();

    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create teller directory: {:?}", data_dir))?;

    TellerContext::new(&data_dir).context("Failed to initialize teller context")
}
