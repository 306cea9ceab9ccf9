//! Teller Core - fixed-capacity account records behind a PIN credential
//!
//! This crate implements the core logic following hexagonal architecture:
//!
//! - **domain**: core entities (AccountRecord, the error taxonomy)
//! - **ports**: trait definitions for external boundaries (interactive input)
//! - **services**: credential engine, transaction engine, audit, export
//! - **adapters**: concrete implementations (file-backed stores, scripted input)
//!
//! Everything is synchronous and single-threaded: one operation runs to
//! completion before the next, and the only suspension point is waiting on
//! interactive input.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::vault::Vault;
use config::Config;
use services::audit::AuditLog;
use services::auth::CredentialEngine;
use services::export::ExportService;
use services::teller::TellerService;

// Re-export commonly used types at crate root
pub use domain::account::{AccountDetails, AccountRecord, FixedName};
pub use domain::result::Error;
pub use ports::input::InputPort;
pub use services::auth::Access;
pub use services::teller::TransferReceipt;

/// Main context for teller operations
///
/// This is the primary entry point for all business logic. Both stores are
/// opened here once, held for the process lifetime, and released when the
/// context drops.
pub struct TellerContext {
    pub config: Config,
    pub vault: Arc<Vault>,
    pub teller: TellerService,
    pub export: ExportService,
}

impl TellerContext {
    /// Create a new teller context rooted at `data_dir`
    pub fn new(data_dir: &Path) -> Result<Self> {
        let config = Config::load(data_dir)?;

        let vault = Arc::new(Vault::open(
            &data_dir.join(&config.record_file),
            &data_dir.join(&config.credential_file),
            config.capacity,
        )?);

        let auth = CredentialEngine::new(Arc::clone(&vault));
        let audit = AuditLog::new(data_dir.join(&config.audit_file));
        let teller = TellerService::new(Arc::clone(&vault), auth, audit);
        let export = ExportService::new(Arc::clone(&vault));

        Ok(Self {
            config,
            vault,
            teller,
            export,
        })
    }
}
