//! Business logic orchestration

pub mod audit;
pub mod auth;
pub mod export;
pub mod teller;

pub use audit::{AuditAction, AuditLog};
pub use auth::{Access, CredentialEngine};
pub use export::ExportService;
pub use teller::{TellerService, TransferReceipt};
