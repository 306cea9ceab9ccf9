//! Concrete implementations of storage and input boundaries

pub mod credential_file;
pub mod record_file;
pub mod scripted;
pub mod vault;

pub use vault::Vault;
