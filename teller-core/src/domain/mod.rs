//! Core domain entities

pub mod account;
pub mod result;

pub use account::{AccountDetails, AccountRecord, FixedName};
pub use result::{Error, Result};
