//! Credential engine - PIN hashing and the authentication challenge

use std::sync::Arc;

use crate::adapters::vault::Vault;
use crate::domain::result::{Error, Result};
use crate::ports::input::InputPort;

/// Smallest accepted PIN.
pub const MIN_PIN: u32 = 1;

/// Largest accepted PIN (4-digit space).
pub const MAX_PIN: u32 = 9999;

/// Wrong or malformed entries allowed before the challenge fails.
pub const MAX_ATTEMPTS: u32 = 3;

/// Salted 32-bit mixing of account number and PIN (djb2 constants).
///
/// The account number is folded in first so the same PIN hashes differently
/// across accounts. Not a security-grade scheme: no iteration, no brute-
/// force resistance. The stored format depends on these exact semantics, so
/// they are preserved rather than upgraded.
pub fn credential_hash(number: u32, pin: u32) -> u32 {
    let mut hash: u64 = 5381;
    hash = (hash << 5).wrapping_add(hash).wrapping_add(u64::from(number));
    hash = (hash << 5).wrapping_add(hash).wrapping_add(u64::from(pin));
    (hash & 0xFFFF_FFFF) as u32
}

/// How an authentication challenge was passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// A candidate PIN hashed to the stored value.
    Verified,
    /// No credential is set for the slot; access is granted without a
    /// challenge. A deliberate insecure default, kept as-is.
    Open,
}

pub struct CredentialEngine {
    vault: Arc<Vault>,
}

impl CredentialEngine {
    pub fn new(vault: Arc<Vault>) -> Self {
        Self { vault }
    }

    /// Run the bounded-retry PIN challenge for `number`.
    ///
    /// A stored hash of 0 grants open access immediately. Otherwise up to
    /// [`MAX_ATTEMPTS`] candidate PINs are read; a malformed entry consumes
    /// an attempt without a comparison. Exhausting the attempts is
    /// `AuthenticationFailed`; the caller records the audit event.
    pub fn authenticate(&self, input: &mut dyn InputPort, number: u32) -> Result<Access> {
        let stored = self.vault.credential(number)?;
        if stored == 0 {
            input.notify("No PIN set for this account. Access granted.");
            return Ok(Access::Open);
        }

        let mut attempts = 0;
        while attempts < MAX_ATTEMPTS {
            let line = input.read_secret(&format!("Enter PIN for account {number}"))?;
            let pin: u32 = match line.trim().parse() {
                Ok(pin) => pin,
                Err(_) => {
                    attempts += 1;
                    input.notify("Invalid input format.");
                    continue;
                }
            };

            if credential_hash(number, pin) == stored {
                input.notify("Identity verified.");
                return Ok(Access::Verified);
            }
            attempts += 1;
            input.notify(&format!("Incorrect PIN. ({attempts}/{MAX_ATTEMPTS} attempts)"));
        }

        Err(Error::AuthenticationFailed(number))
    }

    /// Interactive two-entry PIN setup; returns the hash to store.
    ///
    /// Loops until an accepted, confirmed PIN is supplied. Rejected inside
    /// the loop: PINs outside `[MIN_PIN, MAX_PIN]`, a PIN equal to the
    /// account number, and a confirmation mismatch. Nothing is written
    /// here; the transaction engine decides where the hash lands.
    pub fn set_new_credential(&self, input: &mut dyn InputPort, number: u32) -> Result<u32> {
        loop {
            let line = input.read_secret(&format!("Set new PIN ({MIN_PIN} - {MAX_PIN})"))?;
            let pin = match line.trim().parse::<u32>() {
                Ok(pin) if (MIN_PIN..=MAX_PIN).contains(&pin) => pin,
                _ => {
                    input.notify(&format!("PIN must be between {MIN_PIN} and {MAX_PIN}."));
                    continue;
                }
            };

            if pin == number {
                input.notify("PIN cannot be the same as the account number.");
                continue;
            }

            let confirm = input.read_secret("Confirm PIN")?;
            if confirm.trim().parse::<u32>() == Ok(pin) {
                return Ok(credential_hash(number, pin));
            }
            input.notify("PINs do not match. Try again.");
        }
    }
}
