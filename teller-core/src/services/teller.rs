//! Transaction engine - the operations that mutate the vault
//!
//! Every operation follows the same sequence: validate inputs, locate the
//! account(s), authenticate where required, apply the mutation, persist,
//! emit an audit record. Validation and lookup failures short-circuit
//! before authentication; authentication failures short-circuit before any
//! mutation. Operations are non-atomic across the two files (see
//! [`transfer`](TellerService::transfer)).

use std::sync::Arc;

use serde::Serialize;

use crate::adapters::vault::Vault;
use crate::domain::account::{AccountDetails, AccountRecord};
use crate::domain::result::{Error, Result};
use crate::ports::input::InputPort;
use crate::services::audit::{AuditAction, AuditLog};
use crate::services::auth::{Access, CredentialEngine};

/// Outcome of an accepted transfer, for caller-side rendering.
#[derive(Debug, Clone, Serialize)]
pub struct TransferReceipt {
    pub from: u32,
    pub to: u32,
    pub amount: f64,
    pub source_balance: f64,
    pub destination_balance: f64,
}

pub struct TellerService {
    vault: Arc<Vault>,
    auth: CredentialEngine,
    audit: AuditLog,
}

impl TellerService {
    pub fn new(vault: Arc<Vault>, auth: CredentialEngine, audit: AuditLog) -> Self {
        Self { vault, auth, audit }
    }

    /// Create an account in an empty slot and set its PIN interactively.
    ///
    /// The PIN workflow runs only after every other precondition holds, so
    /// a rejected or aborted PIN leaves the slot untouched.
    pub fn create(
        &self,
        input: &mut dyn InputPort,
        number: u32,
        details: &AccountDetails,
    ) -> Result<AccountRecord> {
        let existing = self.vault.read(number)?;
        if existing.number == number {
            return Err(Error::already_exists(format!("account {number}")));
        }
        if details.balance < 0.0 {
            return Err(Error::validation("opening balance cannot be negative"));
        }

        let hash = self.auth.set_new_credential(input, number)?;
        let record = AccountRecord::new(
            number,
            &details.last_name,
            &details.first_name,
            details.balance,
        );
        self.vault.create(&record, hash)?;
        self.audit
            .record(AuditAction::Create, &format!("Account {number} created"));
        Ok(record)
    }

    /// Apply a signed delta to an account's balance; returns the new
    /// balance. Rejected with `InsufficientFunds` if the result would be
    /// negative, leaving the record unchanged.
    pub fn adjust_balance(
        &self,
        input: &mut dyn InputPort,
        number: u32,
        delta: f64,
    ) -> Result<f64> {
        if !delta.is_finite() {
            return Err(Error::validation("invalid amount"));
        }
        let mut record = self.lookup(number)?;
        self.authenticate(input, number)?;

        if record.balance + delta < 0.0 {
            return Err(Error::InsufficientFunds {
                balance: record.balance,
                requested: delta.abs(),
            });
        }

        record.balance += delta;
        self.vault.write(number, &record)?;
        self.audit.record(
            AuditAction::Update,
            &format!("Account {number} adjusted by {delta:.2}"),
        );
        Ok(record.balance)
    }

    /// Blank the slot and clear its credential.
    pub fn delete(&self, input: &mut dyn InputPort, number: u32) -> Result<()> {
        self.lookup(number)?;
        self.authenticate(input, number)?;

        self.vault.erase(number)?;
        self.audit
            .record(AuditAction::Delete, &format!("Account {number} deleted"));
        Ok(())
    }

    /// Move `amount` between two distinct accounts, authenticating the
    /// source only.
    ///
    /// Two writes, no rollback: if the credit write fails after the debit
    /// committed, the stores are left inconsistent and the caller sees the
    /// IO error. Known limitation, asserted by the test suite rather than
    /// compensated here.
    pub fn transfer(
        &self,
        input: &mut dyn InputPort,
        from: u32,
        to: u32,
        amount: f64,
    ) -> Result<TransferReceipt> {
        let mut source = self.lookup(from)?;
        let mut destination = self.lookup(to)?;

        if from == to {
            return Err(Error::validation("cannot transfer to the same account"));
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(Error::validation("transfer amount must be positive"));
        }
        if source.balance < amount {
            return Err(Error::InsufficientFunds {
                balance: source.balance,
                requested: amount,
            });
        }

        self.authenticate(input, from)?;

        source.balance -= amount;
        destination.balance += amount;
        self.vault.write(from, &source)?;
        self.vault.write(to, &destination)?;
        self.audit.record(
            AuditAction::Transfer,
            &format!("{amount:.2} from {from} to {to}"),
        );
        Ok(TransferReceipt {
            from,
            to,
            amount,
            source_balance: source.balance,
            destination_balance: destination.balance,
        })
    }

    /// Replace an account's credential; the current PIN gates the change.
    pub fn change_pin(&self, input: &mut dyn InputPort, number: u32) -> Result<()> {
        self.lookup(number)?;
        self.authenticate(input, number)?;

        let hash = self.auth.set_new_credential(input, number)?;
        self.vault.set_credential(number, hash)?;
        self.audit
            .record(AuditAction::PinChange, &format!("Account {number} PIN changed"));
        Ok(())
    }

    /// All occupied records in ascending account-number order.
    pub fn list(&self) -> Result<Vec<AccountRecord>> {
        let mut records = Vec::new();
        for number in 1..=self.vault.capacity() {
            let record = self.vault.read(number)?;
            if record.number == number {
                records.push(record);
            }
        }
        Ok(records)
    }

    /// Read an occupied slot. A slot number of 0 and a mismatched number
    /// both report `NotFound`.
    fn lookup(&self, number: u32) -> Result<AccountRecord> {
        let record = self.vault.read(number)?;
        if record.number != number {
            return Err(Error::not_found(format!("account {number}")));
        }
        Ok(record)
    }

    /// Run the PIN challenge, recording the audit event on exhaustion.
    fn authenticate(&self, input: &mut dyn InputPort, number: u32) -> Result<Access> {
        match self.auth.authenticate(input, number) {
            Err(err @ Error::AuthenticationFailed(_)) => {
                self.audit.record(
                    AuditAction::AuthFail,
                    &format!("Account {number} blocked after failed PIN attempts"),
                );
                Err(err)
            }
            other => other,
        }
    }
}
