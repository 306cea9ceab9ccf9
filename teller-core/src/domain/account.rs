//! Account record domain model

use serde::Serialize;

use crate::domain::result::{Error, Result};

/// Byte capacity of the last-name field, excluding the terminator slot.
pub const LAST_NAME_CAP: usize = 14;

/// Byte capacity of the first-name field, excluding the terminator slot.
pub const FIRST_NAME_CAP: usize = 9;

/// Size of one encoded record slot: u32 number, NUL-padded name fields
/// (capacity + terminator each), f64 balance. All little-endian.
pub const RECORD_SIZE: usize = 4 + (LAST_NAME_CAP + 1) + (FIRST_NAME_CAP + 1) + 8;

/// Bounded-length text with the truncation rule applied at construction:
/// the longest prefix of whole characters that fits the byte capacity.
/// No call site truncates ad hoc.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FixedName(String);

impl FixedName {
    pub fn new(raw: &str, capacity: usize) -> Self {
        let mut end = 0;
        for (idx, ch) in raw.char_indices() {
            if idx + ch.len_utf8() > capacity {
                break;
            }
            end = idx + ch.len_utf8();
        }
        Self(raw[..end].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode from a NUL-padded field, stopping at the first NUL.
    fn from_padded(bytes: &[u8]) -> Self {
        let len = bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len());
        Self(String::from_utf8_lossy(&bytes[..len]).into_owned())
    }

    /// Write into a NUL-padded field. The constructor guarantees the value
    /// fits, leaving at least one terminator byte.
    fn write_padded(&self, out: &mut [u8]) {
        out.fill(0);
        out[..self.0.len()].copy_from_slice(self.0.as_bytes());
    }
}

/// One account slot. A `number` of 0 marks the slot empty; an occupied
/// slot's number always equals its slot index + 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountRecord {
    pub number: u32,
    pub last_name: FixedName,
    pub first_name: FixedName,
    pub balance: f64,
}

impl AccountRecord {
    pub fn new(number: u32, last_name: &str, first_name: &str, balance: f64) -> Self {
        Self {
            number,
            last_name: FixedName::new(last_name, LAST_NAME_CAP),
            first_name: FixedName::new(first_name, FIRST_NAME_CAP),
            balance,
        }
    }

    /// The empty-slot sentinel: number 0, blank names, zero balance.
    pub fn empty() -> Self {
        Self::new(0, "", "", 0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.number == 0
    }

    pub fn encode(&self) -> [u8; RECORD_SIZE] {
        let mut buf = [0u8; RECORD_SIZE];
        buf[0..4].copy_from_slice(&self.number.to_le_bytes());
        self.last_name.write_padded(&mut buf[4..4 + LAST_NAME_CAP + 1]);
        let first_start = 4 + LAST_NAME_CAP + 1;
        self.first_name
            .write_padded(&mut buf[first_start..first_start + FIRST_NAME_CAP + 1]);
        buf[RECORD_SIZE - 8..].copy_from_slice(&self.balance.to_le_bytes());
        buf
    }

    pub fn decode(buf: &[u8; RECORD_SIZE]) -> Self {
        let number = u32::from_le_bytes(buf[0..4].try_into().unwrap());
        let last_name = FixedName::from_padded(&buf[4..4 + LAST_NAME_CAP + 1]);
        let first_start = 4 + LAST_NAME_CAP + 1;
        let first_name = FixedName::from_padded(&buf[first_start..first_start + FIRST_NAME_CAP + 1]);
        let balance = f64::from_le_bytes(buf[RECORD_SIZE - 8..].try_into().unwrap());
        Self {
            number,
            last_name,
            first_name,
            balance,
        }
    }
}

/// Account details as entered on one free-form line:
/// `lastname firstname balance`, exactly three whitespace-separated fields.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountDetails {
    pub last_name: String,
    pub first_name: String,
    pub balance: f64,
}

impl AccountDetails {
    pub fn parse(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [last_name, first_name, balance] = fields.as_slice() else {
            return Err(Error::validation(
                "expected: lastname firstname balance",
            ));
        };
        let balance: f64 = balance
            .parse()
            .map_err(|_| Error::validation("invalid balance amount"))?;
        if !balance.is_finite() {
            return Err(Error::validation("invalid balance amount"));
        }
        Ok(Self {
            last_name: (*last_name).to_string(),
            first_name: (*first_name).to_string(),
            balance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_truncation() {
        let name = FixedName::new("Wolfeschlegelsteinhausen", LAST_NAME_CAP);
        assert_eq!(name.as_str(), "Wolfeschlegels");
        assert_eq!(name.as_str().len(), LAST_NAME_CAP);

        // Multi-byte characters are never split
        let name = FixedName::new("Grünenthal", FIRST_NAME_CAP);
        assert_eq!(name.as_str(), "Grünenth");
        assert!(name.as_str().len() <= FIRST_NAME_CAP);
    }

    #[test]
    fn test_short_name_unchanged() {
        let name = FixedName::new("Doe", LAST_NAME_CAP);
        assert_eq!(name.as_str(), "Doe");
    }

    #[test]
    fn test_record_roundtrip() {
        let record = AccountRecord::new(7, "Brown", "Nancy", -24.54);
        let decoded = AccountRecord::decode(&record.encode());
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_empty_sentinel() {
        let empty = AccountRecord::empty();
        assert!(empty.is_empty());
        assert_eq!(empty.encode(), [0u8; RECORD_SIZE]);
    }

    #[test]
    fn test_details_parse() {
        let details = AccountDetails::parse("Doe Jane 124.53").unwrap();
        assert_eq!(details.last_name, "Doe");
        assert_eq!(details.first_name, "Jane");
        assert_eq!(details.balance, 124.53);
    }

    #[test]
    fn test_details_parse_rejects_malformed() {
        assert!(AccountDetails::parse("Doe Jane").is_err());
        assert!(AccountDetails::parse("Doe Jane abc").is_err());
        assert!(AccountDetails::parse("Doe Jane 10.0 extra").is_err());
        assert!(AccountDetails::parse("Doe Jane nan").is_err());
        assert!(AccountDetails::parse("").is_err());
    }
}
