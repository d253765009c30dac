//! Identity types shared across linkgraph.
//!
//! Accounts are opaque 32-byte addresses. The hex form accepts the short
//! notation used on chain (`0x123`), which is left-padded with zeros.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Number of bytes in an account address.
pub const ACCOUNT_LEN: usize = 32;

/// Opaque identity used as both source and target of relationships.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct AccountId([u8; ACCOUNT_LEN]);

impl AccountId {
    /// Wrap raw address bytes.
    pub const fn from_bytes(bytes: [u8; ACCOUNT_LEN]) -> Self {
        Self(bytes)
    }

    /// Build an address whose low-order bytes hold `n` (big-endian).
    ///
    /// Handy for tests and fixtures: `AccountId::from_u64(0x123)` equals `"0x123".parse()`.
    pub fn from_u64(n: u64) -> Self {
        let mut bytes = [0u8; ACCOUNT_LEN];
        bytes[ACCOUNT_LEN - 8..].copy_from_slice(&n.to_be_bytes());
        Self(bytes)
    }

    /// Raw address bytes.
    pub fn as_bytes(&self) -> &[u8; ACCOUNT_LEN] {
        &self.0
    }

    /// Full-width lowercase hex with a `0x` prefix.
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(2 + ACCOUNT_LEN * 2);
        out.push_str("0x");
        for b in &self.0 {
            out.push_str(&format!("{:02x}", b));
        }
        out
    }
}

/// Errors from parsing an [`AccountId`] out of its hex form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseAccountError {
    /// No digits after the optional `0x` prefix.
    #[error("account address is empty")]
    Empty,

    /// More than 64 hex digits.
    #[error("account address has {0} hex digits, at most 64 allowed")]
    TooLong(usize),

    /// A character outside `[0-9a-fA-F]`.
    #[error("invalid hex character '{0}' in account address")]
    InvalidChar(char),
}

impl FromStr for AccountId {
    type Err = ParseAccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.is_empty() {
            return Err(ParseAccountError::Empty);
        }
        if digits.len() > ACCOUNT_LEN * 2 {
            return Err(ParseAccountError::TooLong(digits.len()));
        }

        let mut bytes = [0u8; ACCOUNT_LEN];
        // Walk from the least significant nibble so short forms land in the low bytes.
        for (i, c) in digits.chars().rev().enumerate() {
            let nibble = c.to_digit(16).ok_or(ParseAccountError::InvalidChar(c))? as u8;
            let idx = ACCOUNT_LEN - 1 - i / 2;
            if i % 2 == 0 {
                bytes[idx] |= nibble;
            } else {
                bytes[idx] |= nibble << 4;
            }
        }
        Ok(Self(bytes))
    }
}

impl fmt::Display for AccountId {
    /// Shortest `0x` form: leading zero nibbles are dropped, `0x0` for the zero address.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = self.to_hex();
        let trimmed = hex[2..].trim_start_matches('0');
        if trimmed.is_empty() {
            write!(f, "0x0")
        } else {
            write!(f, "0x{}", trimmed)
        }
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({})", self)
    }
}

impl Serialize for AccountId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Identity of a graph instance, assigned once at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GraphId(Uuid);

impl GraphId {
    /// Generate a fresh random graph identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID (e.g. one handed out by the persistence layer).
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for GraphId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Capability set required of a property payload.
///
/// Payloads are moved into the graph, handed back on overwrite or unset, and
/// compared structurally. `()` serves as the empty property.
pub trait Props: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {}

impl<T> Props for T where T: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {}
