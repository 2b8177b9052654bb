//! Hex document identifiers.
//!
//! Every stored record is keyed by a 24-character hex string, the same
//! identifier format the HTTP API exposes in paths like `/api/users/{id}`.

use std::fmt;

use rand::Rng;
use serde::Serialize;

/// A 24-character hex identifier.
///
/// The canonical form is lowercase; parsing accepts either case and
/// normalizes, so `ABC...` and `abc...` address the same record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ObjectId(String);

impl ObjectId {
    /// Length of the hex form.
    pub const LEN: usize = 24;

    /// Generate a fresh identifier from 12 random bytes.
    pub fn generate() -> Self {
        let bytes: [u8; 12] = rand::rng().random();
        ObjectId(bytes.iter().map(|b| format!("{b:02x}")).collect())
    }

    /// Format check only: exactly 24 ASCII hex characters.
    ///
    /// This says nothing about whether a record with this id exists.
    pub fn is_valid(raw: &str) -> bool {
        raw.len() == Self::LEN && raw.bytes().all(|b| b.is_ascii_hexdigit())
    }

    /// Parse a raw path segment, normalizing to lowercase.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::is_valid(raw).then(|| ObjectId(raw.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
