//! Document identifier - the store-assigned id carried through the domain
//!
//! The backing store identifies documents with a 12-byte id rendered as a
//! 24-character hex string. The domain layer only ever handles that hex
//! rendering, so infrastructure types never leak out of the db crate.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Identifier of a top-level document (user or thought)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentId(String);

impl DocumentId {
    /// Length of the hex rendering
    pub const HEX_LEN: usize = 24;

    /// Create a DocumentId from an already-valid hex string.
    ///
    /// The caller must supply a 24-character hex string (as produced by the
    /// store); use [`DocumentId::parse`] for untrusted input.
    #[inline]
    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    /// Parse from string representation, validating the format
    pub fn parse(s: &str) -> Result<Self, DocumentIdParseError> {
        if s.len() != Self::HEX_LEN || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(DocumentIdParseError::InvalidFormat);
        }
        Ok(Self(s.to_ascii_lowercase()))
    }

    /// Get the hex string
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Error when parsing a DocumentId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DocumentIdParseError {
    #[error("invalid document id format")]
    InvalidFormat,
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for DocumentId {
    type Err = DocumentIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentId::parse(s)
    }
}

impl Serialize for DocumentId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DocumentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DocumentId::parse(&s).map_err(serde::de::Error::custom)
    }
}
