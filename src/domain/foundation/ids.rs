//! Strongly-typed identifier value objects.
//!
//! Identifiers wrap a version 4 UUID. Parsing rejects anything that is not a
//! hyphenated v4 UUID with [`InvalidIdentifierError`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::{Uuid, Version};

/// Length of the canonical hyphenated UUID form.
const HYPHENATED_LEN: usize = 36;

/// Raised when a caller-supplied identifier is not a valid UUID v4.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ID must be a valid UUID, got '{value}'")]
pub struct InvalidIdentifierError {
    value: String,
}

impl InvalidIdentifierError {
    /// Creates the error for the rejected input.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Returns the rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }
}

fn parse_v4(value: &str) -> Result<Uuid, InvalidIdentifierError> {
    if value.len() != HYPHENATED_LEN {
        return Err(InvalidIdentifierError::new(value));
    }
    let uuid = Uuid::try_parse(value).map_err(|_| InvalidIdentifierError::new(value))?;
    if uuid.get_version() != Some(Version::Random) {
        return Err(InvalidIdentifierError::new(value));
    }
    Ok(uuid)
}

/// Unique identifier for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(Uuid);

impl CategoryId {
    /// Creates a new random CategoryId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses a CategoryId from its string form.
    pub fn parse(value: &str) -> Result<Self, InvalidIdentifierError> {
        parse_v4(value).map(Self)
    }

    /// Creates a CategoryId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CategoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CategoryId {
    type Err = InvalidIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Unique identifier for a cast member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CastMemberId(Uuid);

impl CastMemberId {
    /// Creates a new random CastMemberId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses a CastMemberId from its string form.
    pub fn parse(value: &str) -> Result<Self, InvalidIdentifierError> {
        parse_v4(value).map(Self)
    }

    /// Creates a CastMemberId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CastMemberId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CastMemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CastMemberId {
    type Err = InvalidIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
