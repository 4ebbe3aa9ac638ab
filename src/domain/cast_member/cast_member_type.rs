//! Cast member role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Raised when a numeric code is not a known cast member type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("CastMemberType must be 'actor' or 'director', got '{code}'")]
pub struct InvalidCastMemberTypeError {
    code: i64,
}

impl InvalidCastMemberTypeError {
    pub fn new(code: i64) -> Self {
        Self { code }
    }

    pub fn code(&self) -> i64 {
        self.code
    }
}

/// Role a cast member plays in a production.
///
/// Stored and transmitted as its numeric code: Director = 1, Actor = 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum CastMemberType {
    Director = 1,
    Actor = 2,
}

impl CastMemberType {
    /// Resolves a numeric code.
    pub fn from_code(code: i64) -> Result<Self, InvalidCastMemberTypeError> {
        match code {
            1 => Ok(CastMemberType::Director),
            2 => Ok(CastMemberType::Actor),
            other => Err(InvalidCastMemberTypeError::new(other)),
        }
    }

    pub fn code(&self) -> i16 {
        *self as i16
    }

    /// Human-readable name used in outputs.
    pub fn label(&self) -> &'static str {
        match self {
            CastMemberType::Director => "Director",
            CastMemberType::Actor => "Actor",
        }
    }

    /// Either variant with equal probability.
    pub fn random() -> Self {
        if fastrand::bool() {
            CastMemberType::Director
        } else {
            CastMemberType::Actor
        }
    }
}

impl TryFrom<i64> for CastMemberType {
    type Error = InvalidCastMemberTypeError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl From<CastMemberType> for i64 {
    fn from(value: CastMemberType) -> Self {
        i64::from(value.code())
    }
}

impl fmt::Display for CastMemberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
