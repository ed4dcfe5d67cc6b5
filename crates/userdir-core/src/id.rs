//! Typed ID wrappers for domain entities.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A strongly-typed wrapper for user IDs.
///
/// Ids are assigned by storage on insert and are never reused, so the
/// wrapper has no constructor that invents one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i32);

impl UserId {
    /// Creates a user ID from a raw integer.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Returns the inner integer.
    #[must_use]
    pub const fn into_inner(self) -> i32 {
        self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for UserId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<UserId> for i32 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        i64::from(id.0)
    }
}

impl TryFrom<i64> for UserId {
    type Error = std::num::TryFromIntError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        i32::try_from(raw).map(Self)
    }
}
