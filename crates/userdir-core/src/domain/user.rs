//! User entity.

use crate::UserId;
use serde::{Deserialize, Serialize};

/// A persisted user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Storage-assigned identifier.
    pub id: UserId,

    /// User's first name.
    pub first_name: String,

    /// User's last name.
    pub last_name: String,

    /// User's email address. Neither format nor uniqueness is checked.
    pub email: String,
}

impl User {
    /// Builds a user from an already-persisted row.
    #[must_use]
    pub fn new(
        id: UserId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Overwrites every field supplied in `changes`.
    ///
    /// Returns `true` if any stored value differs afterwards.
    pub fn apply(&mut self, changes: UserChanges) -> bool {
        let mut changed = false;

        if let Some(first_name) = changes.first_name {
            changed |= self.first_name != first_name;
            self.first_name = first_name;
        }
        if let Some(last_name) = changes.last_name {
            changed |= self.last_name != last_name;
            self.last_name = last_name;
        }
        if let Some(email) = changes.email {
            changed |= self.email != email;
            self.email = email;
        }

        changed
    }
}

/// Field values for a user that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl NewUser {
    /// Creates a new unsaved user.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Attaches the id storage assigned on insert.
    #[must_use]
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        }
    }
}

/// A partial update. `None` leaves the stored field untouched, `Some`
/// replaces it, including with an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl UserChanges {
    /// Returns true if no field was supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.email.is_none()
    }
}
