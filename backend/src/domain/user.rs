//! User data model.
//!
//! A [`User`] never carries its password: the secret only exists on the
//! write path inside [`NewUser`], so nothing that serialises a user can leak
//! it.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::text::{TextViolation, required_trimmed};
use super::{EmailAddress, EmailValidationError, UserId};

/// Maximum username length.
pub const USERNAME_MAX: usize = 80;
/// Maximum password length.
pub const PASSWORD_MAX: usize = 128;

/// Validation errors for user fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserValidationError {
    #[error("username must not be empty")]
    EmptyUsername,
    #[error("username must be at most {max} characters")]
    UsernameTooLong { max: usize },
    #[error(transparent)]
    Email(#[from] EmailValidationError),
    #[error("password must not be empty")]
    EmptyPassword,
    #[error("password must be at most {max} characters")]
    PasswordTooLong { max: usize },
    #[error("update must change at least one of username or email")]
    EmptyUpdate,
}

/// Trimmed, non-empty username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`].
    pub fn new(username: impl Into<String>) -> Result<Self, UserValidationError> {
        required_trimmed(username.into(), USERNAME_MAX)
            .map(Self)
            .map_err(|err| match err {
                TextViolation::Empty => UserValidationError::EmptyUsername,
                TextViolation::TooLong { max } => UserValidationError::UsernameTooLong { max },
            })
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Write-only password.
///
/// Deliberately not `Serialize`; `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Validate and construct a [`Password`]. Whitespace is significant.
    pub fn new(password: impl Into<String>) -> Result<Self, UserValidationError> {
        let password = password.into();
        if password.is_empty() {
            return Err(UserValidationError::EmptyPassword);
        }
        if password.chars().count() > PASSWORD_MAX {
            return Err(UserValidationError::PasswordTooLong { max: PASSWORD_MAX });
        }
        Ok(Self(password))
    }

    /// Expose the secret to the persistence adapter.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Persisted application user.
///
/// Serialises as `{"id": 1, "username": "...", "email": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: UserId,
    username: Username,
    email: EmailAddress,
}

impl User {
    /// Build a [`User`] from validated components.
    pub fn new(id: UserId, username: Username, email: EmailAddress) -> Self {
        Self {
            id,
            username,
            email,
        }
    }

    /// Stable user identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Current username.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Current email address.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
}

/// Validated input for creating a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: Username,
    pub email: EmailAddress,
    pub password: Password,
}

impl NewUser {
    /// Validate raw fields into a [`NewUser`].
    ///
    /// # Examples
    /// ```
    /// use learnxcel::domain::NewUser;
    ///
    /// let user = NewUser::try_from_parts("ada", "ada@example.com", "secret").expect("valid");
    /// assert_eq!(user.username.as_ref(), "ada");
    /// ```
    pub fn try_from_parts(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            email: EmailAddress::new(email)?,
            password: Password::new(password)?,
        })
    }
}

/// Validated partial update of a user. At least one field is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserChanges {
    username: Option<Username>,
    email: Option<EmailAddress>,
}

impl UserChanges {
    /// Build a change set, rejecting one that changes nothing.
    pub fn new(
        username: Option<Username>,
        email: Option<EmailAddress>,
    ) -> Result<Self, UserValidationError> {
        if username.is_none() && email.is_none() {
            return Err(UserValidationError::EmptyUpdate);
        }
        Ok(Self { username, email })
    }

    /// Validate raw optional fields into a change set.
    pub fn try_from_parts(
        username: Option<String>,
        email: Option<String>,
    ) -> Result<Self, UserValidationError> {
        let username = username.map(Username::new).transpose()?;
        let email = email.map(EmailAddress::new).transpose()?;
        Self::new(username, email)
    }

    /// Replacement username, if any.
    pub fn username(&self) -> Option<&Username> {
        self.username.as_ref()
    }

    /// Replacement email, if any.
    pub fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }
}
