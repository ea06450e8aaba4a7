//! Email address value shared by users and instructors.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use super::text::{TextViolation, required_trimmed};

/// Maximum stored length of an email address.
pub const EMAIL_MAX: usize = 120;

/// Validation errors returned by [`EmailAddress::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailValidationError {
    #[error("email must not be empty")]
    Empty,
    #[error("email must be at most {max} characters")]
    TooLong { max: usize },
    #[error("email must look like name@domain")]
    Malformed,
}

// One `@`, something on either side, no whitespace anywhere.
static EMAIL_RE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$"));

fn looks_like_email(candidate: &str) -> bool {
    EMAIL_RE
        .as_ref()
        .is_ok_and(|pattern| pattern.is_match(candidate))
}

/// Trimmed email address with a single `@`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    ///
    /// # Examples
    /// ```
    /// use learnxcel::domain::EmailAddress;
    ///
    /// let email = EmailAddress::new(" ada@example.com ").expect("valid email");
    /// assert_eq!(email.as_ref(), "ada@example.com");
    /// assert!(EmailAddress::new("ada.example.com").is_err());
    /// ```
    pub fn new(email: impl Into<String>) -> Result<Self, EmailValidationError> {
        let email = required_trimmed(email.into(), EMAIL_MAX).map_err(|err| match err {
            TextViolation::Empty => EmailValidationError::Empty,
            TextViolation::TooLong { max } => EmailValidationError::TooLong { max },
        })?;
        if !looks_like_email(&email) {
            return Err(EmailValidationError::Malformed);
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}
