//! Instructor data model.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::text::{TextViolation, required_trimmed};
use super::{EmailAddress, EmailValidationError, InstructorId};

/// Maximum instructor name length.
pub const INSTRUCTOR_NAME_MAX: usize = 100;

/// Validation errors for instructor fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstructorValidationError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("name must be at most {max} characters")]
    NameTooLong { max: usize },
    #[error(transparent)]
    Email(#[from] EmailValidationError),
}

/// Trimmed, non-empty instructor name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InstructorName(String);

impl InstructorName {
    /// Validate and construct an [`InstructorName`].
    pub fn new(name: impl Into<String>) -> Result<Self, InstructorValidationError> {
        required_trimmed(name.into(), INSTRUCTOR_NAME_MAX)
            .map(Self)
            .map_err(|err| match err {
                TextViolation::Empty => InstructorValidationError::EmptyName,
                TextViolation::TooLong { max } => InstructorValidationError::NameTooLong { max },
            })
    }
}

impl AsRef<str> for InstructorName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for InstructorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Persisted instructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instructor {
    id: InstructorId,
    name: InstructorName,
    email: EmailAddress,
}

impl Instructor {
    /// Build an [`Instructor`] from validated components.
    pub fn new(id: InstructorId, name: InstructorName, email: EmailAddress) -> Self {
        Self { id, name, email }
    }

    pub fn id(&self) -> InstructorId {
        self.id
    }

    pub fn name(&self) -> &InstructorName {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
}

/// Validated input for creating an instructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInstructor {
    pub name: InstructorName,
    pub email: EmailAddress,
}

impl NewInstructor {
    /// Validate raw fields into a [`NewInstructor`].
    pub fn try_from_parts(
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, InstructorValidationError> {
        Ok(Self {
            name: InstructorName::new(name)?,
            email: EmailAddress::new(email)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn serialises_flat_shape() {
        let instructor = Instructor::new(
            InstructorId::new(3).expect("valid id"),
            InstructorName::new("John Doe").expect("valid name"),
            EmailAddress::new("john@example.com").expect("valid email"),
        );
        assert_eq!(
            serde_json::to_value(&instructor).expect("serialise"),
            json!({ "id": 3, "name": "John Doe", "email": "john@example.com" })
        );
    }

    #[rstest]
    #[case("", "john@example.com", InstructorValidationError::EmptyName)]
    #[case(
        "John",
        "john",
        InstructorValidationError::Email(EmailValidationError::Malformed)
    )]
    fn rejects_invalid_parts(
        #[case] name: &str,
        #[case] email: &str,
        #[case] expected: InstructorValidationError,
    ) {
        assert_eq!(NewInstructor::try_from_parts(name, email), Err(expected));
    }

    #[rstest]
    fn name_rejects_overlong() {
        assert_eq!(
            InstructorName::new("n".repeat(INSTRUCTOR_NAME_MAX + 1)),
            Err(InstructorValidationError::NameTooLong {
                max: INSTRUCTOR_NAME_MAX
            })
        );
    }
}
