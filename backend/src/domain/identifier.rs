//! Server-assigned integer identifiers for persisted entities.

use thiserror::Error;

/// Raised when a raw integer cannot be an entity identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("identifier must be a positive integer, got {value}")]
pub struct IdentifierError {
    value: i64,
}

impl IdentifierError {
    /// The rejected raw value.
    pub fn value(&self) -> i64 {
        self.value
    }
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Validate and wrap a raw identifier.
            pub fn new(value: i32) -> Result<Self, IdentifierError> {
                if value <= 0 {
                    return Err(IdentifierError {
                        value: i64::from(value),
                    });
                }
                Ok(Self(value))
            }

            /// Validate an identifier arriving as a wider integer.
            pub fn from_i64(value: i64) -> Result<Self, IdentifierError> {
                i32::try_from(value)
                    .map_err(|_| IdentifierError { value })
                    .and_then(Self::new)
            }

            /// Raw integer value as stored.
            pub fn get(self) -> i32 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<i32> for $name {
            type Error = IdentifierError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

entity_id! {
    /// Stable identifier of a [`crate::domain::User`].
    UserId
}

entity_id! {
    /// Stable identifier of a [`crate::domain::Instructor`].
    InstructorId
}

entity_id! {
    /// Stable identifier of a [`crate::domain::Course`].
    CourseId
}
