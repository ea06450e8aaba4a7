//! Course data model.
//!
//! A course belongs to exactly one instructor; the reference is checked when
//! the course is created.

use serde::Serialize;
use thiserror::Error;

use super::text::{TextViolation, optional_bounded, required_trimmed};
use super::{CourseId, InstructorId};

/// Maximum course title length.
pub const COURSE_TITLE_MAX: usize = 120;
/// Maximum course description length.
pub const COURSE_DESCRIPTION_MAX: usize = 2000;

/// Validation errors for course fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CourseValidationError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("title must be at most {max} characters")]
    TitleTooLong { max: usize },
    #[error("description must be at most {max} characters")]
    DescriptionTooLong { max: usize },
}

/// Trimmed, non-empty course title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CourseTitle(String);

impl CourseTitle {
    /// Validate and construct a [`CourseTitle`].
    pub fn new(title: impl Into<String>) -> Result<Self, CourseValidationError> {
        required_trimmed(title.into(), COURSE_TITLE_MAX)
            .map(Self)
            .map_err(|err| match err {
                TextViolation::Empty => CourseValidationError::EmptyTitle,
                TextViolation::TooLong { max } => CourseValidationError::TitleTooLong { max },
            })
    }
}

impl AsRef<str> for CourseTitle {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Free-form course description; may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CourseDescription(String);

impl CourseDescription {
    /// Validate and construct a [`CourseDescription`].
    pub fn new(description: impl Into<String>) -> Result<Self, CourseValidationError> {
        optional_bounded(description.into(), COURSE_DESCRIPTION_MAX)
            .map(Self)
            .map_err(|_| CourseValidationError::DescriptionTooLong {
                max: COURSE_DESCRIPTION_MAX,
            })
    }
}

impl AsRef<str> for CourseDescription {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Persisted course.
///
/// Serialises as
/// `{"id": 1, "title": "...", "description": "...", "instructor_id": 1}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    id: CourseId,
    title: CourseTitle,
    description: CourseDescription,
    instructor_id: InstructorId,
}

impl Course {
    /// Build a [`Course`] from validated components.
    pub fn new(
        id: CourseId,
        title: CourseTitle,
        description: CourseDescription,
        instructor_id: InstructorId,
    ) -> Self {
        Self {
            id,
            title,
            description,
            instructor_id,
        }
    }

    pub fn id(&self) -> CourseId {
        self.id
    }

    pub fn title(&self) -> &CourseTitle {
        &self.title
    }

    pub fn description(&self) -> &CourseDescription {
        &self.description
    }

    pub fn instructor_id(&self) -> InstructorId {
        self.instructor_id
    }
}

/// Validated input for creating a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub title: CourseTitle,
    pub description: CourseDescription,
    pub instructor_id: InstructorId,
}

impl NewCourse {
    /// Validate raw text fields into a [`NewCourse`].
    pub fn try_from_parts(
        title: impl Into<String>,
        description: impl Into<String>,
        instructor_id: InstructorId,
    ) -> Result<Self, CourseValidationError> {
        Ok(Self {
            title: CourseTitle::new(title)?,
            description: CourseDescription::new(description)?,
            instructor_id,
        })
    }
}
