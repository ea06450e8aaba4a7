//! Driving ports for the course resource.

use async_trait::async_trait;

use crate::domain::{Course, CourseId, Error, NewCourse};

/// Read-side use cases for courses.
#[async_trait]
pub trait CoursesQuery: Send + Sync {
    async fn list_courses(&self) -> Result<Vec<Course>, Error>;

    async fn fetch_course(&self, id: CourseId) -> Result<Course, Error>;
}

/// Write-side use cases for courses.
#[async_trait]
pub trait CoursesCommand: Send + Sync {
    /// Create a course under an existing instructor.
    async fn create_course(&self, course: NewCourse) -> Result<Course, Error>;
}
