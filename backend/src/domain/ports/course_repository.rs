//! Driven port for course persistence.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{Course, CourseId, NewCourse};

define_port_error! {
    /// Persistence errors raised by [`CourseRepository`] adapters.
    pub enum CoursePersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "course repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "course repository query failed: {message}",
        /// The referenced instructor row does not exist.
        MissingInstructor { instructor_id: i32 } => "instructor {instructor_id} does not exist",
    }
}

/// Persistence port for course records.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// All courses ordered by identifier.
    async fn list(&self) -> Result<Vec<Course>, CoursePersistenceError>;

    /// Fetch a course by identifier.
    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, CoursePersistenceError>;

    /// Insert a course and return it with its assigned identifier.
    async fn insert(&self, course: &NewCourse) -> Result<Course, CoursePersistenceError>;
}
