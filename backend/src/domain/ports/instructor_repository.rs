//! Driven port for instructor persistence.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{Instructor, InstructorId, NewInstructor};

define_port_error! {
    /// Persistence errors raised by [`InstructorRepository`] adapters.
    pub enum InstructorPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "instructor repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "instructor repository query failed: {message}",
        /// Email already belongs to another instructor.
        Duplicate { column: String } => "instructor already exists: {column}",
    }
}

/// Persistence port for instructor records.
#[async_trait]
pub trait InstructorRepository: Send + Sync {
    /// All instructors ordered by identifier.
    async fn list(&self) -> Result<Vec<Instructor>, InstructorPersistenceError>;

    /// Fetch an instructor by identifier.
    async fn find_by_id(
        &self,
        id: InstructorId,
    ) -> Result<Option<Instructor>, InstructorPersistenceError>;

    /// Insert an instructor and return it with its assigned identifier.
    async fn insert(
        &self,
        instructor: &NewInstructor,
    ) -> Result<Instructor, InstructorPersistenceError>;
}
