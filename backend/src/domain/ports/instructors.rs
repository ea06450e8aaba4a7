//! Driving ports for the instructor resource.

use async_trait::async_trait;

use crate::domain::{Error, Instructor, InstructorId, NewInstructor};

/// Read-side use cases for instructors.
#[async_trait]
pub trait InstructorsQuery: Send + Sync {
    async fn list_instructors(&self) -> Result<Vec<Instructor>, Error>;

    async fn fetch_instructor(&self, id: InstructorId) -> Result<Instructor, Error>;
}

/// Write-side use cases for instructors.
#[async_trait]
pub trait InstructorsCommand: Send + Sync {
    async fn create_instructor(&self, instructor: NewInstructor) -> Result<Instructor, Error>;
}
