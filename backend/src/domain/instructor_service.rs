//! Instructor use cases backed by an [`InstructorRepository`].

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use super::ports::{
    InstructorPersistenceError, InstructorRepository, InstructorsCommand, InstructorsQuery,
};
use super::{Error, Instructor, InstructorId, NewInstructor};

/// Message returned whenever an instructor lookup misses.
pub const INSTRUCTOR_NOT_FOUND: &str = "Instructor not found";

/// Domain service implementing the instructor driving ports.
#[derive(Clone)]
pub struct InstructorService {
    repository: Arc<dyn InstructorRepository>,
}

impl InstructorService {
    pub fn new(repository: Arc<dyn InstructorRepository>) -> Self {
        Self { repository }
    }
}

pub(crate) fn map_instructor_persistence_error(error: InstructorPersistenceError) -> Error {
    match error {
        InstructorPersistenceError::Connection { message } => Error::service_unavailable(message),
        InstructorPersistenceError::Query { message } => Error::internal(message),
        InstructorPersistenceError::Duplicate { column } => {
            Error::conflict("Instructor already exists").with_details(json!({ "field": column }))
        }
    }
}

#[async_trait]
impl InstructorsQuery for InstructorService {
    async fn list_instructors(&self) -> Result<Vec<Instructor>, Error> {
        self.repository
            .list()
            .await
            .map_err(map_instructor_persistence_error)
    }

    async fn fetch_instructor(&self, id: InstructorId) -> Result<Instructor, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_instructor_persistence_error)?
            .ok_or_else(|| Error::not_found(INSTRUCTOR_NOT_FOUND))
    }
}

#[async_trait]
impl InstructorsCommand for InstructorService {
    async fn create_instructor(&self, instructor: NewInstructor) -> Result<Instructor, Error> {
        let created = self
            .repository
            .insert(&instructor)
            .await
            .map_err(map_instructor_persistence_error)?;
        info!(instructor_id = %created.id(), "instructor created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    struct FailingRepository(InstructorPersistenceError);

    #[async_trait]
    impl InstructorRepository for FailingRepository {
        async fn list(&self) -> Result<Vec<Instructor>, InstructorPersistenceError> {
            Err(self.0.clone())
        }

        async fn find_by_id(
            &self,
            _id: InstructorId,
        ) -> Result<Option<Instructor>, InstructorPersistenceError> {
            Ok(None)
        }

        async fn insert(
            &self,
            _instructor: &NewInstructor,
        ) -> Result<Instructor, InstructorPersistenceError> {
            Err(self.0.clone())
        }
    }

    fn service(error: InstructorPersistenceError) -> InstructorService {
        InstructorService::new(Arc::new(FailingRepository(error)))
    }

    #[tokio::test]
    async fn missing_instructor_is_not_found() {
        let err = service(InstructorPersistenceError::query("unused"))
            .fetch_instructor(InstructorId::new(5).expect("valid id"))
            .await
            .expect_err("missing instructor");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), INSTRUCTOR_NOT_FOUND);
    }

    #[tokio::test]
    async fn duplicate_email_is_conflict() {
        let new = NewInstructor::try_from_parts("John Doe", "john@example.com").expect("valid");
        let err = service(InstructorPersistenceError::duplicate("email"))
            .create_instructor(new)
            .await
            .expect_err("duplicate rejected");
        assert_eq!(err.code(), ErrorCode::Conflict);
        assert_eq!(err.details(), Some(&json!({ "field": "email" })));
    }

    #[rstest]
    #[case(InstructorPersistenceError::connection("down"), ErrorCode::ServiceUnavailable)]
    #[case(InstructorPersistenceError::query("bad"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn list_maps_failures(
        #[case] failure: InstructorPersistenceError,
        #[case] expected: ErrorCode,
    ) {
        let err = service(failure)
            .list_instructors()
            .await
            .expect_err("failure surfaces");
        assert_eq!(err.code(), expected);
    }
}
