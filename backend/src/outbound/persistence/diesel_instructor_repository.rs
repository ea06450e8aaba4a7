//! SQLite-backed `InstructorRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{InstructorPersistenceError, InstructorRepository};
use crate::domain::{EmailAddress, Instructor, InstructorId, InstructorName, NewInstructor};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error, pool_error_message};
use super::models::{InstructorRow, NewInstructorRow};
use super::pool::{DbPool, PoolError};
use super::schema::instructors;

/// Diesel-backed implementation of the `InstructorRepository` port.
#[derive(Clone)]
pub struct DieselInstructorRepository {
    pool: DbPool,
}

impl DieselInstructorRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> InstructorPersistenceError {
    InstructorPersistenceError::connection(pool_error_message(error))
}

fn map_diesel_error(error: diesel::result::Error) -> InstructorPersistenceError {
    match classify_diesel_error(error) {
        DieselFailure::Connection(message) => InstructorPersistenceError::connection(message),
        DieselFailure::UniqueViolation(column) => InstructorPersistenceError::duplicate(column),
        DieselFailure::ForeignKeyViolation => {
            InstructorPersistenceError::query("foreign key violation")
        }
        DieselFailure::Query(message) => InstructorPersistenceError::query(message),
    }
}

fn row_to_instructor(row: InstructorRow) -> Result<Instructor, InstructorPersistenceError> {
    let instructor_id = row.id;
    let id = InstructorId::new(row.id).map_err(|err| err.to_string());
    let name = InstructorName::new(row.name).map_err(|err| err.to_string());
    let email = EmailAddress::new(row.email).map_err(|err| err.to_string());
    match (id, name, email) {
        (Ok(id), Ok(name), Ok(email)) => Ok(Instructor::new(id, name, email)),
        (Err(reason), _, _) | (_, Err(reason), _) | (_, _, Err(reason)) => {
            warn!(instructor_id, %reason, "stored instructor row failed validation");
            Err(InstructorPersistenceError::query(
                "stored instructor row is invalid",
            ))
        }
    }
}

#[async_trait]
impl InstructorRepository for DieselInstructorRepository {
    async fn list(&self) -> Result<Vec<Instructor>, InstructorPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<InstructorRow> = instructors::table
            .order(instructors::id.asc())
            .select(InstructorRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_instructor).collect()
    }

    async fn find_by_id(
        &self,
        id: InstructorId,
    ) -> Result<Option<Instructor>, InstructorPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<InstructorRow> = instructors::table
            .find(id.get())
            .select(InstructorRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_instructor).transpose()
    }

    async fn insert(
        &self,
        instructor: &NewInstructor,
    ) -> Result<Instructor, InstructorPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewInstructorRow {
            name: instructor.name.as_ref(),
            email: instructor.email.as_ref(),
        };

        let row: InstructorRow = diesel::insert_into(instructors::table)
            .values(&new_row)
            .returning(InstructorRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_instructor(row)
    }
}
