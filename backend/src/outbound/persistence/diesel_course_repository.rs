//! SQLite-backed `CourseRepository` implementation using Diesel ORM.
//!
//! The `courses.instructor_id` foreign key is enforced by SQLite because every
//! pooled connection enables `PRAGMA foreign_keys`. A violation maps to
//! [`CoursePersistenceError::MissingInstructor`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{CoursePersistenceError, CourseRepository};
use crate::domain::{Course, CourseDescription, CourseId, CourseTitle, InstructorId, NewCourse};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error, pool_error_message};
use super::models::{CourseRow, NewCourseRow};
use super::pool::{DbPool, PoolError};
use super::schema::courses;

/// Diesel-backed implementation of the `CourseRepository` port.
#[derive(Clone)]
pub struct DieselCourseRepository {
    pool: DbPool,
}

impl DieselCourseRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CoursePersistenceError {
    CoursePersistenceError::connection(pool_error_message(error))
}

/// Map Diesel errors, attributing foreign-key failures to `instructor_id`.
fn map_diesel_error(error: diesel::result::Error, instructor_id: i32) -> CoursePersistenceError {
    match classify_diesel_error(error) {
        DieselFailure::Connection(message) => CoursePersistenceError::connection(message),
        DieselFailure::ForeignKeyViolation => {
            CoursePersistenceError::missing_instructor(instructor_id)
        }
        DieselFailure::UniqueViolation(column) => {
            CoursePersistenceError::query(format!("unexpected unique violation on {column}"))
        }
        DieselFailure::Query(message) => CoursePersistenceError::query(message),
    }
}

fn map_read_error(error: diesel::result::Error) -> CoursePersistenceError {
    match classify_diesel_error(error) {
        DieselFailure::Connection(message) => CoursePersistenceError::connection(message),
        _ => CoursePersistenceError::query("database error"),
    }
}

fn row_to_course(row: CourseRow) -> Result<Course, CoursePersistenceError> {
    let course_id = row.id;
    let id = CourseId::new(row.id).map_err(|err| err.to_string());
    let instructor_id = InstructorId::new(row.instructor_id).map_err(|err| err.to_string());
    let title = CourseTitle::new(row.title).map_err(|err| err.to_string());
    let description = CourseDescription::new(row.description).map_err(|err| err.to_string());
    match (id, title, description, instructor_id) {
        (Ok(id), Ok(title), Ok(description), Ok(instructor_id)) => {
            Ok(Course::new(id, title, description, instructor_id))
        }
        (Err(reason), ..) | (_, Err(reason), ..) | (_, _, Err(reason), _) | (.., Err(reason)) => {
            warn!(course_id, %reason, "stored course row failed validation");
            Err(CoursePersistenceError::query("stored course row is invalid"))
        }
    }
}

#[async_trait]
impl CourseRepository for DieselCourseRepository {
    async fn list(&self) -> Result<Vec<Course>, CoursePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CourseRow> = courses::table
            .order(courses::id.asc())
            .select(CourseRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_read_error)?;

        rows.into_iter().map(row_to_course).collect()
    }

    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, CoursePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<CourseRow> = courses::table
            .find(id.get())
            .select(CourseRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_read_error)?;

        row.map(row_to_course).transpose()
    }

    async fn insert(&self, course: &NewCourse) -> Result<Course, CoursePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let instructor_id = course.instructor_id.get();
        let new_row = NewCourseRow {
            title: course.title.as_ref(),
            description: course.description.as_ref(),
            instructor_id,
        };

        let row: CourseRow = diesel::insert_into(courses::table)
            .values(&new_row)
            .returning(CourseRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, instructor_id))?;

        row_to_course(row)
    }
}
