//! Course use cases backed by course and instructor repositories.
//!
//! Creation checks the instructor reference up front so a dangling
//! `instructor_id` is reported as a missing instructor instead of surfacing as
//! a foreign-key failure. The storage constraint remains the backstop for
//! races with concurrent deletes.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use super::instructor_service::{INSTRUCTOR_NOT_FOUND, map_instructor_persistence_error};
use super::ports::{CoursePersistenceError, CourseRepository, CoursesCommand, CoursesQuery};
use super::ports::InstructorRepository;
use super::{Course, CourseId, Error, NewCourse};

/// Message returned whenever a course lookup misses.
pub const COURSE_NOT_FOUND: &str = "Course not found";

/// Domain service implementing the course driving ports.
#[derive(Clone)]
pub struct CourseService {
    courses: Arc<dyn CourseRepository>,
    instructors: Arc<dyn InstructorRepository>,
}

impl CourseService {
    pub fn new(
        courses: Arc<dyn CourseRepository>,
        instructors: Arc<dyn InstructorRepository>,
    ) -> Self {
        Self {
            courses,
            instructors,
        }
    }
}

fn map_persistence_error(error: CoursePersistenceError) -> Error {
    match error {
        CoursePersistenceError::Connection { message } => Error::service_unavailable(message),
        CoursePersistenceError::Query { message } => Error::internal(message),
        CoursePersistenceError::MissingInstructor { instructor_id } => {
            warn!(instructor_id, "course insert hit a missing instructor");
            Error::not_found(INSTRUCTOR_NOT_FOUND)
        }
    }
}

#[async_trait]
impl CoursesQuery for CourseService {
    async fn list_courses(&self) -> Result<Vec<Course>, Error> {
        self.courses.list().await.map_err(map_persistence_error)
    }

    async fn fetch_course(&self, id: CourseId) -> Result<Course, Error> {
        self.courses
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| Error::not_found(COURSE_NOT_FOUND))
    }
}

#[async_trait]
impl CoursesCommand for CourseService {
    async fn create_course(&self, course: NewCourse) -> Result<Course, Error> {
        let instructor = self
            .instructors
            .find_by_id(course.instructor_id)
            .await
            .map_err(map_instructor_persistence_error)?;
        if instructor.is_none() {
            return Err(Error::not_found(INSTRUCTOR_NOT_FOUND));
        }

        let created = self
            .courses
            .insert(&course)
            .await
            .map_err(map_persistence_error)?;
        info!(
            course_id = %created.id(),
            instructor_id = %created.instructor_id(),
            "course created"
        );
        Ok(created)
    }
}
