//! Test utilities for the backend crate.
//!
//! Shared by unit tests in `src/` and integration tests in `tests/`. Each
//! [`TestDatabase`] owns a fresh SQLite file in a temporary directory with
//! every migration applied; dropping it removes the file.

use std::sync::Arc;

use tempfile::TempDir;

use crate::domain::ports::{CourseRepository, InstructorRepository, UserRepository};
use crate::domain::{Course, Instructor, InstructorId, NewCourse, NewInstructor, NewUser, User};
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::{
    DbPool, DieselCourseRepository, DieselInstructorRepository, DieselUserRepository, PoolConfig,
    run_migrations,
};

/// Failures raised while provisioning a test database.
#[derive(Debug, thiserror::Error)]
pub enum TestDatabaseError {
    #[error("failed to create temporary directory: {0}")]
    TempDir(#[from] std::io::Error),
    #[error("temporary path is not valid UTF-8")]
    NonUtf8Path,
    #[error(transparent)]
    Migration(#[from] crate::outbound::persistence::MigrationError),
    #[error(transparent)]
    Pool(#[from] crate::outbound::persistence::PoolError),
}

/// A migrated SQLite database scoped to one test.
pub struct TestDatabase {
    url: String,
    pool: DbPool,
    _dir: TempDir,
}

impl TestDatabase {
    /// Create a database file, apply migrations, and open a pool over it.
    ///
    /// # Errors
    ///
    /// Returns [`TestDatabaseError`] when any provisioning step fails.
    pub async fn new() -> Result<Self, TestDatabaseError> {
        let dir = tempfile::tempdir()?;
        let url = dir
            .path()
            .join("learnxcel-test.db")
            .to_str()
            .ok_or(TestDatabaseError::NonUtf8Path)?
            .to_owned();
        run_migrations(&url)?;
        let pool = DbPool::new(PoolConfig::new(url.as_str()).with_max_size(4)).await?;
        Ok(Self {
            url,
            pool,
            _dir: dir,
        })
    }

    /// Filesystem location of the database.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Pool over the database.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn users(&self) -> DieselUserRepository {
        DieselUserRepository::new(self.pool.clone())
    }

    pub fn instructors(&self) -> DieselInstructorRepository {
        DieselInstructorRepository::new(self.pool.clone())
    }

    pub fn courses(&self) -> DieselCourseRepository {
        DieselCourseRepository::new(self.pool.clone())
    }

    /// HTTP state wiring the real services over this database.
    pub fn http_state(&self) -> HttpState {
        HttpState::from_repositories(
            Arc::new(self.users()),
            Arc::new(self.instructors()),
            Arc::new(self.courses()),
        )
    }

    /// Insert a user directly through the repository.
    ///
    /// # Panics
    ///
    /// Panics when the fields are invalid or the insert fails.
    pub async fn seed_user(&self, username: &str, email: &str) -> User {
        let user = NewUser::try_from_parts(username, email, "password").expect("valid seed user");
        self.users().insert(&user).await.expect("seed user")
    }

    /// Insert an instructor directly through the repository.
    ///
    /// # Panics
    ///
    /// Panics when the fields are invalid or the insert fails.
    pub async fn seed_instructor(&self, name: &str, email: &str) -> Instructor {
        let instructor = NewInstructor::try_from_parts(name, email).expect("valid seed instructor");
        self.instructors()
            .insert(&instructor)
            .await
            .expect("seed instructor")
    }

    /// Insert a course taught by `instructor_id`.
    ///
    /// # Panics
    ///
    /// Panics when the fields are invalid or the insert fails.
    pub async fn seed_course(&self, title: &str, instructor_id: InstructorId) -> Course {
        let course = NewCourse::try_from_parts(title, "Description", instructor_id)
            .expect("valid seed course");
        self.courses().insert(&course).await.expect("seed course")
    }
}
