//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CourseRepository, CoursesCommand, CoursesQuery, InstructorRepository, InstructorsCommand,
    InstructorsQuery, UserRepository, UsersCommand, UsersQuery,
};
use crate::domain::{CourseService, InstructorService, UserService};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub users: Arc<dyn UsersQuery>,
    pub users_command: Arc<dyn UsersCommand>,
    pub instructors: Arc<dyn InstructorsQuery>,
    pub instructors_command: Arc<dyn InstructorsCommand>,
    pub courses: Arc<dyn CoursesQuery>,
    pub courses_command: Arc<dyn CoursesCommand>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersQuery>,
    pub users_command: Arc<dyn UsersCommand>,
    pub instructors: Arc<dyn InstructorsQuery>,
    pub instructors_command: Arc<dyn InstructorsCommand>,
    pub courses: Arc<dyn CoursesQuery>,
    pub courses_command: Arc<dyn CoursesCommand>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            users,
            users_command,
            instructors,
            instructors_command,
            courses,
            courses_command,
        } = ports;
        Self {
            users,
            users_command,
            instructors,
            instructors_command,
            courses,
            courses_command,
        }
    }

    /// Wire the domain services over the given repositories.
    ///
    /// # Examples
    /// ```no_run
    /// # async fn build() -> Result<(), Box<dyn std::error::Error>> {
    /// use std::sync::Arc;
    ///
    /// use learnxcel::inbound::http::state::HttpState;
    /// use learnxcel::outbound::persistence::{
    ///     DbPool, DieselCourseRepository, DieselInstructorRepository, DieselUserRepository,
    ///     PoolConfig,
    /// };
    ///
    /// let pool = DbPool::new(PoolConfig::new("learnxcel.db")).await?;
    /// let state = HttpState::from_repositories(
    ///     Arc::new(DieselUserRepository::new(pool.clone())),
    ///     Arc::new(DieselInstructorRepository::new(pool.clone())),
    ///     Arc::new(DieselCourseRepository::new(pool)),
    /// );
    /// let _users = state.users.clone();
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_repositories(
        users: Arc<dyn UserRepository>,
        instructors: Arc<dyn InstructorRepository>,
        courses: Arc<dyn CourseRepository>,
    ) -> Self {
        let user_service = Arc::new(UserService::new(users));
        let instructor_service = Arc::new(InstructorService::new(instructors.clone()));
        let course_service = Arc::new(CourseService::new(courses, instructors));
        Self::new(HttpStatePorts {
            users: user_service.clone(),
            users_command: user_service,
            instructors: instructor_service.clone(),
            instructors_command: instructor_service,
            courses: course_service.clone(),
            courses_command: course_service,
        })
    }
}
