//! Domain ports defining the edges of the hexagon.
//!
//! Driven ports (`*Repository`) describe what the domain needs from storage
//! and expose strongly typed persistence errors. Driving ports (`*Query`,
//! `*Command`) are the use cases inbound adapters call; they speak the domain
//! [`Error`](crate::domain::Error) envelope.

mod course_repository;
mod courses;
mod instructor_repository;
mod instructors;
mod macros;
mod user_repository;
mod users;

pub(crate) use macros::define_port_error;

pub use course_repository::{CoursePersistenceError, CourseRepository};
pub use courses::{CoursesCommand, CoursesQuery};
pub use instructor_repository::{InstructorPersistenceError, InstructorRepository};
pub use instructors::{InstructorsCommand, InstructorsQuery};
pub use user_repository::{UserPersistenceError, UserRepository};
pub use users::{UsersCommand, UsersQuery};

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn persistence_error_messages_name_the_resource() {
        assert_eq!(
            UserPersistenceError::duplicate("username").to_string(),
            "user already exists: username"
        );
        assert_eq!(
            InstructorPersistenceError::connection("refused").to_string(),
            "instructor repository connection failed: refused"
        );
        assert_eq!(
            CoursePersistenceError::missing_instructor(4).to_string(),
            "instructor 4 does not exist"
        );
    }
}
