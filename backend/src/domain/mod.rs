//! Domain primitives, aggregates, ports, and services.
//!
//! Purpose: Define strongly typed entities used by the HTTP and persistence
//! adapters. Types are immutable once validated; invariants and serialisation
//! contracts live in each type's Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — transport-agnostic error envelope.
//! - ErrorCode (alias to `error::ErrorCode`) — stable error category.
//! - User, Instructor, Course — persisted aggregates.
//! - UserService, InstructorService, CourseService — use cases behind the
//!   driving ports in [`ports`].

pub mod course;
pub mod course_service;
pub mod email;
pub mod error;
pub mod identifier;
pub mod instructor;
pub mod instructor_service;
pub mod ports;
pub(crate) mod text;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::course::{
    COURSE_DESCRIPTION_MAX, COURSE_TITLE_MAX, Course, CourseDescription, CourseTitle,
    CourseValidationError, NewCourse,
};
pub use self::course_service::{COURSE_NOT_FOUND, CourseService};
pub use self::email::{EMAIL_MAX, EmailAddress, EmailValidationError};
pub use self::error::{Error, ErrorBody, ErrorCode};
pub use self::identifier::{CourseId, IdentifierError, InstructorId, UserId};
pub use self::instructor::{
    INSTRUCTOR_NAME_MAX, Instructor, InstructorName, InstructorValidationError, NewInstructor,
};
pub use self::instructor_service::{INSTRUCTOR_NOT_FOUND, InstructorService};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    NewUser, PASSWORD_MAX, Password, USERNAME_MAX, User, UserChanges, UserValidationError,
    Username,
};
pub use self::user_service::{USER_NOT_FOUND, UserService};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use learnxcel::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("User not found"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
