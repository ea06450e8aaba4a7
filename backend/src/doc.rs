//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the schema wrappers in [`crate::inbound::http::schemas`], which keep
//! domain types free of utoipa derives. The document backs Swagger UI in
//! debug builds and is exported by `cargo run --bin openapi-dump`.

use crate::inbound::http::courses::CreateCourseRequest;
use crate::inbound::http::instructors::CreateInstructorRequest;
use crate::inbound::http::schemas::{CourseSchema, ErrorSchema, InstructorSchema, UserSchema};
use crate::inbound::http::users::{CreateUserRequest, UpdateUserRequest};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "LearnXcel backend API",
        description = "CRUD interface for users, instructors, and courses."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::instructors::list_instructors,
        crate::inbound::http::instructors::create_instructor,
        crate::inbound::http::instructors::get_instructor,
        crate::inbound::http::courses::list_courses,
        crate::inbound::http::courses::create_course,
        crate::inbound::http::courses::get_course,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        UserSchema,
        InstructorSchema,
        CourseSchema,
        CreateUserRequest,
        UpdateUserRequest,
        CreateInstructorRequest,
        CreateCourseRequest,
    )),
    tags(
        (name = "users", description = "User accounts"),
        (name = "instructors", description = "Course instructors"),
        (name = "courses", description = "Courses and their instructors"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
