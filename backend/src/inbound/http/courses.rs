//! Courses API handlers.
//!
//! ```text
//! GET  /courses
//! POST /courses {"title":"Rust 101","description":"Ownership","instructor_id":1}
//! GET  /courses/{id}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{COURSE_NOT_FOUND, Course, CourseId, Error, InstructorId, NewCourse};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{CourseSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, course_validation_error, identifier_error};

/// Request body for `POST /courses`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateCourseRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub instructor_id: i64,
}

impl TryFrom<CreateCourseRequest> for NewCourse {
    type Error = Error;

    fn try_from(value: CreateCourseRequest) -> Result<Self, Self::Error> {
        let instructor_id = InstructorId::from_i64(value.instructor_id)
            .map_err(|err| identifier_error(FieldName::new("instructor_id"), &err))?;
        Self::try_from_parts(value.title, value.description, instructor_id)
            .map_err(course_validation_error)
    }
}

/// List every course ordered by id.
#[utoipa::path(
    get,
    path = "/courses",
    responses(
        (status = 200, description = "Courses", body = [CourseSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "listCourses"
)]
#[get("/courses")]
pub async fn list_courses(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Course>>> {
    Ok(web::Json(state.courses.list_courses().await?))
}

/// Create a course under an existing instructor.
#[utoipa::path(
    post,
    path = "/courses",
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Course created", body = CourseSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Instructor not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "createCourse"
)]
#[post("/courses")]
pub async fn create_course(
    state: web::Data<HttpState>,
    payload: web::Json<CreateCourseRequest>,
) -> ApiResult<HttpResponse> {
    let new_course = NewCourse::try_from(payload.into_inner())?;
    let course = state.courses_command.create_course(new_course).await?;
    Ok(HttpResponse::Created().json(course))
}

/// Fetch a course by id.
#[utoipa::path(
    get,
    path = "/courses/{id}",
    params(("id" = u64, Path, description = "Course identifier")),
    responses(
        (status = 200, description = "Course", body = CourseSchema),
        (status = 404, description = "Course not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "getCourse"
)]
#[get("/courses/{id}")]
pub async fn get_course(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<Course>> {
    let id = i64::try_from(path.into_inner())
        .ok()
        .and_then(|value| CourseId::from_i64(value).ok())
        .ok_or_else(|| Error::not_found(COURSE_NOT_FOUND))?;
    Ok(web::Json(state.courses.fetch_course(id).await?))
}
