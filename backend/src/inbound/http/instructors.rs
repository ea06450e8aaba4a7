//! Instructors API handlers.
//!
//! ```text
//! GET  /instructors
//! POST /instructors {"name":"John Doe","email":"john@example.com"}
//! GET  /instructors/{id}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, INSTRUCTOR_NOT_FOUND, Instructor, InstructorId, NewInstructor};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, InstructorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::instructor_validation_error;

/// Request body for `POST /instructors`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateInstructorRequest {
    pub name: String,
    pub email: String,
}

impl TryFrom<CreateInstructorRequest> for NewInstructor {
    type Error = Error;

    fn try_from(value: CreateInstructorRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(value.name, value.email).map_err(instructor_validation_error)
    }
}

/// List every instructor ordered by id.
#[utoipa::path(
    get,
    path = "/instructors",
    responses(
        (status = 200, description = "Instructors", body = [InstructorSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["instructors"],
    operation_id = "listInstructors"
)]
#[get("/instructors")]
pub async fn list_instructors(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<Instructor>>> {
    Ok(web::Json(state.instructors.list_instructors().await?))
}

/// Create an instructor.
#[utoipa::path(
    post,
    path = "/instructors",
    request_body = CreateInstructorRequest,
    responses(
        (status = 201, description = "Instructor created", body = InstructorSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Email already taken", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["instructors"],
    operation_id = "createInstructor"
)]
#[post("/instructors")]
pub async fn create_instructor(
    state: web::Data<HttpState>,
    payload: web::Json<CreateInstructorRequest>,
) -> ApiResult<HttpResponse> {
    let new_instructor = NewInstructor::try_from(payload.into_inner())?;
    let instructor = state
        .instructors_command
        .create_instructor(new_instructor)
        .await?;
    Ok(HttpResponse::Created().json(instructor))
}

/// Fetch an instructor by id.
#[utoipa::path(
    get,
    path = "/instructors/{id}",
    params(("id" = u64, Path, description = "Instructor identifier")),
    responses(
        (status = 200, description = "Instructor", body = InstructorSchema),
        (status = 404, description = "Instructor not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["instructors"],
    operation_id = "getInstructor"
)]
#[get("/instructors/{id}")]
pub async fn get_instructor(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<Instructor>> {
    let id = i64::try_from(path.into_inner())
        .ok()
        .and_then(|value| InstructorId::from_i64(value).ok())
        .ok_or_else(|| Error::not_found(INSTRUCTOR_NOT_FOUND))?;
    Ok(web::Json(state.instructors.fetch_instructor(id).await?))
}
