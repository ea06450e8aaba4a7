//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their serialised shape and live in the inbound
//! adapter where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for the error envelope produced from [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Human-readable message.
    #[schema(example = "User not found")]
    error: String,
    /// Supplementary details, typically the offending field and a code.
    #[schema(example = json!({"field": "email", "code": "invalid_email"}))]
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::User`]. The password is write-only
/// and never appears here.
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Server-assigned identifier.
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "ada")]
    username: String,
    #[schema(example = "ada@example.com")]
    email: String,
}

/// OpenAPI schema for [`crate::domain::Instructor`].
#[derive(ToSchema)]
#[schema(as = Instructor)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct InstructorSchema {
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "John Doe")]
    name: String,
    #[schema(example = "john@example.com")]
    email: String,
}

/// OpenAPI schema for [`crate::domain::Course`].
#[derive(ToSchema)]
#[schema(as = Course)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CourseSchema {
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "Rust 101")]
    title: String,
    #[schema(example = "Ownership and borrowing")]
    description: String,
    /// Identifier of the owning instructor.
    #[schema(example = 1)]
    instructor_id: i32,
}
