//! Shared validation helpers for inbound HTTP adapters.
//!
//! Domain validation errors become `400 Bad Request` envelopes whose details
//! name the offending field and a stable snake_case code.

use actix_web::HttpRequest;
use actix_web::error::{JsonPayloadError, PathError};
use serde_json::json;
use tracing::debug;

use crate::domain::{
    CourseValidationError, EmailValidationError, Error, IdentifierError,
    InstructorValidationError, UserValidationError,
};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    Empty,
    TooLong,
    InvalidEmail,
    InvalidIdentifier,
    EmptyUpdate,
    MalformedBody,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Empty => "empty",
            ErrorCode::TooLong => "too_long",
            ErrorCode::InvalidEmail => "invalid_email",
            ErrorCode::InvalidIdentifier => "invalid_identifier",
            ErrorCode::EmptyUpdate => "empty_update",
            ErrorCode::MalformedBody => "malformed_body",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Build a `400` envelope naming `field` and `code`.
pub(crate) fn field_error(field: FieldName, code: ErrorCode, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

fn email_error(field: FieldName, err: &EmailValidationError) -> Error {
    let code = match err {
        EmailValidationError::Empty => ErrorCode::Empty,
        EmailValidationError::TooLong { .. } => ErrorCode::TooLong,
        EmailValidationError::Malformed => ErrorCode::InvalidEmail,
    };
    field_error(field, code, err.to_string())
}

pub(crate) fn user_validation_error(err: UserValidationError) -> Error {
    let (field, code) = match &err {
        UserValidationError::Email(inner) => return email_error(FieldName::new("email"), inner),
        UserValidationError::EmptyUsername => (FieldName::new("username"), ErrorCode::Empty),
        UserValidationError::UsernameTooLong { .. } => {
            (FieldName::new("username"), ErrorCode::TooLong)
        }
        UserValidationError::EmptyPassword => (FieldName::new("password"), ErrorCode::Empty),
        UserValidationError::PasswordTooLong { .. } => {
            (FieldName::new("password"), ErrorCode::TooLong)
        }
        UserValidationError::EmptyUpdate => {
            return Error::invalid_request(err.to_string())
                .with_details(json!({ "code": ErrorCode::EmptyUpdate.as_str() }));
        }
    };
    field_error(field, code, err.to_string())
}

pub(crate) fn instructor_validation_error(err: InstructorValidationError) -> Error {
    match &err {
        InstructorValidationError::Email(inner) => email_error(FieldName::new("email"), inner),
        InstructorValidationError::EmptyName => {
            field_error(FieldName::new("name"), ErrorCode::Empty, err.to_string())
        }
        InstructorValidationError::NameTooLong { .. } => {
            field_error(FieldName::new("name"), ErrorCode::TooLong, err.to_string())
        }
    }
}

pub(crate) fn course_validation_error(err: CourseValidationError) -> Error {
    let (field, code) = match err {
        CourseValidationError::EmptyTitle => (FieldName::new("title"), ErrorCode::Empty),
        CourseValidationError::TitleTooLong { .. } => (FieldName::new("title"), ErrorCode::TooLong),
        CourseValidationError::DescriptionTooLong { .. } => {
            (FieldName::new("description"), ErrorCode::TooLong)
        }
    };
    field_error(field, code, err.to_string())
}

pub(crate) fn identifier_error(field: FieldName, err: &IdentifierError) -> Error {
    field_error(field, ErrorCode::InvalidIdentifier, err.to_string())
}

/// `JsonConfig` error handler: malformed bodies become `400` envelopes.
pub(crate) fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejecting malformed JSON body");
    let message = match &err {
        JsonPayloadError::ContentType => "expected a JSON request body".to_owned(),
        JsonPayloadError::Deserialize(inner) => format!("malformed JSON body: {inner}"),
        other => format!("unreadable JSON body: {other}"),
    };
    Error::invalid_request(message)
        .with_details(json!({ "code": ErrorCode::MalformedBody.as_str() }))
        .into()
}

/// `PathConfig` error handler: a non-numeric identifier matches no resource.
pub(crate) fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, path = req.path(), "path segment did not match a resource");
    Error::not_found("Not found").into()
}
