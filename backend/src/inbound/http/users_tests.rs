//! Tests for users HTTP handlers against stubbed driving ports.

use std::sync::{Arc, Mutex};

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use async_trait::async_trait;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{
    CoursesCommand, CoursesQuery, InstructorsCommand, InstructorsQuery, UsersCommand, UsersQuery,
};
use crate::domain::{
    Course, CourseId, EmailAddress, Instructor, InstructorId, NewCourse, NewInstructor, Username,
};
use crate::inbound::http::state::HttpStatePorts;
use crate::inbound::http::test_utils::test_app;

/// Records what reached the domain and answers with a canned user.
#[derive(Default)]
struct RecordingUsers {
    created: Mutex<Vec<NewUser>>,
    updated: Mutex<Vec<(UserId, UserChanges)>>,
    failure: Option<Error>,
}

impl RecordingUsers {
    fn failing(error: Error) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    fn outcome(&self, id: UserId) -> Result<User, Error> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        if id.get() == 999 {
            return Err(Error::not_found(USER_NOT_FOUND));
        }
        Ok(User::new(
            id,
            Username::new("ada").expect("valid username"),
            EmailAddress::new("ada@example.com").expect("valid email"),
        ))
    }
}

#[async_trait]
impl UsersQuery for RecordingUsers {
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.outcome(UserId::new(1).expect("valid id"))
            .map(|user| vec![user])
    }

    async fn fetch_user(&self, id: UserId) -> Result<User, Error> {
        self.outcome(id)
    }
}

#[async_trait]
impl UsersCommand for RecordingUsers {
    async fn create_user(&self, user: NewUser) -> Result<User, Error> {
        self.created.lock().expect("created lock").push(user);
        self.outcome(UserId::new(1).expect("valid id"))
    }

    async fn update_user(&self, id: UserId, changes: UserChanges) -> Result<User, Error> {
        self.updated
            .lock()
            .expect("updated lock")
            .push((id, changes));
        self.outcome(id)
    }

    async fn delete_user(&self, id: UserId) -> Result<User, Error> {
        self.outcome(id)
    }
}

/// Courses and instructors are not under test here.
struct Unused;

#[async_trait]
impl InstructorsQuery for Unused {
    async fn list_instructors(&self) -> Result<Vec<Instructor>, Error> {
        Ok(Vec::new())
    }

    async fn fetch_instructor(&self, _id: InstructorId) -> Result<Instructor, Error> {
        Err(Error::not_found("Instructor not found"))
    }
}

#[async_trait]
impl InstructorsCommand for Unused {
    async fn create_instructor(&self, _instructor: NewInstructor) -> Result<Instructor, Error> {
        Err(Error::internal("unused"))
    }
}

#[async_trait]
impl CoursesQuery for Unused {
    async fn list_courses(&self) -> Result<Vec<Course>, Error> {
        Ok(Vec::new())
    }

    async fn fetch_course(&self, _id: CourseId) -> Result<Course, Error> {
        Err(Error::not_found("Course not found"))
    }
}

#[async_trait]
impl CoursesCommand for Unused {
    async fn create_course(&self, _course: NewCourse) -> Result<Course, Error> {
        Err(Error::internal("unused"))
    }
}

fn state_with(users: Arc<RecordingUsers>) -> HttpState {
    let unused = Arc::new(Unused);
    HttpState::new(HttpStatePorts {
        users: users.clone(),
        users_command: users,
        instructors: unused.clone(),
        instructors_command: unused.clone(),
        courses: unused.clone(),
        courses_command: unused,
    })
}

#[fixture]
fn users() -> Arc<RecordingUsers> {
    Arc::new(RecordingUsers::default())
}

async fn send(state: HttpState, request: actix_test::TestRequest) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(state)).await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = serde_json::from_slice(&body).expect("JSON body");
    (status, value)
}

#[rstest]
#[actix_web::test]
async fn create_returns_created_without_password(users: Arc<RecordingUsers>) {
    let request = actix_test::TestRequest::post().uri("/users").set_json(json!({
        "username": "  ada  ",
        "email": "ada@example.com",
        "password": "secret",
    }));

    let (status, body) = send(state_with(users.clone()), request).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body.get("password").is_none());
    let created = users.created.lock().expect("created lock");
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].username.as_ref(), "ada");
    assert_eq!(created[0].password.expose(), "secret");
}

#[rstest]
#[case(json!({"username": "", "email": "a@b.c", "password": "pw"}), "username")]
#[case(json!({"username": "ada", "email": "nope", "password": "pw"}), "email")]
#[case(json!({"username": "ada", "email": "a@b.c", "password": ""}), "password")]
#[actix_web::test]
async fn create_rejects_invalid_fields(
    users: Arc<RecordingUsers>,
    #[case] payload: Value,
    #[case] field: &str,
) {
    let request = actix_test::TestRequest::post().uri("/users").set_json(payload);

    let (status, body) = send(state_with(users.clone()), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body.pointer("/details/field").and_then(Value::as_str),
        Some(field)
    );
    assert!(users.created.lock().expect("created lock").is_empty());
}

#[rstest]
#[case(r#"{"username": "ada""#)]
#[case(r#"{"username": "ada", "email": "a@b.c"}"#)]
#[case(r#"{"username": 7, "email": "a@b.c", "password": "pw"}"#)]
#[actix_web::test]
async fn malformed_bodies_are_bad_requests(users: Arc<RecordingUsers>, #[case] raw: &str) {
    let request = actix_test::TestRequest::post()
        .uri("/users")
        .insert_header(("content-type", "application/json"))
        .set_payload(raw.to_owned());

    let (status, body) = send(state_with(users), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("error").and_then(Value::as_str).is_some());
}

#[rstest]
#[actix_web::test]
async fn missing_user_is_not_found(users: Arc<RecordingUsers>) {
    let request = actix_test::TestRequest::get().uri("/users/999");

    let (status, body) = send(state_with(users), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "User not found"}));
}

#[rstest]
#[case("/users/abc")]
#[case("/users/-1")]
#[case("/users/1/extra")]
#[actix_web::test]
async fn non_numeric_ids_match_no_route(users: Arc<RecordingUsers>, #[case] uri: &str) {
    let request = actix_test::TestRequest::get().uri(uri);

    let (status, body) = send(state_with(users), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Not found"}));
}

#[rstest]
#[case("/users/0")]
#[case("/users/2147483648")]
#[case("/users/4294967296")]
#[case("/users/18446744073709551615")]
#[actix_web::test]
async fn out_of_range_id_reads_as_missing_user(
    users: Arc<RecordingUsers>,
    #[case] uri: &str,
) {
    let request = actix_test::TestRequest::delete().uri(uri);

    let (status, body) = send(state_with(users), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "User not found"}));
}

#[rstest]
#[actix_web::test]
async fn partial_update_forwards_only_named_fields(users: Arc<RecordingUsers>) {
    let request = actix_test::TestRequest::put()
        .uri("/users/4")
        .set_json(json!({"email": "new@example.com"}));

    let (status, _) = send(state_with(users.clone()), request).await;

    assert_eq!(status, StatusCode::OK);
    let updated = users.updated.lock().expect("updated lock");
    let (id, changes) = &updated[0];
    assert_eq!(id.get(), 4);
    assert!(changes.username().is_none());
    assert_eq!(
        changes.email().map(ToString::to_string),
        Some("new@example.com".to_owned())
    );
}

#[rstest]
#[case(json!({}))]
#[case(json!({"password": "new-secret"}))]
#[case(json!({"username": "ada", "role": "admin"}))]
#[actix_web::test]
async fn update_rejects_empty_or_unknown_fields(
    users: Arc<RecordingUsers>,
    #[case] payload: Value,
) {
    let request = actix_test::TestRequest::put()
        .uri("/users/4")
        .set_json(payload);

    let (status, _) = send(state_with(users.clone()), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(users.updated.lock().expect("updated lock").is_empty());
}

#[rstest]
#[actix_web::test]
async fn unavailable_database_is_service_unavailable() {
    let users = Arc::new(RecordingUsers::failing(Error::service_unavailable(
        "pool timed out",
    )));
    let request = actix_test::TestRequest::get().uri("/users");

    let (status, body) = send(state_with(users), request).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({"error": "Service unavailable"}));
}
