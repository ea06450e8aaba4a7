//! End-to-end tests for the users resource over a real SQLite database.

use actix_web::http::StatusCode;
use actix_web::test::TestRequest;
use rstest::rstest;
use serde_json::{Value, json};

#[allow(dead_code)]
mod support;

use support::{database, id_of, send};

#[rstest]
#[case(0)]
#[case(1)]
#[case(3)]
#[actix_web::test]
async fn listing_returns_every_created_user(#[case] count: usize) {
    let db = database().await;
    for n in 0..count {
        let reply = send(
            &db,
            TestRequest::post().uri("/users").set_json(json!({
                "username": format!("user{n}"),
                "email": format!("user{n}@example.com"),
                "password": "password",
            })),
        )
        .await;
        assert_eq!(reply.status, StatusCode::CREATED);
    }

    let reply = send(&db, TestRequest::get().uri("/users")).await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body.as_array().map(Vec::len), Some(count));
}

#[rstest]
#[actix_web::test]
async fn created_user_is_returned_without_password() {
    let db = database().await;

    let reply = send(
        &db,
        TestRequest::post().uri("/users").set_json(json!({
            "username": "testuser",
            "email": "test@example.com",
            "password": "testpassword",
        })),
    )
    .await;

    assert_eq!(reply.status, StatusCode::CREATED);
    assert_eq!(reply.body["username"], "testuser");
    assert_eq!(reply.body["email"], "test@example.com");
    assert!(reply.body.get("password").is_none());
}

#[rstest]
#[actix_web::test]
async fn existing_user_is_fetched_by_id() {
    let db = database().await;
    let user = db.seed_user("testuser", "test@example.com").await;

    let reply = send(
        &db,
        TestRequest::get().uri(&format!("/users/{}", user.id().get())),
    )
    .await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(
        reply.body,
        json!({"id": user.id().get(), "username": "testuser", "email": "test@example.com"})
    );
}

#[rstest]
#[actix_web::test]
async fn update_is_visible_on_refetch() {
    let db = database().await;
    let user = db.seed_user("testuser", "test@example.com").await;
    let uri = format!("/users/{}", user.id().get());

    let updated = send(
        &db,
        TestRequest::put().uri(&uri).set_json(json!({
            "username": "updateduser",
            "email": "updated@example.com",
        })),
    )
    .await;
    assert_eq!(updated.status, StatusCode::OK);

    let fetched = send(&db, TestRequest::get().uri(&uri)).await;
    assert_eq!(fetched.body["username"], "updateduser");
    assert_eq!(fetched.body["email"], "updated@example.com");
}

#[rstest]
#[actix_web::test]
async fn partial_update_keeps_other_fields() {
    let db = database().await;
    let user = db.seed_user("testuser", "test@example.com").await;
    let uri = format!("/users/{}", user.id().get());

    let reply = send(
        &db,
        TestRequest::put()
            .uri(&uri)
            .set_json(json!({"username": "renamed"})),
    )
    .await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["username"], "renamed");
    assert_eq!(reply.body["email"], "test@example.com");
}

#[rstest]
#[actix_web::test]
async fn deleted_user_is_gone() {
    let db = database().await;
    let user = db.seed_user("testuser", "test@example.com").await;
    let uri = format!("/users/{}", user.id().get());

    let deleted = send(&db, TestRequest::delete().uri(&uri)).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["username"], "testuser");

    let fetched = send(&db, TestRequest::get().uri(&uri)).await;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);
    assert_eq!(fetched.body, json!({"error": "User not found"}));

    let again = send(&db, TestRequest::delete().uri(&uri)).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[rstest]
#[case(TestRequest::get())]
#[case(TestRequest::delete())]
#[actix_web::test]
async fn unknown_user_is_not_found(#[case] request: TestRequest) {
    let db = database().await;

    let reply = send(&db, request.uri("/users/999")).await;

    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(reply.body, json!({"error": "User not found"}));
}

#[rstest]
#[actix_web::test]
async fn updating_unknown_user_is_not_found() {
    let db = database().await;

    let reply = send(
        &db,
        TestRequest::put()
            .uri("/users/999")
            .set_json(json!({"username": "ghost"})),
    )
    .await;

    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(reply.body, json!({"error": "User not found"}));
}

#[rstest]
#[case(json!({"username": "testuser", "email": "other@example.com", "password": "pw"}), "username")]
#[case(json!({"username": "other", "email": "test@example.com", "password": "pw"}), "email")]
#[actix_web::test]
async fn duplicates_conflict(#[case] payload: Value, #[case] field: &str) {
    let db = database().await;
    db.seed_user("testuser", "test@example.com").await;

    let reply = send(&db, TestRequest::post().uri("/users").set_json(payload)).await;

    assert_eq!(reply.status, StatusCode::CONFLICT);
    assert_eq!(
        reply.body.pointer("/details/field").and_then(Value::as_str),
        Some(field)
    );
    let listed = send(&db, TestRequest::get().uri("/users")).await;
    assert_eq!(listed.body.as_array().map(Vec::len), Some(1));
}

#[rstest]
#[actix_web::test]
async fn renaming_onto_a_taken_username_conflicts() {
    let db = database().await;
    db.seed_user("first", "first@example.com").await;
    let second = db.seed_user("second", "second@example.com").await;

    let reply = send(
        &db,
        TestRequest::put()
            .uri(&format!("/users/{}", second.id().get()))
            .set_json(json!({"username": "first"})),
    )
    .await;

    assert_eq!(reply.status, StatusCode::CONFLICT);
}

#[rstest]
#[case(json!({"username": "", "email": "a@example.com", "password": "pw"}))]
#[case(json!({"username": "ada", "email": "not-an-email", "password": "pw"}))]
#[case(json!({"username": "ada", "email": "a@example.com"}))]
#[case(json!({"username": "ada", "email": "a@example.com", "password": 12}))]
#[actix_web::test]
async fn invalid_bodies_are_rejected(#[case] payload: Value) {
    let db = database().await;

    let reply = send(&db, TestRequest::post().uri("/users").set_json(payload)).await;

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert!(reply.body.get("error").and_then(Value::as_str).is_some());
    let listed = send(&db, TestRequest::get().uri("/users")).await;
    assert_eq!(listed.body, json!([]));
}

#[rstest]
#[actix_web::test]
async fn created_ids_are_distinct() {
    let db = database().await;
    let mut ids = Vec::new();
    for name in ["a", "b"] {
        let reply = send(
            &db,
            TestRequest::post().uri("/users").set_json(json!({
                "username": name,
                "email": format!("{name}@example.com"),
                "password": "pw",
            })),
        )
        .await;
        ids.push(id_of(&reply.body));
    }

    assert_ne!(ids[0], ids[1]);
}
