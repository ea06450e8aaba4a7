//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. Conversion into domain aggregates
//! revalidates every column so a hand-edited database cannot smuggle invalid
//! values past the domain invariants.

use diesel::prelude::*;

use super::schema::{courses, instructors, users};

/// Row struct for reading from the users table. The password is never read.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct UserRow {
    pub id: i32,
    pub username: String,
    pub email: String,
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Changeset for partial user updates; `None` columns are left untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserUpdate<'a> {
    pub username: Option<&'a str>,
    pub email: Option<&'a str>,
}

// ---------------------------------------------------------------------------
// Instructor models
// ---------------------------------------------------------------------------

/// Row struct for reading from the instructors table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = instructors)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct InstructorRow {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Insertable struct for creating new instructor records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = instructors)]
pub(crate) struct NewInstructorRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

// ---------------------------------------------------------------------------
// Course models
// ---------------------------------------------------------------------------

/// Row struct for reading from the courses table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = courses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct CourseRow {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub instructor_id: i32,
}

/// Insertable struct for creating new course records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = courses)]
pub(crate) struct NewCourseRow<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub instructor_id: i32,
}
