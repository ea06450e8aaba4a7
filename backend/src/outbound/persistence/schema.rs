//! Diesel table definitions for the SQLite schema.
//!
//! These definitions must match `backend/migrations` exactly. When a
//! migration changes a table, regenerate with `diesel print-schema` or update
//! by hand.

diesel::table! {
    /// Registered users. `username` and `email` are unique.
    users (id) {
        id -> Integer,
        username -> Text,
        email -> Text,
        /// Write-only credential; never selected back out.
        password -> Text,
    }
}

diesel::table! {
    /// Instructors. `email` is unique.
    instructors (id) {
        id -> Integer,
        name -> Text,
        email -> Text,
    }
}

diesel::table! {
    /// Courses, each owned by exactly one instructor.
    courses (id) {
        id -> Integer,
        title -> Text,
        description -> Text,
        /// Foreign key to `instructors.id`.
        instructor_id -> Integer,
    }
}

diesel::joinable!(courses -> instructors (instructor_id));

diesel::allow_tables_to_appear_in_same_query!(courses, instructors, users);
