//! Shared Diesel error classification for the SQLite repositories.
//!
//! Each repository has its own port error enum, but the interesting Diesel
//! failures are the same everywhere: a lost connection, a uniqueness clash, a
//! dangling foreign key, or anything else. [`classify_diesel_error`] folds a
//! Diesel error into one of those buckets so the repositories only decide
//! which port variant each bucket becomes.

use tracing::debug;

use super::pool::PoolError;

/// Repository-agnostic view of a failed Diesel operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DieselFailure {
    /// The connection is unusable.
    Connection(&'static str),
    /// A unique constraint rejected the write. Carries the offending column
    /// when SQLite names it.
    UniqueViolation(String),
    /// A foreign-key constraint rejected the write.
    ForeignKeyViolation,
    /// Any other query failure.
    Query(&'static str),
}

/// Extract a readable message from a pool error.
pub(crate) fn pool_error_message(error: PoolError) -> String {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    }
}

/// Column named by a SQLite unique-constraint message such as
/// `UNIQUE constraint failed: users.email`.
fn unique_column(message: &str) -> String {
    message
        .rsplit_once(": ")
        .map(|(_, columns)| columns)
        .and_then(|columns| columns.split(", ").next())
        .map(|column| column.rsplit('.').next().unwrap_or(column).to_owned())
        .unwrap_or_else(|| message.to_owned())
}

/// Classify a Diesel error and emit debug context.
pub(crate) fn classify_diesel_error(error: diesel::result::Error) -> DieselFailure {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => DieselFailure::Query("record not found"),
        DieselError::QueryBuilderError(_) => DieselFailure::Query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            DieselFailure::UniqueViolation(unique_column(info.message()))
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            DieselFailure::ForeignKeyViolation
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DieselFailure::Connection("database connection error")
        }
        DieselError::DatabaseError(_, _) => DieselFailure::Query("database error"),
        _ => DieselFailure::Query("database error"),
    }
}
