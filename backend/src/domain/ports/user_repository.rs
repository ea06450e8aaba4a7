//! Driven port for user persistence.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{NewUser, User, UserChanges, UserId};

define_port_error! {
    /// Persistence errors raised by [`UserRepository`] adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// Username or email already belongs to another user.
        Duplicate { column: String } => "user already exists: {column}",
    }
}

/// Persistence port for user records.
///
/// Absent rows are `Ok(None)`, never an error; the domain decides what a
/// missing user means for the caller.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users ordered by identifier.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Insert a user and return it with its assigned identifier.
    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError>;

    /// Apply `changes` and return the updated user, or `None` if absent.
    async fn update(
        &self,
        id: UserId,
        changes: &UserChanges,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Remove a user and return the removed record, or `None` if absent.
    async fn delete(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;
}
