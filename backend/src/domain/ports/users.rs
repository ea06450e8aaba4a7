//! Driving ports for the user resource.
//!
//! Inbound adapters depend on these use-case traits rather than on
//! repositories, so HTTP handlers never see persistence errors.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User, UserChanges, UserId};

/// Read-side use cases for users.
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Every user ordered by identifier.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// A single user; absent users yield a not-found error.
    async fn fetch_user(&self, id: UserId) -> Result<User, Error>;
}

/// Write-side use cases for users.
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Register a new user.
    async fn create_user(&self, user: NewUser) -> Result<User, Error>;

    /// Apply a partial update and return the stored result.
    async fn update_user(&self, id: UserId, changes: UserChanges) -> Result<User, Error>;

    /// Delete a user and return the removed record.
    async fn delete_user(&self, id: UserId) -> Result<User, Error>;
}
