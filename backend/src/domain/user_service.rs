//! User use cases backed by a [`UserRepository`].

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use super::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use super::{Error, NewUser, User, UserChanges, UserId};

/// Message returned whenever a user lookup misses.
pub const USER_NOT_FOUND: &str = "User not found";

/// Domain service implementing [`UsersQuery`] and [`UsersCommand`].
#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Create a service over the given repository.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => Error::service_unavailable(message),
        UserPersistenceError::Query { message } => Error::internal(message),
        UserPersistenceError::Duplicate { column } => {
            Error::conflict("User already exists").with_details(json!({ "field": column }))
        }
    }
}

fn user_not_found() -> Error {
    Error::not_found(USER_NOT_FOUND)
}

#[async_trait]
impl UsersQuery for UserService {
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repository.list().await.map_err(map_persistence_error)
    }

    async fn fetch_user(&self, id: UserId) -> Result<User, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(user_not_found)
    }
}

#[async_trait]
impl UsersCommand for UserService {
    async fn create_user(&self, user: NewUser) -> Result<User, Error> {
        let created = self
            .repository
            .insert(&user)
            .await
            .map_err(map_persistence_error)?;
        info!(user_id = %created.id(), "user created");
        Ok(created)
    }

    async fn update_user(&self, id: UserId, changes: UserChanges) -> Result<User, Error> {
        self.repository
            .update(id, &changes)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(user_not_found)
    }

    async fn delete_user(&self, id: UserId) -> Result<User, Error> {
        let removed = self
            .repository
            .delete(id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(user_not_found)?;
        info!(user_id = %removed.id(), "user deleted");
        Ok(removed)
    }
}
