//! User account domain service.
//!
//! Implements the [`UserAccounts`] driving port: validates uniqueness on
//! create, hashes credentials, and maps persistence outcomes onto the
//! account error taxonomy. Every unanticipated collaborator failure collapses
//! to [`ErrorCode::ServerError`](crate::domain::ErrorCode::ServerError).

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{
    CreateUserRequest, CredentialHashError, CredentialHasher, EditUserRequest,
    UserAccounts, UserPersistenceError, UserRepository,
};
use crate::domain::{Error, User, UserProfile, WorkFactor};

/// Account service implementing the [`UserAccounts`] port.
#[derive(Clone)]
pub struct UserAccountService<R, H> {
    users: Arc<R>,
    hasher: Arc<H>,
}

impl<R, H> UserAccountService<R, H> {
    /// Create a new service over the given repository and hasher.
    pub fn new(users: Arc<R>, hasher: Arc<H>) -> Self {
        Self { users, hasher }
    }
}

impl<R, H> UserAccountService<R, H>
where
    R: UserRepository,
    H: CredentialHasher,
{
    fn map_persistence_error(error: UserPersistenceError) -> Error {
        Error::server_error(format!("user repository error: {error}"))
    }

    /// Creation treats uniqueness rejections from the store as the
    /// authoritative conflict signal; the upfront read is not atomic with
    /// the insert.
    fn map_create_error(error: UserPersistenceError) -> Error {
        match error {
            UserPersistenceError::DuplicateUsername => Error::username_already_taken(),
            UserPersistenceError::DuplicateEmail => Error::email_already_in_use(),
            other => Self::map_persistence_error(other),
        }
    }

    fn map_hash_error(error: CredentialHashError) -> Error {
        Error::server_error(format!("credential hasher error: {error}"))
    }

    /// Reject the request when the matched record holds the username or the
    /// email. Username wins when both collide on the same record.
    fn check_conflict(existing: &User, profile: &UserProfile) -> Result<(), Error> {
        if existing.username() == profile.username {
            return Err(Error::username_already_taken());
        }
        if existing.email() == profile.email {
            return Err(Error::email_already_in_use());
        }
        Ok(())
    }
}

#[async_trait]
impl<R, H> UserAccounts for UserAccountService<R, H>
where
    R: UserRepository,
    H: CredentialHasher,
{
    async fn create_user(&self, request: CreateUserRequest) -> Result<User, Error> {
        let CreateUserRequest { profile, password } = request;

        let existing = self
            .users
            .find_by_email_or_username(&profile.email, &profile.username)
            .await
            .map_err(Self::map_persistence_error)?;
        if let Some(existing) = existing {
            Self::check_conflict(&existing, &profile)?;
        }

        let credential = self
            .hasher
            .hash(&password, WorkFactor::ACCOUNT_CREATION)
            .await
            .map_err(Self::map_hash_error)?;

        let user = self
            .users
            .create(&profile, &credential)
            .await
            .map_err(Self::map_create_error)?;
        debug!(user_id = %user.id(), "user account created");
        Ok(user)
    }

    async fn edit_user(&self, request: EditUserRequest) -> Result<User, Error> {
        let EditUserRequest {
            user_id,
            profile,
            password,
        } = request;

        // Hashing precedes the lookup, so a miss still pays the hashing cost.
        let credential = self
            .hasher
            .hash(&password, WorkFactor::ACCOUNT_EDIT)
            .await
            .map_err(Self::map_hash_error)?;

        if self
            .users
            .find_by_id(user_id)
            .await
            .map_err(Self::map_persistence_error)?
            .is_none()
        {
            return Err(Error::user_not_found());
        }

        let updated = self
            .users
            .update(user_id, &profile, &credential)
            .await
            .map_err(Self::map_persistence_error)?
            .ok_or_else(Error::user_not_found)?;
        debug!(user_id = %updated.id(), "user account updated");
        Ok(updated)
    }

    async fn get_user_by_email(&self, email: &str) -> Result<User, Error> {
        self.users
            .find_by_email(email)
            .await
            .map_err(Self::map_persistence_error)?
            .ok_or_else(Error::user_not_found)
    }
}

#[cfg(test)]
#[path = "user_account_service_tests.rs"]
mod tests;
