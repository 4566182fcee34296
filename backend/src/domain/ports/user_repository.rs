//! Driven port for user account persistence.
//!
//! The backing store owns identifier assignment and enforces email and
//! username uniqueness. Adapters report which uniqueness rule rejected a
//! write so the domain can surface the matching conflict.

use async_trait::async_trait;

use crate::domain::{StoredCredential, User, UserId, UserProfile};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// A write collided with an existing username.
        DuplicateUsername => "username violates a uniqueness constraint",
        /// A write collided with an existing email address.
        DuplicateEmail => "email violates a uniqueness constraint",
    }
}

/// Port for reading and writing user accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return the first user whose email or username matches.
    ///
    /// At most one record is returned even when the email and username
    /// collide with two different accounts.
    async fn find_by_email_or_username(
        &self,
        email: &str,
        username: &str,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch a user by exact email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserPersistenceError>;

    /// Insert a new user; the store assigns the identifier.
    async fn create(
        &self,
        profile: &UserProfile,
        credential: &StoredCredential,
    ) -> Result<User, UserPersistenceError>;

    /// Overwrite every mutable field of an existing user.
    ///
    /// Returns `Ok(None)` when no user has the identifier.
    async fn update(
        &self,
        id: UserId,
        profile: &UserProfile,
        credential: &StoredCredential,
    ) -> Result<Option<User>, UserPersistenceError>;
}
