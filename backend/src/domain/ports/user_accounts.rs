//! Driving port for user account use-cases.
//!
//! Inbound adapters call this port to create, edit, and look up accounts
//! without importing persistence or hashing concerns, so HTTP handler tests
//! can substitute a mock.

use async_trait::async_trait;

use crate::domain::{Error, PlaintextPassword, User, UserId, UserProfile};

/// Input for creating an account.
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub profile: UserProfile,
    pub password: PlaintextPassword,
}

/// Input for replacing every field of an existing account.
#[derive(Debug, Clone)]
pub struct EditUserRequest {
    pub user_id: UserId,
    pub profile: UserProfile,
    pub password: PlaintextPassword,
}

/// Domain use-case port for account management.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserAccounts: Send + Sync {
    /// Register a new account after checking username and email are free.
    async fn create_user(&self, request: CreateUserRequest) -> Result<User, Error>;

    /// Replace all fields of an existing account.
    async fn edit_user(&self, request: EditUserRequest) -> Result<User, Error>;

    /// Look up the account with the given email.
    async fn get_user_by_email(&self, email: &str) -> Result<User, Error>;
}
