//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports ([`UserAccounts`]) are called by inbound adapters. Driven
//! ports ([`UserRepository`], [`CredentialHasher`]) are implemented by
//! outbound adapters and consumed by domain services.

mod macros;
pub(crate) use macros::define_port_error;

mod credential_hasher;
mod user_accounts;
mod user_repository;

#[cfg(test)]
pub use credential_hasher::MockCredentialHasher;
pub use credential_hasher::{CredentialHashError, CredentialHasher};
#[cfg(test)]
pub use user_accounts::MockUserAccounts;
pub use user_accounts::{CreateUserRequest, EditUserRequest, UserAccounts};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
