//! Driven port for one-way password hashing.

use async_trait::async_trait;

use crate::domain::{PlaintextPassword, StoredCredential, WorkFactor};

use super::define_port_error;

define_port_error! {
    /// Failures raised by credential hashing adapters.
    pub enum CredentialHashError {
        /// The hash could not be produced.
        Hashing { message: String } => "credential hashing failed: {message}",
    }
}

/// Port transforming a plaintext password into a stored credential.
///
/// Implementations must be irreversible and deliberately slow; the cost
/// grows with `work_factor`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    /// Hash `password` at the given cost.
    async fn hash(
        &self,
        password: &PlaintextPassword,
        work_factor: WorkFactor,
    ) -> Result<StoredCredential, CredentialHashError>;
}
