//! Argon2id implementation of the `CredentialHasher` port.
//!
//! The work factor becomes the Argon2 time cost (iterations); memory cost is
//! fixed per instance. Output is a PHC string carrying the salt and every
//! parameter, so a later verifier needs nothing else.

use argon2::password_hash::SaltString;
use argon2::{Algorithm, Argon2, Params, PasswordHasher, Version};
use async_trait::async_trait;
use rand_core::OsRng;

use crate::domain::ports::{CredentialHashError, CredentialHasher};
use crate::domain::{PlaintextPassword, StoredCredential, WorkFactor};

/// Argon2id credential hasher.
#[derive(Debug, Clone, Copy)]
pub struct Argon2CredentialHasher {
    memory_kib: u32,
}

impl Argon2CredentialHasher {
    /// Memory cost recommended for interactive logins.
    pub const DEFAULT_MEMORY_KIB: u32 = 19_456;

    /// Create a hasher using `memory_kib` KiB per hash.
    pub fn new(memory_kib: u32) -> Self {
        Self { memory_kib }
    }

    fn argon2(&self, work_factor: WorkFactor) -> Result<Argon2<'static>, CredentialHashError> {
        let params = Params::new(self.memory_kib, work_factor.get(), 1, None).map_err(|err| {
            CredentialHashError::hashing(format!("invalid argon2 parameters: {err}"))
        })?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

impl Default for Argon2CredentialHasher {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MEMORY_KIB)
    }
}

#[async_trait]
impl CredentialHasher for Argon2CredentialHasher {
    async fn hash(
        &self,
        password: &PlaintextPassword,
        work_factor: WorkFactor,
    ) -> Result<StoredCredential, CredentialHashError> {
        let argon2 = self.argon2(work_factor)?;
        let password = password.clone();

        // CPU-bound; keep it off the async workers.
        let encoded = tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            argon2
                .hash_password(password.expose().as_bytes(), &salt)
                .map(|hash| hash.to_string())
        })
        .await
        .map_err(|err| CredentialHashError::hashing(format!("hashing task failed: {err}")))?
        .map_err(|err| CredentialHashError::hashing(err.to_string()))?;

        Ok(StoredCredential::new(encoded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::{PasswordHash, PasswordVerifier};
    use rstest::rstest;

    const TEST_MEMORY_KIB: u32 = 8;

    async fn hash(password: &str, work_factor: WorkFactor) -> StoredCredential {
        Argon2CredentialHasher::new(TEST_MEMORY_KIB)
            .hash(&PlaintextPassword::new(password), work_factor)
            .await
            .expect("hashing succeeds")
    }

    #[rstest]
    #[case(WorkFactor::ACCOUNT_CREATION, "t=12")]
    #[case(WorkFactor::ACCOUNT_EDIT, "t=10")]
    #[tokio::test]
    async fn work_factor_sets_time_cost(#[case] work_factor: WorkFactor, #[case] marker: &str) {
        let credential = hash("p1", work_factor).await;

        assert!(credential.as_str().starts_with("$argon2id$"));
        assert!(
            credential.as_str().contains(marker),
            "{} lacks {marker}",
            credential.as_str()
        );
    }

    #[tokio::test]
    async fn output_verifies_against_original_password_only() {
        let credential = hash("p1", WorkFactor::new(1)).await;
        let parsed = PasswordHash::new(credential.as_str()).expect("PHC string");

        assert_ne!(credential.as_str(), "p1");
        assert!(Argon2::default().verify_password(b"p1", &parsed).is_ok());
        assert!(Argon2::default().verify_password(b"p2", &parsed).is_err());
    }

    #[tokio::test]
    async fn same_password_gets_fresh_salt() {
        let first = hash("p1", WorkFactor::new(1)).await;
        let second = hash("p1", WorkFactor::new(1)).await;

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn zero_work_factor_is_rejected() {
        let err = Argon2CredentialHasher::new(TEST_MEMORY_KIB)
            .hash(&PlaintextPassword::new("p1"), WorkFactor::new(0))
            .await
            .expect_err("time cost below minimum");

        assert!(err.to_string().contains("invalid argon2 parameters"));
    }
}
