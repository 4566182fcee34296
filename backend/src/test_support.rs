//! Test utilities shared by unit and integration tests.
//!
//! Compiled for `cfg(test)` and when the `test-support` feature is enabled.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{StoredCredential, User, UserId, UserProfile};

#[derive(Default)]
struct Store {
    users: Vec<User>,
    next_id: i32,
    writes: usize,
    failure: Option<UserPersistenceError>,
}

impl Store {
    fn collision(&self, profile: &UserProfile, skip: Option<UserId>) -> Option<UserPersistenceError> {
        let others = || self.users.iter().filter(move |user| Some(user.id()) != skip);
        if others().any(|user| user.username() == profile.username) {
            return Some(UserPersistenceError::duplicate_username());
        }
        if others().any(|user| user.email() == profile.email) {
            return Some(UserPersistenceError::duplicate_email());
        }
        None
    }
}

/// `UserRepository` held in memory.
///
/// Mirrors the database: identifiers start at 1 and increase, and writes
/// that would duplicate an email or username are rejected.
///
/// # Examples
/// ```
/// use accounts::domain::ports::UserRepository;
/// use accounts::domain::{StoredCredential, UserProfile};
/// use accounts::test_support::InMemoryUserRepository;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let repo = InMemoryUserRepository::new();
/// let profile = UserProfile::new("a@x.com", "a", "Ada", "Lovelace");
/// let user = repo
///     .create(&profile, &StoredCredential::new("hash"))
///     .await
///     .expect("insert");
/// assert_eq!(user.id().get(), 1);
/// assert_eq!(repo.write_count(), 1);
/// # });
/// ```
#[derive(Default)]
pub struct InMemoryUserRepository {
    store: Mutex<Store>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn store(&self) -> Result<MutexGuard<'_, Store>, UserPersistenceError> {
        let store = self
            .store
            .lock()
            .map_err(|_| UserPersistenceError::query("in-memory store lock poisoned"))?;
        if let Some(failure) = store.failure.clone() {
            return Err(failure);
        }
        Ok(store)
    }

    /// Number of successful inserts and updates so far.
    pub fn write_count(&self) -> usize {
        self.store.lock().map(|store| store.writes).unwrap_or_default()
    }

    /// Snapshot of every stored user, in insertion order.
    pub fn users(&self) -> Vec<User> {
        self.store
            .lock()
            .map(|store| store.users.clone())
            .unwrap_or_default()
    }

    /// Make every subsequent call fail with `failure`.
    pub fn fail_with(&self, failure: UserPersistenceError) {
        if let Ok(mut store) = self.store.lock() {
            store.failure = Some(failure);
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email_or_username(
        &self,
        email: &str,
        username: &str,
    ) -> Result<Option<User>, UserPersistenceError> {
        let store = self.store()?;
        Ok(store
            .users
            .iter()
            .find(|user| user.email() == email || user.username() == username)
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let store = self.store()?;
        Ok(store.users.iter().find(|user| user.id() == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserPersistenceError> {
        let store = self.store()?;
        Ok(store.users.iter().find(|user| user.email() == email).cloned())
    }

    async fn create(
        &self,
        profile: &UserProfile,
        credential: &StoredCredential,
    ) -> Result<User, UserPersistenceError> {
        let mut store = self.store()?;
        if let Some(collision) = store.collision(profile, None) {
            return Err(collision);
        }
        store.next_id += 1;
        let user = User::new(
            UserId::new(store.next_id),
            profile.clone(),
            credential.clone(),
        );
        store.users.push(user.clone());
        store.writes += 1;
        Ok(user)
    }

    async fn update(
        &self,
        id: UserId,
        profile: &UserProfile,
        credential: &StoredCredential,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut store = self.store()?;
        let Some(index) = store.users.iter().position(|user| user.id() == id) else {
            return Ok(None);
        };
        if let Some(collision) = store.collision(profile, Some(id)) {
            return Err(collision);
        }
        let user = User::new(id, profile.clone(), credential.clone());
        store.users[index] = user.clone();
        store.writes += 1;
        Ok(Some(user))
    }
}
