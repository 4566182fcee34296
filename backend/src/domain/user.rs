//! User account data model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

/// Validation errors returned when parsing user identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyId,
    InvalidId,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::InvalidId => write!(f, "user id must be an integer"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Database-assigned user identifier.
///
/// Identifiers are assigned once on creation and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = UserValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if value.trim() != value {
            return Err(UserValidationError::InvalidId);
        }
        value
            .parse::<i32>()
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }
}

/// The mutable, non-secret attributes of an account.
///
/// Supplied in full on both create and edit; there is no partial update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl UserProfile {
    /// Bundle the four profile attributes.
    pub fn new(
        email: impl Into<String>,
        username: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            username: username.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// Caller-supplied password. Wiped from memory on drop and never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct PlaintextPassword(Zeroizing<String>);

impl PlaintextPassword {
    /// Take ownership of a plaintext password.
    pub fn new(password: impl Into<String>) -> Self {
        Self(Zeroizing::new(password.into()))
    }

    /// Borrow the plaintext for hashing.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PlaintextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PlaintextPassword(<redacted>)")
    }
}

/// One-way hash output stored in place of the password.
#[derive(Clone, PartialEq, Eq)]
pub struct StoredCredential(String);

impl StoredCredential {
    /// Wrap an encoded hash produced by a credential hasher.
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Encoded hash string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for StoredCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StoredCredential(..)")
    }
}

/// Cost parameter passed to the credential hasher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkFactor(u32);

impl WorkFactor {
    /// Cost used when an account is created.
    pub const ACCOUNT_CREATION: Self = Self(12);
    /// Cost used when an account is edited.
    ///
    /// Lower than [`Self::ACCOUNT_CREATION`]; kept as deployed until the
    /// intended security posture is confirmed.
    pub const ACCOUNT_EDIT: Self = Self(10);

    /// Build an arbitrary work factor.
    #[must_use]
    pub const fn new(cost: u32) -> Self {
        Self(cost)
    }

    /// Raw cost value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Registered account.
///
/// ## Invariants
/// - `id` was assigned by persistence and never changes.
/// - `credential` is a hash, never the plaintext password.
///
/// Serialises as `{id, email, username, firstName, lastName, password}`
/// where `password` carries the stored credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "UserDto", into = "UserDto")]
pub struct User {
    id: UserId,
    profile: UserProfile,
    credential: StoredCredential,
}

impl User {
    /// Assemble a user from persisted parts.
    #[must_use]
    pub fn new(id: UserId, profile: UserProfile, credential: StoredCredential) -> Self {
        Self {
            id,
            profile,
            credential,
        }
    }

    /// Stable identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Profile attributes.
    #[must_use]
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Unique email address.
    #[must_use]
    pub fn email(&self) -> &str {
        self.profile.email.as_str()
    }

    /// Unique username.
    #[must_use]
    pub fn username(&self) -> &str {
        self.profile.username.as_str()
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        self.profile.first_name.as_str()
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        self.profile.last_name.as_str()
    }

    /// Stored credential (hash).
    #[must_use]
    pub fn credential(&self) -> &StoredCredential {
        &self.credential
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserDto {
    id: i32,
    email: String,
    username: String,
    first_name: String,
    last_name: String,
    password: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User {
            id,
            profile,
            credential,
        } = value;
        Self {
            id: id.get(),
            email: profile.email,
            username: profile.username,
            first_name: profile.first_name,
            last_name: profile.last_name,
            password: credential.0,
        }
    }
}

impl From<UserDto> for User {
    fn from(value: UserDto) -> Self {
        Self::new(
            UserId::new(value.id),
            UserProfile::new(
                value.email,
                value.username,
                value.first_name,
                value.last_name,
            ),
            StoredCredential::new(value.password),
        )
    }
}
