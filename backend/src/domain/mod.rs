//! Domain primitives, ports, and services.
//!
//! Purpose: define the account entities and the use-case logic that sits
//! between inbound adapters and the outbound persistence and hashing
//! adapters. Types here never depend on HTTP or SQL.
//!
//! Public surface:
//! - Error / ErrorCode: failure taxonomy returned by use-cases.
//! - User and its parts: identity, profile, and stored credential.
//! - UserAccountService: implementation of the [`ports::UserAccounts`] port.
//! - TraceId: request-scoped correlation identifier.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_account_service;

pub use self::error::{Error, ErrorCode};
pub use self::trace_id::TraceId;
pub use self::user::{
    PlaintextPassword, StoredCredential, User, UserId, UserProfile, UserValidationError,
    WorkFactor,
};
pub use self::user_account_service::UserAccountService;
