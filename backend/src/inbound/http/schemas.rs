//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their serialised shape so the generated document
//! describes what clients actually receive.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// Another account already uses the requested username.
    UsernameAlreadyTaken,
    /// Another account already uses the requested email address.
    EmailAlreadyInUse,
    /// No account matches the identifier or email.
    UserNotFound,
    /// An unexpected failure occurred on the server.
    ServerError,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Database-assigned identifier.
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "ada@example.com")]
    email: String,
    #[schema(example = "ada")]
    username: String,
    #[schema(example = "Ada")]
    first_name: String,
    #[schema(example = "Lovelace")]
    last_name: String,
    /// Stored credential in PHC string format. Never the plaintext.
    #[schema(example = "$argon2id$v=19$m=19456,t=12,p=1$...")]
    password: String,
}

/// Envelope returned on success, carrying a user.
#[derive(ToSchema)]
#[schema(as = UserEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserEnvelopeSchema {
    data: UserSchema,
    /// Always `true`.
    success: bool,
}

/// Envelope returned on failure, carrying only the error code.
#[derive(ToSchema)]
#[schema(as = ErrorEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorEnvelopeSchema {
    error: ErrorCodeSchema,
    /// Always `false`.
    success: bool,
}
