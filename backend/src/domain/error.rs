//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses. Only the [`ErrorCode`] is part of the client-visible contract;
//! the message is for logs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable machine-readable error code describing the failure category.
///
/// The serialised form is the variant name (for example
/// `"UsernameAlreadyTaken"`), which is what clients receive in the `error`
/// field of the response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ErrorCode {
    /// Another account already uses the requested username.
    UsernameAlreadyTaken,
    /// Another account already uses the requested email address.
    EmailAlreadyInUse,
    /// No account matches the supplied identifier or email.
    UserNotFound,
    /// Any other failure, including requests that cannot be decoded.
    ServerError,
}

impl ErrorCode {
    /// Wire representation of the code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UsernameAlreadyTaken => "UsernameAlreadyTaken",
            Self::EmailAlreadyInUse => "EmailAlreadyInUse",
            Self::UserNotFound => "UserNotFound",
            Self::ServerError => "ServerError",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain error: a stable code plus an internal diagnostic message.
///
/// # Examples
/// ```
/// use accounts::domain::{Error, ErrorCode};
///
/// let err = Error::user_not_found();
/// assert_eq!(err.code(), ErrorCode::UserNotFound);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
}

impl Error {
    /// Create an error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Diagnostic message. Never sent to clients.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Convenience constructor for [`ErrorCode::UsernameAlreadyTaken`].
    #[must_use]
    pub fn username_already_taken() -> Self {
        Self::new(ErrorCode::UsernameAlreadyTaken, "username already taken")
    }

    /// Convenience constructor for [`ErrorCode::EmailAlreadyInUse`].
    #[must_use]
    pub fn email_already_in_use() -> Self {
        Self::new(ErrorCode::EmailAlreadyInUse, "email already in use")
    }

    /// Convenience constructor for [`ErrorCode::UserNotFound`].
    #[must_use]
    pub fn user_not_found() -> Self {
        Self::new(ErrorCode::UserNotFound, "user not found")
    }

    /// Convenience constructor for [`ErrorCode::ServerError`].
    pub fn server_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServerError, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ErrorCode::UsernameAlreadyTaken, "\"UsernameAlreadyTaken\"")]
    #[case(ErrorCode::EmailAlreadyInUse, "\"EmailAlreadyInUse\"")]
    #[case(ErrorCode::UserNotFound, "\"UserNotFound\"")]
    #[case(ErrorCode::ServerError, "\"ServerError\"")]
    fn codes_serialise_as_variant_names(#[case] code: ErrorCode, #[case] expected: &str) {
        let json = serde_json::to_string(&code).expect("serialise code");
        assert_eq!(json, expected);
        assert_eq!(format!("\"{}\"", code.as_str()), expected);
    }

    #[rstest]
    fn display_includes_code_and_message() {
        let err = Error::server_error("pool exhausted");
        assert_eq!(err.to_string(), "ServerError: pool exhausted");
    }

    #[rstest]
    #[case(Error::username_already_taken(), ErrorCode::UsernameAlreadyTaken)]
    #[case(Error::email_already_in_use(), ErrorCode::EmailAlreadyInUse)]
    #[case(Error::user_not_found(), ErrorCode::UserNotFound)]
    #[case(Error::server_error("bad body"), ErrorCode::ServerError)]
    fn constructors_set_expected_code(#[case] err: Error, #[case] expected: ErrorCode) {
        assert_eq!(err.code(), expected);
        assert!(!err.message().is_empty());
    }
}
