//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting Actix handlers
//! return it directly. Only the error code reaches the client; the diagnostic
//! message of a server error is logged with the request's trace id.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TraceId};
use crate::inbound::http::envelope::ResponseEnvelope;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::UsernameAlreadyTaken | ErrorCode::EmailAlreadyInUse => StatusCode::CONFLICT,
        ErrorCode::UserNotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if self.code() == ErrorCode::ServerError {
            match TraceId::current() {
                Some(trace_id) => error!(%trace_id, message = self.message(), "request failed"),
                None => error!(message = self.message(), "request failed"),
            }
        }
        HttpResponse::build(self.status_code()).json(ResponseEnvelope::<()>::failure(self.code()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[case(Error::username_already_taken(), StatusCode::CONFLICT)]
    #[case(Error::email_already_in_use(), StatusCode::CONFLICT)]
    #[case(Error::user_not_found(), StatusCode::NOT_FOUND)]
    #[case(Error::server_error("db down"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn maps_codes_to_statuses(#[case] error: Error, #[case] expected: StatusCode) {
        assert_eq!(error.status_code(), expected);
    }

    #[actix_web::test]
    async fn server_error_body_hides_cause() {
        let response = Error::server_error("password authentication failed").error_response();
        let bytes = to_bytes(response.into_body()).await.expect("read body");
        let body: Value = serde_json::from_slice(&bytes).expect("json body");

        assert_eq!(body, json!({"error": "ServerError", "success": false}));
    }
}
