//! Response envelope shared by every account endpoint.
//!
//! ```json
//! {"data": {"id": 1, "email": "a@x.com", ...}, "success": true}
//! {"error": "UserNotFound", "success": false}
//! ```
//!
//! Absent members are omitted rather than serialised as `null`.

use serde::{Deserialize, Serialize};

use crate::domain::ErrorCode;

/// Outcome wrapper: exactly one of `error` or `data` is present and
/// `success` is `true` iff `error` is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub success: bool,
}

impl<T> ResponseEnvelope<T> {
    /// Wrap a successful payload.
    pub fn success(data: T) -> Self {
        Self {
            error: None,
            data: Some(data),
            success: true,
        }
    }

    /// Report a failure by code only.
    pub fn failure(code: ErrorCode) -> Self {
        Self {
            error: Some(code),
            data: None,
            success: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_omits_error_member() {
        let value = serde_json::to_value(ResponseEnvelope::success(json!({"id": 1})))
            .expect("serialise envelope");
        assert_eq!(value, json!({"data": {"id": 1}, "success": true}));
    }

    #[test]
    fn failure_omits_data_member() {
        let value = serde_json::to_value(ResponseEnvelope::<()>::failure(
            ErrorCode::EmailAlreadyInUse,
        ))
        .expect("serialise envelope");
        assert_eq!(value, json!({"error": "EmailAlreadyInUse", "success": false}));
    }
}
