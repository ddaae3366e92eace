//! Opaque wrappers for remote-supplied error payloads.
//!
//! Exactly two error kinds exist at this layer, both pass-throughs from the
//! privileged process: a failed registration (surfaced on the
//! `register.error` event) and a failed or broken listening session
//! (surfaced on `notifications.error`).  The bridge performs no
//! classification, retry, or recovery; these types exist so callers that
//! want a `std::error::Error` value for reporting can wrap the payload
//! without inventing their own.

use serde_json::Value;
use thiserror::Error;

/// The privileged process reported that registration failed.
///
/// The inner value is the remote-defined error payload, unmodified.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("push registration failed: {0}")]
pub struct RegistrationError(pub Value);

impl RegistrationError {
    /// Wraps a `register.error` event payload.  A missing payload becomes
    /// JSON `null` so the error still formats.
    pub fn from_payload(payload: Option<Value>) -> Self {
        Self(payload.unwrap_or(Value::Null))
    }
}

/// The privileged process reported an error in the listening session.
///
/// The inner value is the remote-defined error payload, unmodified.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("push notification delivery failed: {0}")]
pub struct NotificationDeliveryError(pub Value);

impl NotificationDeliveryError {
    /// Wraps a `notifications.error` event payload.
    pub fn from_payload(payload: Option<Value>) -> Self {
        Self(payload.unwrap_or(Value::Null))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_registration_error_displays_remote_payload() {
        let err = RegistrationError::from_payload(Some(json!({"code": 7})));
        assert_eq!(err.to_string(), r#"push registration failed: {"code":7}"#);
    }

    #[test]
    fn test_missing_payload_becomes_null() {
        let err = RegistrationError::from_payload(None);
        assert_eq!(err.0, Value::Null);
        assert_eq!(err.to_string(), "push registration failed: null");
    }

    #[test]
    fn test_delivery_error_preserves_payload_verbatim() {
        let payload = json!({"reason": "connection reset", "retriable": true});
        let err = NotificationDeliveryError::from_payload(Some(payload.clone()));
        assert_eq!(err.0, payload);
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&RegistrationError::from_payload(None));
        assert_error(&NotificationDeliveryError::from_payload(None));
    }
}
