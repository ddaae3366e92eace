//! The local event surface of the notification bridge.
//!
//! Local events are in-process values raised to subscribed observers; they
//! are distinct from wire messages even though the two stand in 1:1
//! correspondence.  Observers subscribe by [`EventKind`] and receive the
//! remote-supplied payload untouched (or no payload for the two
//! session-boundary events).

use std::fmt;

use serde_json::Value;
use uuid::Uuid;

// ── Event vocabulary ──────────────────────────────────────────────────────────

/// The six local event kinds, in 1:1 correspondence with the recognized
/// inbound wire channels.
///
/// The mapping from wire channel to event kind is static and total; it lives
/// in the application layer's dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Registration with the push provider succeeded.  Payload: the
    /// remote-defined success value (typically credentials).
    RegisterSuccess,
    /// Registration failed.  Payload: the remote-defined error value.
    RegisterError,
    /// The listening session is up.  No payload.
    ListenStarted,
    /// The listening session has ended.  No payload.
    ListenStopped,
    /// A push notification arrived.  Payload: the notification.
    NotificationReceived,
    /// The listening session hit an error.  Payload: the remote-defined
    /// error value.
    NotificationError,
}

impl EventKind {
    /// All six event kinds, in the order of the wire table.
    pub const ALL: [EventKind; 6] = [
        EventKind::RegisterSuccess,
        EventKind::RegisterError,
        EventKind::ListenStarted,
        EventKind::ListenStopped,
        EventKind::NotificationReceived,
        EventKind::NotificationError,
    ];

    /// The caller-facing event name, as documented in the protocol table.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::RegisterSuccess => "register.success",
            EventKind::RegisterError => "register.error",
            EventKind::ListenStarted => "notifications.listen.started",
            EventKind::ListenStopped => "notifications.listen.stopped",
            EventKind::NotificationReceived => "notifications.received",
            EventKind::NotificationError => "notifications.error",
        }
    }

    /// `true` if events of this kind carry a payload.
    ///
    /// The two session-boundary events are raised data-less even when a
    /// stray payload arrives on the wire.
    pub fn carries_payload(self) -> bool {
        !matches!(self, EventKind::ListenStarted | EventKind::ListenStopped)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Raised events ─────────────────────────────────────────────────────────────

/// One raised local event: a kind plus zero-or-one payload value.
///
/// The payload is whatever the privileged process supplied, passed through
/// unchanged.  The bridge never inspects or rewrites it.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalEvent {
    /// Which event this is.
    pub kind: EventKind,
    /// The pass-through payload, or `None` for payload-less kinds.
    pub payload: Option<Value>,
}

impl LocalEvent {
    /// Builds an event, dropping any payload for kinds that do not carry one.
    pub fn new(kind: EventKind, payload: Option<Value>) -> Self {
        let payload = if kind.carries_payload() { payload } else { None };
        Self { kind, payload }
    }
}

// ── Subscription identity ─────────────────────────────────────────────────────

/// Opaque handle identifying one observer registration.
///
/// Returned by `NotificationBridge::on` and consumed by
/// `NotificationBridge::off`.  Closures are not comparable in Rust, so
/// unsubscription goes through this handle instead of the callback value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    /// Generates a fresh, unique handle.
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_names_match_protocol_table() {
        assert_eq!(EventKind::RegisterSuccess.as_str(), "register.success");
        assert_eq!(EventKind::RegisterError.as_str(), "register.error");
        assert_eq!(
            EventKind::ListenStarted.as_str(),
            "notifications.listen.started"
        );
        assert_eq!(
            EventKind::ListenStopped.as_str(),
            "notifications.listen.stopped"
        );
        assert_eq!(
            EventKind::NotificationReceived.as_str(),
            "notifications.received"
        );
        assert_eq!(EventKind::NotificationError.as_str(), "notifications.error");
    }

    #[test]
    fn test_all_lists_six_distinct_kinds() {
        let mut names: Vec<&str> = EventKind::ALL.iter().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn test_session_boundary_events_carry_no_payload() {
        assert!(!EventKind::ListenStarted.carries_payload());
        assert!(!EventKind::ListenStopped.carries_payload());
        assert!(EventKind::RegisterSuccess.carries_payload());
        assert!(EventKind::NotificationReceived.carries_payload());
    }

    #[test]
    fn test_local_event_new_passes_payload_through() {
        // Arrange / Act
        let event = LocalEvent::new(
            EventKind::NotificationReceived,
            Some(json!({"id": "n1"})),
        );

        // Assert: untouched
        assert_eq!(event.payload, Some(json!({"id": "n1"})));
    }

    #[test]
    fn test_local_event_new_drops_payload_for_payload_less_kinds() {
        // A stray wire payload on listen.started must not leak to observers.
        let event = LocalEvent::new(EventKind::ListenStarted, Some(json!({"stray": true})));
        assert_eq!(event.payload, None);
    }

    #[test]
    fn test_subscription_ids_are_unique() {
        let a = SubscriptionId::new();
        let b = SubscriptionId::new();
        assert_ne!(a, b);
    }
}
