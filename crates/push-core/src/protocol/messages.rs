//! Typed message definitions for the push-receiver IPC protocol.
//!
//! The protocol is deliberately loose on the inbound side — result payloads
//! are remote-defined JSON that the front-end passes through opaquely — but
//! exact on the outbound side: the privileged process expects specific
//! camelCase keys.  The structs here pin those spellings with serde renames
//! so the wire shape is checked at compile time instead of assembled by hand
//! at every call site.
//!
//! # Outbound wire shapes
//!
//! ```json
//! {"senderId":"sender-123"}
//! {"credentials":{"token":"t"},"persistentIds":["id1","id2"]}
//! ```
//!
//! The `stop-listening` command carries no payload at all (not an empty
//! object — the payload slot is simply absent).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::channels::channels;

// ── Outbound payloads ─────────────────────────────────────────────────────────

/// Payload of the `push-receiver.register` command.
///
/// Asks the privileged process to register a device with the push provider
/// for the given sender id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// The push-provider sender id the device registers under.
    pub sender_id: String,
}

/// Payload of the `push-receiver.notifications.listen.start` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartListeningRequest {
    /// Credentials obtained from a prior successful registration.
    ///
    /// Remote-defined shape; the front-end stores and forwards it opaquely.
    pub credentials: Value,

    /// Identifiers of notifications that were already acknowledged, so the
    /// privileged process can skip redelivering them.
    ///
    /// Order is preserved verbatim and nothing is deduplicated — the
    /// sequence belongs to the caller and the remote service.
    pub persistent_ids: Vec<String>,
}

// ── Outbound commands ─────────────────────────────────────────────────────────

/// One outbound command, ready to hand to a transport.
///
/// Each variant corresponds to exactly one outbound wire channel.  The
/// command knows its own channel name and how to produce its JSON payload,
/// so senders never pair a name with the wrong payload shape.
#[derive(Debug, Clone, PartialEq)]
pub enum OutboundCommand {
    /// Register a device for the given sender id.
    Register(RegisterRequest),
    /// Start the notification listening session.
    StartListening(StartListeningRequest),
    /// Stop the notification listening session.  No payload.
    StopListening,
}

impl OutboundCommand {
    /// The wire channel this command is sent on.
    pub fn channel(&self) -> &'static str {
        match self {
            OutboundCommand::Register(_) => channels::REGISTER,
            OutboundCommand::StartListening(_) => channels::LISTEN_START,
            OutboundCommand::StopListening => channels::LISTEN_STOP,
        }
    }

    /// The JSON payload this command carries, or `None` for `StopListening`.
    pub fn payload(&self) -> Option<Value> {
        match self {
            OutboundCommand::Register(req) => {
                // Serializing a struct of plain String fields into a Value
                // cannot fail.
                Some(serde_json::to_value(req).expect("RegisterRequest serializes to JSON"))
            }
            OutboundCommand::StartListening(req) => Some(
                serde_json::to_value(req).expect("StartListeningRequest serializes to JSON"),
            ),
            OutboundCommand::StopListening => None,
        }
    }

    /// Packs this command into a [`WireEnvelope`] for transports that frame
    /// messages as a single unit.
    pub fn into_envelope(self) -> WireEnvelope {
        WireEnvelope {
            payload: self.payload(),
            channel: self.channel().to_string(),
        }
    }
}

// ── Wire envelope ─────────────────────────────────────────────────────────────

/// A named message with its optional payload, as one serializable unit.
///
/// Transports that move messages across a real process boundary serialize
/// this envelope (see [`crate::protocol::codec`]).  Transports that stay
/// in-process can pass it around as a plain struct.
///
/// # Wire shape
///
/// ```json
/// {"channel":"push-receiver.register","payload":{"senderId":"sender-123"}}
/// {"channel":"push-receiver.notifications.listen.stop"}
/// ```
///
/// A payload-less message omits the `payload` key entirely rather than
/// writing `"payload":null`, so the two cases stay distinguishable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireEnvelope {
    /// The wire channel name.
    pub channel: String,
    /// The message payload, if the channel carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl WireEnvelope {
    /// Builds an envelope from a channel name and optional payload.
    pub fn new(channel: impl Into<String>, payload: Option<Value>) -> Self {
        Self {
            channel: channel.into(),
            payload,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ── Outbound payload shapes ───────────────────────────────────────────────

    #[test]
    fn test_register_request_serializes_with_camel_case_key() {
        // Arrange
        let req = RegisterRequest {
            sender_id: "sender-123".to_string(),
        };

        // Act
        let value = serde_json::to_value(&req).unwrap();

        // Assert: the wire key is `senderId`, exactly
        assert_eq!(value, json!({"senderId": "sender-123"}));
    }

    #[test]
    fn test_start_listening_request_serializes_with_camel_case_keys() {
        // Arrange
        let req = StartListeningRequest {
            credentials: json!({"token": "t"}),
            persistent_ids: vec!["id1".to_string(), "id2".to_string()],
        };

        // Act
        let value = serde_json::to_value(&req).unwrap();

        // Assert: keys and ordering of persistentIds are verbatim
        assert_eq!(
            value,
            json!({
                "credentials": {"token": "t"},
                "persistentIds": ["id1", "id2"],
            })
        );
    }

    #[test]
    fn test_start_listening_preserves_persistent_id_order_and_duplicates() {
        // The sequence is opaque to this layer: no sorting, no deduplication.
        let req = StartListeningRequest {
            credentials: json!({}),
            persistent_ids: vec!["b".into(), "a".into(), "b".into()],
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["persistentIds"], json!(["b", "a", "b"]));
    }

    // ── OutboundCommand ───────────────────────────────────────────────────────

    #[test]
    fn test_register_command_targets_register_channel() {
        let cmd = OutboundCommand::Register(RegisterRequest {
            sender_id: "s".to_string(),
        });
        assert_eq!(cmd.channel(), "push-receiver.register");
        assert_eq!(cmd.payload(), Some(json!({"senderId": "s"})));
    }

    #[test]
    fn test_start_listening_command_targets_listen_start_channel() {
        let cmd = OutboundCommand::StartListening(StartListeningRequest {
            credentials: json!({"token": "t"}),
            persistent_ids: vec![],
        });
        assert_eq!(cmd.channel(), "push-receiver.notifications.listen.start");
        assert_eq!(
            cmd.payload(),
            Some(json!({"credentials": {"token": "t"}, "persistentIds": []}))
        );
    }

    #[test]
    fn test_stop_listening_command_has_no_payload() {
        let cmd = OutboundCommand::StopListening;
        assert_eq!(cmd.channel(), "push-receiver.notifications.listen.stop");
        assert_eq!(cmd.payload(), None);
    }

    #[test]
    fn test_into_envelope_carries_channel_and_payload() {
        // Arrange
        let cmd = OutboundCommand::Register(RegisterRequest {
            sender_id: "sender-123".to_string(),
        });

        // Act
        let envelope = cmd.into_envelope();

        // Assert
        assert_eq!(envelope.channel, "push-receiver.register");
        assert_eq!(envelope.payload, Some(json!({"senderId": "sender-123"})));
    }

    // ── WireEnvelope serde ────────────────────────────────────────────────────

    #[test]
    fn test_envelope_without_payload_omits_the_key() {
        // Arrange
        let envelope = WireEnvelope::new("push-receiver.notifications.listen.stop", None);

        // Act
        let json = serde_json::to_string(&envelope).unwrap();

        // Assert: no `"payload"` key at all
        assert_eq!(
            json,
            r#"{"channel":"push-receiver.notifications.listen.stop"}"#
        );
    }

    #[test]
    fn test_envelope_round_trips_with_payload() {
        let original = WireEnvelope::new(
            "push-receiver.notifications.received",
            Some(json!({"id": "n1"})),
        );
        let json = serde_json::to_string(&original).unwrap();
        let decoded: WireEnvelope = serde_json::from_str(&json).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn test_envelope_missing_payload_deserializes_to_none() {
        let decoded: WireEnvelope =
            serde_json::from_str(r#"{"channel":"push-receiver.register.success"}"#).unwrap();
        assert_eq!(decoded.payload, None);
    }
}
