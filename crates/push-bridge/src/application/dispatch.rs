//! The static dispatch table: inbound wire channel → local event.
//!
//! This is the core translation of the bridge, kept as pure functions with
//! no I/O so it can be tested in isolation.  The mapping is total over the
//! six recognized channels and rejects everything else with `None` — an
//! unrecognized channel name is dropped by design, never an error.
//!
//! ```text
//! push-receiver.register.success              → register.success (payload)
//! push-receiver.register.error                → register.error (payload)
//! push-receiver.notifications.listen.started  → notifications.listen.started
//! push-receiver.notifications.listen.stopped  → notifications.listen.stopped
//! push-receiver.notifications.received        → notifications.received (payload)
//! push-receiver.notifications.error           → notifications.error (payload)
//! ```
//!
//! Payloads pass through unchanged, except that the two session-boundary
//! events are raised data-less regardless of what arrived on the wire.

use serde_json::Value;

use push_core::InboundChannel;

use crate::domain::events::{EventKind, LocalEvent};

/// The local event kind a recognized inbound channel translates to.
///
/// Total over [`InboundChannel`]; adding a wire channel without a local
/// event (or vice versa) fails to compile here.
pub fn event_kind_for(channel: InboundChannel) -> EventKind {
    match channel {
        InboundChannel::RegisterSuccess => EventKind::RegisterSuccess,
        InboundChannel::RegisterError => EventKind::RegisterError,
        InboundChannel::ListenStarted => EventKind::ListenStarted,
        InboundChannel::ListenStopped => EventKind::ListenStopped,
        InboundChannel::NotificationReceived => EventKind::NotificationReceived,
        InboundChannel::NotificationError => EventKind::NotificationError,
    }
}

/// Translates one inbound wire message into the local event it raises.
///
/// Returns `None` for unrecognized channel names — the caller drops the
/// message.  For recognized channels the payload passes through unchanged,
/// with the payload-less kinds stripped per the protocol table.
pub fn translate_inbound(channel: &str, payload: Option<Value>) -> Option<LocalEvent> {
    let channel = InboundChannel::from_name(channel)?;
    Some(LocalEvent::new(event_kind_for(channel), payload))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
