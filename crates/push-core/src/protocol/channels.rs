//! The channel-name vocabulary of the push-receiver IPC protocol.
//!
//! Every message traveling between the front-end process and the privileged
//! process is a *named* message: a channel name string plus an optional JSON
//! payload.  The names are a bit-exact contract with the privileged-process
//! service — renaming any of them breaks the protocol.
//!
//! # Directions
//!
//! ```text
//! front-end → privileged:  push-receiver.register
//!                          push-receiver.notifications.listen.start
//!                          push-receiver.notifications.listen.stop
//!
//! privileged → front-end:  push-receiver.register.success
//!                          push-receiver.register.error
//!                          push-receiver.notifications.listen.started
//!                          push-receiver.notifications.listen.stopped
//!                          push-receiver.notifications.received
//!                          push-receiver.notifications.error
//! ```
//!
//! The three outbound names are plain constants ([`channels`]); the six
//! inbound names additionally get a typed identity ([`InboundChannel`]) so
//! the bridge's dispatch table can be written as a total match instead of a
//! string comparison ladder.

// ── Channel name constants ────────────────────────────────────────────────────

/// Wire channel names, exactly as they appear on the transport.
pub mod channels {
    /// Outbound: request device registration for a sender id.
    pub const REGISTER: &str = "push-receiver.register";
    /// Outbound: start the notification listening session.
    pub const LISTEN_START: &str = "push-receiver.notifications.listen.start";
    /// Outbound: stop the notification listening session.
    pub const LISTEN_STOP: &str = "push-receiver.notifications.listen.stop";

    /// Inbound: registration completed; payload is the remote-defined
    /// success value (typically the credentials to listen with).
    pub const REGISTER_SUCCESS: &str = "push-receiver.register.success";
    /// Inbound: registration failed; payload is the remote-defined error.
    pub const REGISTER_ERROR: &str = "push-receiver.register.error";
    /// Inbound: the listening session is up.  No payload.
    pub const LISTEN_STARTED: &str = "push-receiver.notifications.listen.started";
    /// Inbound: the listening session has ended.  No payload.
    pub const LISTEN_STOPPED: &str = "push-receiver.notifications.listen.stopped";
    /// Inbound: a push notification arrived; payload is the notification.
    pub const NOTIFICATION_RECEIVED: &str = "push-receiver.notifications.received";
    /// Inbound: the listening session hit an error; payload is the
    /// remote-defined error.
    pub const NOTIFICATION_ERROR: &str = "push-receiver.notifications.error";
}

// ── Inbound channel identity ──────────────────────────────────────────────────

/// The six recognized inbound channels, as a typed enum.
///
/// Any inbound channel name that does not map to one of these variants is
/// unrecognized and, per the protocol contract, silently dropped by the
/// receiving side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InboundChannel {
    /// `push-receiver.register.success`
    RegisterSuccess,
    /// `push-receiver.register.error`
    RegisterError,
    /// `push-receiver.notifications.listen.started`
    ListenStarted,
    /// `push-receiver.notifications.listen.stopped`
    ListenStopped,
    /// `push-receiver.notifications.received`
    NotificationReceived,
    /// `push-receiver.notifications.error`
    NotificationError,
}

impl InboundChannel {
    /// All six recognized inbound channels, in wire-table order.
    ///
    /// The bridge iterates this array at construction time to register one
    /// transport handler per channel.
    pub const ALL: [InboundChannel; 6] = [
        InboundChannel::RegisterSuccess,
        InboundChannel::RegisterError,
        InboundChannel::ListenStarted,
        InboundChannel::ListenStopped,
        InboundChannel::NotificationReceived,
        InboundChannel::NotificationError,
    ];

    /// The wire channel name for this inbound channel.
    pub fn name(self) -> &'static str {
        match self {
            InboundChannel::RegisterSuccess => channels::REGISTER_SUCCESS,
            InboundChannel::RegisterError => channels::REGISTER_ERROR,
            InboundChannel::ListenStarted => channels::LISTEN_STARTED,
            InboundChannel::ListenStopped => channels::LISTEN_STOPPED,
            InboundChannel::NotificationReceived => channels::NOTIFICATION_RECEIVED,
            InboundChannel::NotificationError => channels::NOTIFICATION_ERROR,
        }
    }

    /// Resolves a wire channel name to its typed identity.
    ///
    /// Returns `None` for any name outside the recognized set — the caller
    /// decides what "unrecognized" means (the bridge drops such messages).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ch| ch.name() == name)
    }

    /// `true` for the two session-boundary channels that carry no payload
    /// on the local event surface (`listen.started` / `listen.stopped`).
    pub fn is_payload_less(self) -> bool {
        matches!(
            self,
            InboundChannel::ListenStarted | InboundChannel::ListenStopped
        )
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
