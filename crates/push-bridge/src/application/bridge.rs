//! The notification bridge: commands out, events in.
//!
//! [`NotificationBridge`] is the front-end-process half of the push-receiver
//! protocol.  It is bound permanently to one transport at construction time
//! and does two things for its whole life:
//!
//! - **Outbound**: each public operation sends exactly one named command on
//!   the transport and returns immediately.  No waiting, no result value —
//!   outcomes surface later as events.
//! - **Inbound**: one transport handler per recognized inbound channel,
//!   registered synchronously inside `new` so no recognized message can
//!   arrive unhandled after construction.  Each handler runs the fixed
//!   translation from the dispatch table and raises the resulting local
//!   event to subscribed observers.
//!
//! # Three-phase protocol
//!
//! ```text
//! register(sender_id)          →  register.success | register.error
//! start_listening(creds, ids)  →  notifications.listen.started,
//!                                 then notifications.received*  |  notifications.error
//! stop_listening()             →  notifications.listen.stopped
//! ```
//!
//! The bridge does not gate these phases: calling any operation at any time,
//! any number of times, simply sends that many commands.  Sequencing
//! discipline belongs to the caller and the privileged process.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use push_core::{InboundChannel, OutboundCommand, RegisterRequest, StartListeningRequest};

use crate::domain::events::{EventKind, LocalEvent, SubscriptionId};

use super::dispatch::translate_inbound;
use super::observers::ObserverRegistry;
use super::transport::Transport;

/// Stateless translator between wire messages and local events.
///
/// Cheap to share: clone the `Arc` it lives in, or hand out references.  All
/// methods take `&self`.
pub struct NotificationBridge {
    transport: Arc<dyn Transport>,
    observers: Arc<ObserverRegistry>,
}

impl NotificationBridge {
    /// Binds a bridge to `transport` for the bridge's entire lifetime.
    ///
    /// Registers one transport handler per recognized inbound channel (six
    /// registrations) before returning.  The handlers hold no reference back
    /// to the bridge itself — only to the shared observer registry — so the
    /// transport outliving the bridge value is harmless.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        let observers = Arc::new(ObserverRegistry::new());

        for channel in InboundChannel::ALL {
            let observers = Arc::clone(&observers);
            let name = channel.name();
            transport.on(
                name,
                Box::new(move |payload| {
                    // The table is total over registered channels, so this
                    // always yields an event; the lookup keeps every handler
                    // identical instead of six hand-written translations.
                    if let Some(event) = translate_inbound(name, payload) {
                        observers.raise(&event);
                    }
                }),
            );
        }

        Self {
            transport,
            observers,
        }
    }

    // ── Outbound operations ───────────────────────────────────────────────────

    /// Asks the privileged process to register a device for push
    /// notifications under `sender_id`.
    ///
    /// Fire-and-forget; the outcome arrives later as a
    /// [`RegisterSuccess`](EventKind::RegisterSuccess) or
    /// [`RegisterError`](EventKind::RegisterError) event.  Calling this
    /// again before a response arrives sends a second, independent command.
    pub fn register(&self, sender_id: impl Into<String>) {
        self.send(OutboundCommand::Register(RegisterRequest {
            sender_id: sender_id.into(),
        }));
    }

    /// Asks the privileged process to start listening for notifications.
    ///
    /// `credentials` is the remote-defined value from a successful
    /// registration, forwarded opaquely.  `persistent_ids` are the
    /// already-acknowledged notification ids, passed through in order and
    /// unexamined.
    ///
    /// Events emitted over the session:
    /// [`ListenStarted`](EventKind::ListenStarted), zero or more
    /// [`NotificationReceived`](EventKind::NotificationReceived), or
    /// [`NotificationError`](EventKind::NotificationError).
    pub fn start_listening_for_notifications(
        &self,
        credentials: Value,
        persistent_ids: Vec<String>,
    ) {
        self.send(OutboundCommand::StartListening(StartListeningRequest {
            credentials,
            persistent_ids,
        }));
    }

    /// Asks the privileged process to stop listening for notifications.
    ///
    /// Acknowledged only by the eventual
    /// [`ListenStopped`](EventKind::ListenStopped) event; notifications
    /// already in flight may still arrive first.
    pub fn stop_listening_for_notifications(&self) {
        self.send(OutboundCommand::StopListening);
    }

    fn send(&self, command: OutboundCommand) {
        debug!(channel = command.channel(), "sending outbound command");
        self.transport.send(command.channel(), command.payload());
    }

    // ── Observer surface ──────────────────────────────────────────────────────

    /// Subscribes `callback` to events of `kind`.
    ///
    /// Multiple observers per kind are supported; on each raise all of them
    /// run, in registration order.  Subscribing before or after the
    /// corresponding command is sent are both fine — events only ever fire
    /// when the transport delivers the underlying message.
    pub fn on(
        &self,
        kind: EventKind,
        callback: impl Fn(&LocalEvent) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.observers.subscribe(kind, callback)
    }

    /// Removes the observer registered under `id` for `kind`.
    ///
    /// Returns `false` if no such registration exists.
    pub fn off(&self, kind: EventKind, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(kind, id)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
