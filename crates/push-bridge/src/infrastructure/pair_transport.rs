//! In-process duplex pair transport.
//!
//! [`PairTransport::pair`] creates two connected endpoints that behave like
//! the two ends of an IPC channel: a message sent on one endpoint is
//! delivered asynchronously to the handlers registered on the other.  To
//! keep the emulation honest, every message crosses the "boundary" as
//! encoded [`WireEnvelope`] bytes and is decoded again on the far side —
//! exactly what a real process-separated transport would do.
//!
//! # Delivery model
//!
//! Each direction has an unbounded queue drained by a dedicated tokio task
//! (the pump).  The pump decodes one envelope at a time and invokes every
//! handler registered for its channel, in registration order, before moving
//! to the next message — so delivery is FIFO per direction and handlers
//! never run concurrently with each other on the same endpoint.
//!
//! Messages for channels with no registered handler are dropped silently.
//! Envelopes that fail to decode are dropped with a warning; the stream
//! continues.
//!
//! # Lifetime
//!
//! The pumps exit when the sending endpoint is dropped (the queue closes).
//! `send` on an endpoint whose peer is gone logs and drops the message —
//! fire-and-forget has no one to report to.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde_json::Value;
use tokio::sync::mpsc;
use tracing::{debug, trace, warn};

use push_core::{decode_envelope, encode_envelope, WireEnvelope};

use crate::application::transport::{MessageHandler, Transport};

type HandlerMap = Mutex<HashMap<String, Vec<Arc<MessageHandler>>>>;

/// Factory for connected endpoint pairs.
pub struct PairTransport;

impl PairTransport {
    /// Creates two connected endpoints and spawns their delivery pumps.
    ///
    /// Must be called from within a tokio runtime.  The first endpoint is
    /// conventionally the front-end side and the second the privileged
    /// side, but the two are symmetrical.
    pub fn pair() -> (Arc<PairEndpoint>, Arc<PairEndpoint>) {
        let (a_tx, a_rx) = mpsc::unbounded_channel();
        let (b_tx, b_rx) = mpsc::unbounded_channel();

        let a = Arc::new(PairEndpoint {
            side: "a",
            to_peer: a_tx,
            handlers: Arc::new(HandlerMap::default()),
        });
        let b = Arc::new(PairEndpoint {
            side: "b",
            to_peer: b_tx,
            handlers: Arc::new(HandlerMap::default()),
        });

        // Each pump drains the queue *written by the peer* and dispatches
        // into this endpoint's handlers.
        tokio::spawn(run_pump("a", b_rx, Arc::clone(&a.handlers)));
        tokio::spawn(run_pump("b", a_rx, Arc::clone(&b.handlers)));

        (a, b)
    }
}

/// One end of an in-process duplex channel.
pub struct PairEndpoint {
    side: &'static str,
    /// Encoded envelopes headed for the peer's pump.
    to_peer: mpsc::UnboundedSender<Vec<u8>>,
    /// Handlers for messages arriving *at this* endpoint.
    handlers: Arc<HandlerMap>,
}

impl Transport for PairEndpoint {
    fn send(&self, channel: &str, payload: Option<Value>) {
        let envelope = WireEnvelope::new(channel, payload);
        let bytes = match encode_envelope(&envelope) {
            Ok(bytes) => bytes,
            Err(e) => {
                // Fire-and-forget: an unencodable message has nowhere to
                // report, so it is dropped here with a warning.
                warn!(side = self.side, channel, "dropping unencodable message: {e}");
                return;
            }
        };
        if self.to_peer.send(bytes).is_err() {
            debug!(side = self.side, channel, "peer endpoint gone; message dropped");
        }
    }

    fn on(&self, channel: &str, handler: MessageHandler) {
        self.handlers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(channel.to_string())
            .or_default()
            .push(Arc::new(handler));
    }
}

/// Drains one direction's queue, decoding and dispatching each envelope.
async fn run_pump(
    side: &'static str,
    mut rx: mpsc::UnboundedReceiver<Vec<u8>>,
    handlers: Arc<HandlerMap>,
) {
    while let Some(bytes) = rx.recv().await {
        let envelope = match decode_envelope(&bytes) {
            Ok(envelope) => envelope,
            Err(e) => {
                // A single corrupt message does not poison the channel.
                warn!(side, "dropping malformed envelope: {e}");
                continue;
            }
        };

        // Snapshot the handler list so a handler can register or send
        // without holding the lock it would need.
        let channel_handlers: Vec<Arc<MessageHandler>> = handlers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&envelope.channel)
            .map(|list| list.to_vec())
            .unwrap_or_default();

        if channel_handlers.is_empty() {
            trace!(side, channel = %envelope.channel, "no handler; message dropped");
            continue;
        }

        debug!(
            side,
            channel = %envelope.channel,
            handlers = channel_handlers.len(),
            "delivering message"
        );
        for handler in channel_handlers {
            handler(envelope.payload.clone());
        }
    }
    trace!(side, "pump exiting; peer endpoint dropped");
}

// ── Tests ─────────────────────────────────────────────────────────────────────
