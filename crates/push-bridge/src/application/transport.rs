//! The transport port: the bridge's only view of the IPC channel.
//!
//! The bridge never constructs or owns a channel; it is handed an
//! already-connected transport at construction time and uses exactly two
//! capabilities of it: sending a named message and registering a handler for
//! a named inbound channel.  Everything else about the channel — framing,
//! serialization, threading, failure handling — is the transport's own
//! contract and opaque to the bridge.

use serde_json::Value;

/// Handler invoked once per message arriving on a subscribed channel.
///
/// The argument is the message payload, or `None` for payload-less messages.
pub type MessageHandler = Box<dyn Fn(Option<Value>) + Send + Sync>;

/// A pre-existing, already-connected duplex message channel.
///
/// # Contract
///
/// - [`send`](Transport::send) is fire-and-forget: it hands the message to
///   the channel and returns.  Whether and how a send can fail is the
///   implementation's business; the bridge does not observe it.
/// - [`on`](Transport::on) registers a handler for one inbound channel name.
///   Multiple registrations on the same channel are all invoked, in
///   registration order — not a single-winner model.
/// - Handlers are invoked once per arriving message, in the order the
///   transport delivers messages.  The transport decides which thread or
///   task that happens on, so handlers must be `Send + Sync`.
pub trait Transport: Send + Sync {
    /// Sends a named message with an optional payload.  Fire-and-forget.
    fn send(&self, channel: &str, payload: Option<Value>);

    /// Registers a handler for messages arriving on `channel`.
    fn on(&self, channel: &str, handler: MessageHandler);
}
