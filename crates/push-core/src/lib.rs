//! # push-core
//!
//! Shared wire-protocol definitions for the push-receiver bridge: the named
//! IPC channels exchanged between the front-end process and the privileged
//! process, the typed payloads of the outbound commands, and the envelope
//! codec used when a transport has to move those messages across a process
//! boundary.
//!
//! This crate has zero dependencies on OS APIs, async runtimes, or sockets.
//! Both sides of the bridge can depend on it.
//!
//! # What lives here
//!
//! - **`protocol::channels`** – The channel-name vocabulary: three outbound
//!   command channels and six recognized inbound result channels, plus the
//!   [`InboundChannel`] enum that gives the inbound names a typed identity.
//!
//! - **`protocol::messages`** – [`OutboundCommand`] and its typed payload
//!   structs, whose serde renames pin the camelCase wire spelling
//!   (`senderId`, `persistentIds`) as a compile-checked contract.
//!
//! - **`protocol::codec`** – [`WireEnvelope`] and the JSON encode/decode
//!   pair a transport uses to frame a named message with its optional
//!   payload.

pub mod protocol;

// Re-export the most-used types at the crate root so callers can write
// `push_core::OutboundCommand` instead of the full module path.
pub use protocol::channels::{channels, InboundChannel};
pub use protocol::codec::{decode_envelope, encode_envelope, ProtocolError};
pub use protocol::messages::{
    OutboundCommand, RegisterRequest, StartListeningRequest, WireEnvelope,
};
