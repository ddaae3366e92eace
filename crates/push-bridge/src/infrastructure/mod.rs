//! Infrastructure layer for push-bridge.
//!
//! Concrete [`Transport`](crate::application::Transport) implementations.
//! In production the transport is whatever IPC mechanism connects the
//! front-end process to the privileged process; this crate ships an
//! in-process loopback pair that emulates that boundary (envelope-encoded
//! messages, asynchronous queue delivery) for the demo binary and for tests.
//!
//! # What does NOT belong here?
//!
//! - Translation logic or the observer registry (application layer)
//! - Channel names and payload shapes (push-core)

pub mod pair_transport;

pub use pair_transport::{PairEndpoint, PairTransport};
