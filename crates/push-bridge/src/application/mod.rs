//! Application layer for push-bridge.
//!
//! This layer holds the bridge's entire behavior: the [`Transport`] port it
//! speaks through, the static dispatch table that maps inbound wire channels
//! to local events, the observer registry, and [`NotificationBridge`]
//! itself.
//!
//! # Responsibilities
//!
//! - Translating recognized inbound wire messages into local events
//! - Emitting outbound commands on the transport, fire-and-forget
//! - Holding observer registrations and invoking them in order
//!
//! # What does NOT belong here?
//!
//! - Moving bytes between processes (infrastructure)
//! - Wire channel names and payload shapes (push-core)
//! - Any knowledge of how the privileged process fulfils a command

pub mod bridge;
pub mod dispatch;
pub mod observers;
pub mod transport;

pub use bridge::NotificationBridge;
pub use dispatch::{event_kind_for, translate_inbound};
pub use observers::ObserverRegistry;
pub use transport::{MessageHandler, Transport};
