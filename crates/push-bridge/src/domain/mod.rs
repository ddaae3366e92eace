//! Domain layer for push-bridge.
//!
//! Pure types describing the local event surface: what callers subscribe to
//! and what their callbacks receive.  Nothing here touches a transport, an
//! async runtime, or any external state.
//!
//! # What belongs in the domain layer?
//!
//! - The event vocabulary ([`EventKind`], [`LocalEvent`])
//! - Subscription identity ([`SubscriptionId`])
//! - Opaque wrappers for remote-supplied error payloads
//!
//! # What does NOT belong here?
//!
//! - Wire channel names (those live in `push-core`)
//! - Callback storage or dispatch (application layer)
//! - Anything `tokio`

pub mod error;
pub mod events;

pub use error::{NotificationDeliveryError, RegistrationError};
pub use events::{EventKind, LocalEvent, SubscriptionId};
