//! push-bridge library crate.
//!
//! This crate provides the front-end half of the push-receiver IPC protocol:
//! a [`NotificationBridge`](application::NotificationBridge) that translates
//! between named wire messages on an injected transport and typed local
//! events raised to subscribed observers.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! Privileged process (named messages over IPC)
//!         ↕
//! [push-bridge]
//!   ├── domain/           Pure types: EventKind, LocalEvent, remote errors
//!   ├── application/      Transport port, dispatch table, observer registry,
//!   │                     NotificationBridge
//!   └── infrastructure/
//!         └── pair_transport/  In-process duplex transport (tokio mpsc pump)
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no I/O, no async, no transport knowledge.
//! - `application` depends on `domain` and `push-core` only; it defines the
//!   [`Transport`](application::Transport) port but never implements I/O.
//! - `infrastructure` depends on the other layers plus `tokio`.
//!
//! The bridge itself is a stateless translator: it keeps no protocol state
//! between messages, makes no ordering promises beyond transport delivery
//! order, and has no failure path of its own.  Sequencing discipline and
//! retry policy, if any, belong to the caller and the privileged process.

/// Domain layer: pure event-surface types (no I/O).
pub mod domain;

/// Application layer: the transport port and the bridge itself.
pub mod application;

/// Infrastructure layer: concrete transports.
pub mod infrastructure;
