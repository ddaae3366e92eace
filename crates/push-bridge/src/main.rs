//! push-bridge demo binary.
//!
//! Wires a [`NotificationBridge`] to one end of an in-process loopback
//! transport, puts a scripted peer on the other end, and drives the full
//! three-phase protocol:
//!
//! ```text
//! register            → register.success
//! listen.start        → listen.started, then N scripted notifications
//! listen.stop         → listen.stopped
//! ```
//!
//! The scripted peer stands in for the privileged process so the bridge's
//! behavior can be observed end to end without any real push-provider
//! connectivity.  Every local event the bridge raises is logged.
//!
//! # Usage
//!
//! ```text
//! push-bridge [OPTIONS]
//!
//! Options:
//!   --sender-id <ID>       Sender id for the registration phase [default: demo-sender]
//!   --notifications <N>    Scripted notifications to deliver [default: 3]
//!   --delay-ms <MS>        Delay between scripted notifications [default: 250]
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable                  | Default       | Description                    |
//! |---------------------------|---------------|--------------------------------|
//! | `PUSH_SENDER_ID`          | `demo-sender` | Sender id for registration     |
//! | `PUSH_NOTIFICATION_COUNT` | `3`           | Scripted notification count    |
//! | `PUSH_NOTIFICATION_DELAY` | `250`         | Delay between notifications ms |
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use serde_json::json;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use push_core::{channels, RegisterRequest, StartListeningRequest};

use push_bridge::application::{NotificationBridge, Transport};
use push_bridge::domain::{
    EventKind, LocalEvent, NotificationDeliveryError, RegistrationError,
};
use push_bridge::infrastructure::{PairEndpoint, PairTransport};

/// How long to wait for any single expected event before giving up.
const EVENT_WAIT: Duration = Duration::from_secs(5);

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Loopback demo for the push-receiver notification bridge.
#[derive(Debug, Parser)]
#[command(
    name = "push-bridge",
    about = "Drives the push-receiver bridge against a scripted loopback peer",
    version
)]
struct Cli {
    /// Sender id used for the registration phase.
    #[arg(long, default_value = "demo-sender", env = "PUSH_SENDER_ID")]
    sender_id: String,

    /// How many scripted notifications the loopback peer delivers.
    #[arg(long, default_value_t = 3, env = "PUSH_NOTIFICATION_COUNT")]
    notifications: u32,

    /// Delay between scripted notifications, in milliseconds.
    #[arg(long, default_value_t = 250, env = "PUSH_NOTIFICATION_DELAY")]
    delay_ms: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Log filtering follows RUST_LOG when set, otherwise `info`.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    info!(
        sender_id = %cli.sender_id,
        notifications = cli.notifications,
        "starting loopback demo"
    );

    // One in-process channel: the bridge on the front-end side, the script
    // on the privileged side.
    let (front, privileged) = PairTransport::pair();
    script_privileged_peer(&privileged, cli.notifications, cli.delay_ms);

    let bridge = NotificationBridge::new(front as Arc<dyn Transport>);

    // Funnel every local event into one stream the demo can await.
    let (events_tx, mut events) = mpsc::unbounded_channel::<LocalEvent>();
    for kind in EventKind::ALL {
        let events_tx = events_tx.clone();
        bridge.on(kind, move |event| {
            let _ = events_tx.send(event.clone());
        });
    }

    // ── Phase 1: register ─────────────────────────────────────────────────────
    bridge.register(cli.sender_id.clone());
    let event = next_event(&mut events).await.context("registration phase")?;
    let credentials = match event.kind {
        EventKind::RegisterSuccess => {
            info!(payload = ?event.payload, "registered");
            event
                .payload
                .context("register.success arrived without a payload")?
        }
        EventKind::RegisterError => {
            return Err(RegistrationError::from_payload(event.payload))
                .context("privileged process rejected registration");
        }
        other => anyhow::bail!("unexpected event during registration: {other}"),
    };

    // ── Phase 2: listen ───────────────────────────────────────────────────────
    bridge.start_listening_for_notifications(credentials, Vec::new());

    let event = next_event(&mut events).await.context("listening phase")?;
    match event.kind {
        EventKind::ListenStarted => info!("listening for notifications"),
        other => anyhow::bail!("expected listen.started, got: {other}"),
    }

    let mut received = 0u32;
    while received < cli.notifications {
        let event = next_event(&mut events).await.context("listening phase")?;
        match event.kind {
            EventKind::NotificationReceived => {
                received += 1;
                info!(payload = ?event.payload, "notification {received}/{}", cli.notifications);
            }
            EventKind::NotificationError => {
                let err = NotificationDeliveryError::from_payload(event.payload);
                warn!("delivery error: {err}");
            }
            other => anyhow::bail!("unexpected event while listening: {other}"),
        }
    }

    // ── Phase 3: stop ─────────────────────────────────────────────────────────
    bridge.stop_listening_for_notifications();
    loop {
        let event = next_event(&mut events).await.context("stop phase")?;
        match event.kind {
            EventKind::ListenStopped => break,
            // Notifications already in flight may still arrive first.
            EventKind::NotificationReceived => {
                info!(payload = ?event.payload, "late notification")
            }
            other => anyhow::bail!("unexpected event while stopping: {other}"),
        }
    }

    info!("listening stopped; demo complete");
    Ok(())
}

/// Waits for the next local event, with a timeout so a script bug cannot
/// hang the demo forever.
async fn next_event(events: &mut mpsc::UnboundedReceiver<LocalEvent>) -> anyhow::Result<LocalEvent> {
    tokio::time::timeout(EVENT_WAIT, events.recv())
        .await
        .context("timed out waiting for an event")?
        .context("event stream closed")
}

// ── Scripted privileged peer ──────────────────────────────────────────────────

/// Installs canned responses on the privileged-side endpoint.
///
/// This is a script, not a service: it answers each command with the wire
/// messages a real privileged process would send, without any provider
/// connectivity or state.
fn script_privileged_peer(endpoint: &Arc<PairEndpoint>, notifications: u32, delay_ms: u64) {
    // register → register.success carrying demo credentials
    let reply = Arc::clone(endpoint);
    endpoint.on(
        channels::REGISTER,
        Box::new(move |payload| {
            let request: RegisterRequest = match payload.and_then(|p| serde_json::from_value(p).ok())
            {
                Some(request) => request,
                None => {
                    reply.send(
                        channels::REGISTER_ERROR,
                        Some(json!({"message": "malformed register payload"})),
                    );
                    return;
                }
            };
            info!(sender_id = %request.sender_id, "peer: registering device");
            reply.send(
                channels::REGISTER_SUCCESS,
                Some(json!({"token": format!("demo-token-{}", request.sender_id)})),
            );
        }),
    );

    // listen.start → listen.started, then the scripted notification burst
    let reply = Arc::clone(endpoint);
    endpoint.on(
        channels::LISTEN_START,
        Box::new(move |payload| {
            let request: StartListeningRequest =
                match payload.and_then(|p| serde_json::from_value(p).ok()) {
                    Some(request) => request,
                    None => {
                        reply.send(
                            channels::NOTIFICATION_ERROR,
                            Some(json!({"message": "malformed listen.start payload"})),
                        );
                        return;
                    }
                };
            info!(
                credentials = %request.credentials,
                acked = request.persistent_ids.len(),
                "peer: listening session started"
            );
            reply.send(channels::LISTEN_STARTED, None);

            // Deliver the burst from a task so the pump is not blocked
            // while the script sleeps between notifications.
            let reply = Arc::clone(&reply);
            let acked = request.persistent_ids;
            tokio::spawn(async move {
                for n in 1..=notifications {
                    let id = format!("demo-{n}");
                    if acked.iter().any(|a| a == &id) {
                        continue; // already acknowledged; do not redeliver
                    }
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                    reply.send(
                        channels::NOTIFICATION_RECEIVED,
                        Some(json!({"id": id, "data": {"title": format!("demo notification {n}")}})),
                    );
                }
            });
        }),
    );

    // listen.stop → listen.stopped
    let reply = Arc::clone(endpoint);
    endpoint.on(
        channels::LISTEN_STOP,
        Box::new(move |_| {
            info!("peer: listening session stopped");
            reply.send(channels::LISTEN_STOPPED, None);
        }),
    );
}
