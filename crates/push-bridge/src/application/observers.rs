//! Observer registry: many observers per event kind, invoked in order.
//!
//! The registry is the bridge's only mutable state, and it is caller-driven
//! state (who is subscribed), not protocol state.  It implements the
//! observer pattern as a plain registry — event kind → ordered list of
//! callbacks — rather than through event-emitter inheritance.
//!
//! # Locking
//!
//! The callback lists live behind a `Mutex`, but callbacks are never invoked
//! while it is held: [`raise`](ObserverRegistry::raise) snapshots the list
//! for the event's kind and runs the callbacks after releasing the lock.  A
//! callback may therefore subscribe, unsubscribe, or trigger another send
//! from inside its own invocation without deadlocking.  A callback added
//! *during* a raise is not invoked for that raise; it sees the next one.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::trace;

use crate::domain::events::{EventKind, LocalEvent, SubscriptionId};

/// A subscribed observer callback.
type Callback = Arc<dyn Fn(&LocalEvent) + Send + Sync>;

struct Subscription {
    id: SubscriptionId,
    callback: Callback,
}

/// Registry mapping each event kind to its ordered list of observers.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Mutex<HashMap<EventKind, Vec<Subscription>>>,
}

impl ObserverRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an observer for `kind`, appended after existing observers of the
    /// same kind.  Returns the handle that identifies this registration.
    pub fn subscribe(
        &self,
        kind: EventKind,
        callback: impl Fn(&LocalEvent) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId::new();
        self.lock().entry(kind).or_default().push(Subscription {
            id,
            callback: Arc::new(callback),
        });
        id
    }

    /// Removes the observer registered under `id` for `kind`.
    ///
    /// Returns `false` if no such registration exists (already removed, or
    /// the id belongs to a different kind).  Other observers of the same
    /// kind are unaffected.
    pub fn unsubscribe(&self, kind: EventKind, id: SubscriptionId) -> bool {
        let mut observers = self.lock();
        match observers.get_mut(&kind) {
            Some(subs) => {
                let before = subs.len();
                subs.retain(|sub| sub.id != id);
                subs.len() != before
            }
            None => false,
        }
    }

    /// Raises `event` to every observer of its kind, in registration order.
    ///
    /// Observers of other kinds are not invoked.  Raising an event nobody
    /// observes is a no-op.
    pub fn raise(&self, event: &LocalEvent) {
        // Snapshot under the lock, invoke outside it.
        let callbacks: Vec<Callback> = self
            .lock()
            .get(&event.kind)
            .map(|subs| subs.iter().map(|sub| Arc::clone(&sub.callback)).collect())
            .unwrap_or_default();

        if callbacks.is_empty() {
            trace!(event = %event.kind, "no observers for event");
            return;
        }

        for callback in callbacks {
            callback(event);
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<EventKind, Vec<Subscription>>> {
        // A poisoned lock only means another thread panicked mid-update;
        // the registry data is still a valid map, so keep going.
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn received_event() -> LocalEvent {
        LocalEvent::new(EventKind::NotificationReceived, Some(json!({"id": "n1"})))
    }

    #[test]
    fn test_single_observer_receives_the_event() {
        // Arrange
        let registry = ObserverRegistry::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen2 = Arc::clone(&seen);
        registry.subscribe(EventKind::NotificationReceived, move |event| {
            seen2.lock().unwrap().push(event.clone());
        });

        // Act
        registry.raise(&received_event());

        // Assert
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].payload, Some(json!({"id": "n1"})));
    }

    #[test]
    fn test_observers_invoked_in_registration_order() {
        // Arrange: two observers recording which ran when
        let registry = ObserverRegistry::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        let first = Arc::clone(&order);
        let second = Arc::clone(&order);
        registry.subscribe(EventKind::NotificationReceived, move |_| {
            first.lock().unwrap().push("first");
        });
        registry.subscribe(EventKind::NotificationReceived, move |_| {
            second.lock().unwrap().push("second");
        });

        // Act
        registry.raise(&received_event());

        // Assert: registration order preserved
        assert_eq!(*order.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_observers_of_other_kinds_are_not_invoked() {
        let registry = ObserverRegistry::new();
        let count = Arc::new(AtomicUsize::new(0));
        let count2 = Arc::clone(&count);
        registry.subscribe(EventKind::RegisterError, move |_| {
            count2.fetch_add(1, Ordering::SeqCst);
        });

        registry.raise(&received_event());

        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unsubscribe_stops_future_invocations() {
        // Arrange
        let registry = ObserverRegistry::new();
        let count = Arc::new(AtomicUsize::new(0));
        let count2 = Arc::clone(&count);
        let id = registry.subscribe(EventKind::NotificationReceived, move |_| {
            count2.fetch_add(1, Ordering::SeqCst);
        });

        // Act: one raise, then unsubscribe, then another raise
        registry.raise(&received_event());
        assert!(registry.unsubscribe(EventKind::NotificationReceived, id));
        registry.raise(&received_event());

        // Assert: only the first raise was observed
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unsubscribe_leaves_other_observers_untouched() {
        // Arrange: two observers, remove the first
        let registry = ObserverRegistry::new();
        let kept = Arc::new(AtomicUsize::new(0));
        let kept2 = Arc::clone(&kept);
        let removed_id = registry.subscribe(EventKind::NotificationReceived, |_| {});
        registry.subscribe(EventKind::NotificationReceived, move |_| {
            kept2.fetch_add(1, Ordering::SeqCst);
        });

        // Act
        registry.unsubscribe(EventKind::NotificationReceived, removed_id);
        registry.raise(&received_event());

        // Assert: the remaining observer still fires
        assert_eq!(kept.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unsubscribe_unknown_id_returns_false() {
        let registry = ObserverRegistry::new();
        let id = registry.subscribe(EventKind::RegisterSuccess, |_| {});

        // Wrong kind for an existing id
        assert!(!registry.unsubscribe(EventKind::RegisterError, id));
        // Right kind, but already removed
        assert!(registry.unsubscribe(EventKind::RegisterSuccess, id));
        assert!(!registry.unsubscribe(EventKind::RegisterSuccess, id));
    }

    #[test]
    fn test_raise_with_no_observers_is_a_no_op() {
        let registry = ObserverRegistry::new();
        // Must not panic or block
        registry.raise(&received_event());
    }

    #[test]
    fn test_callback_may_subscribe_from_within_a_raise() {
        // A re-entrant subscribe must not deadlock; the new observer sees
        // only subsequent raises.
        let registry = Arc::new(ObserverRegistry::new());
        let late = Arc::new(AtomicUsize::new(0));

        let registry2 = Arc::clone(&registry);
        let late2 = Arc::clone(&late);
        registry.subscribe(EventKind::NotificationReceived, move |_| {
            let late3 = Arc::clone(&late2);
            registry2.subscribe(EventKind::NotificationReceived, move |_| {
                late3.fetch_add(1, Ordering::SeqCst);
            });
        });

        registry.raise(&received_event());
        assert_eq!(late.load(Ordering::SeqCst), 0, "not invoked for the same raise");

        registry.raise(&received_event());
        assert_eq!(late.load(Ordering::SeqCst), 1, "invoked for the next raise");
    }
}
