//! Event delivery through `tracing` and subscribed listeners.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use super::RegistryEvent;

/// Observer of registry notifications.
///
/// Listeners are called synchronously while the affected subject is still
/// locked, so per-subject delivery order matches the order of mutations.
///
/// From `on_event` a listener may call `subjects`, `code_hash`,
/// `artifact_count` and `subscribe`, and may query other subjects. It must
/// not call `add`, `remove`, `artifacts` or `position_of` for the subject it
/// is being notified about, since those wait on the lock the registry holds.
/// Mutating other subjects is allowed but two listeners doing so in opposite
/// directions can deadlock each other.
pub trait RegistryListener: Send + Sync {
    /// Handles one notification.
    fn on_event(&self, event: &RegistryEvent);
}

/// Delivers events to the `tracing` pipeline and every subscribed listener.
#[derive(Default)]
pub struct Notifier {
    listeners: RwLock<Vec<Arc<dyn RegistryListener>>>,
}

impl Notifier {
    /// Creates a notifier with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a listener. It receives every event emitted afterwards.
    pub fn subscribe(&self, listener: Arc<dyn RegistryListener>) {
        self.listeners.write().push(listener);
    }

    /// Returns the number of subscribed listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.read().len()
    }

    /// Emits `event` as a structured tracing event, then hands it to each
    /// listener in subscription order.
    ///
    /// Listeners subscribed while this runs receive later events only.
    pub fn emit(&self, event: &RegistryEvent) {
        tracing::info!(
            target: "audit_registry::events",
            kind = %event.kind(),
            subject = %event.subject(),
            index = event.index(),
            id = %event.id(),
            owner = %event.owner(),
            "registry event"
        );

        let listeners = self.listeners.read().clone();
        for listener in &listeners {
            listener.on_event(event);
        }
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
