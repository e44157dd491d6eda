//! In-memory event recorder.

use parking_lot::Mutex;

use super::{RegistryEvent, RegistryListener};

/// Records every notification it receives, in delivery order.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use audit_registry::EventLog;
///
/// let log = Arc::new(EventLog::new());
/// assert!(log.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct EventLog {
    events: Mutex<Vec<RegistryEvent>>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the recorded events.
    pub fn events(&self) -> Vec<RegistryEvent> {
        self.events.lock().clone()
    }

    /// Returns the number of recorded events.
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Clears the log.
    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl RegistryListener for EventLog {
    fn on_event(&self, event: &RegistryEvent) {
        self.events.lock().push(event.clone());
    }
}
