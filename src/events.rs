//! Registry notifications.
//!
//! This module provides:
//! - `RegistryEvent`: the `Added` / `Removed` notification schema
//! - `RegistryListener`: observer interface for notifications
//! - `EventLog`: in-memory recorder implementing `RegistryListener`
//! - `Notifier`: fans events out to listeners and to `tracing`
//!
//! Every successful `add` or `remove` produces exactly one event. Rejected
//! calls produce none.

mod event;
mod listener;
mod log;

pub use event::{EventKind, RegistryEvent};
pub use listener::{Notifier, RegistryListener};
pub use log::EventLog;
