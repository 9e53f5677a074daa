//! Named-event pub/sub.
//!
//! Callbacks take no arguments and run synchronously, in registration
//! order, on the thread that calls [`Events::trigger`]. A callback that
//! panics is reported and skipped; the rest still run.

use std::collections::HashMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use tracing::warn;

/// Identifies one registration, for [`Events::off`].
pub type ListenerId = u64;

/// A zero-argument event callback.
pub type Callback = Box<dyn Fn() + Send + Sync>;

/// Subscribe to and publish named events.
pub trait Events: Send + Sync {
    /// Registers `callback` under `event`. Registrations accumulate.
    fn on(&mut self, event: &str, callback: Callback) -> ListenerId;

    /// Removes one registration. Returns false if it was not present.
    fn off(&mut self, event: &str, id: ListenerId) -> bool;

    /// Runs every callback registered under `event`. Unknown events are a
    /// no-op.
    fn trigger(&self, event: &str);
}

/// Default [`Events`] implementation.
#[derive(Default)]
pub struct Eventing {
    listeners: HashMap<String, Vec<(ListenerId, Callback)>>,
    next_id: ListenerId,
}

impl Eventing {
    /// Creates an emitter with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks registered under `event`.
    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners.get(event).map_or(0, Vec::len)
    }
}

impl Events for Eventing {
    fn on(&mut self, event: &str, callback: Callback) -> ListenerId {
        self.next_id += 1;
        let id = self.next_id;
        self.listeners
            .entry(event.to_string())
            .or_default()
            .push((id, callback));
        id
    }

    fn off(&mut self, event: &str, id: ListenerId) -> bool {
        let Some(callbacks) = self.listeners.get_mut(event) else {
            return false;
        };
        let before = callbacks.len();
        callbacks.retain(|(lid, _)| *lid != id);
        let removed = callbacks.len() != before;
        if callbacks.is_empty() {
            self.listeners.remove(event);
        }
        removed
    }

    fn trigger(&self, event: &str) {
        let Some(callbacks) = self.listeners.get(event) else {
            return;
        };
        for (id, callback) in callbacks {
            if panic::catch_unwind(AssertUnwindSafe(|| callback())).is_err() {
                warn!("listener {} for event {:?} panicked", id, event);
            }
        }
    }
}

impl fmt::Debug for Eventing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<&str, usize> = self
            .listeners
            .iter()
            .map(|(name, callbacks)| (name.as_str(), callbacks.len()))
            .collect();
        f.debug_struct("Eventing").field("listeners", &counts).finish()
    }
}
