//! Ordered listener registry with isolated fan-out.
//!
//! # Responsibility
//! - Hold subscriber callbacks for one payload type.
//! - Deliver a payload to every subscriber synchronously, in order.
//!
//! # Invariants
//! - Registration order is notification order.
//! - `SubscriptionId`s increase monotonically and are never reused.
//! - A panicking listener never prevents later listeners of the same round
//!   from running; it stays registered.

use log::error;
use std::fmt::{Display, Formatter};
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl Display for SubscriptionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of one notification round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotifyReport {
    /// Listeners that returned normally.
    pub delivered: usize,
    /// Listeners that panicked and were skipped.
    pub failed: usize,
}

type Listener<T> = Box<dyn FnMut(&T)>;

/// Subscriber list parameterized over the notified payload.
pub struct ListenerRegistry<T> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener<T>)>,
}

impl<T> Default for ListenerRegistry<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            entries: Vec::new(),
        }
    }
}

impl<T> ListenerRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one listener to the end of the notification order.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&T) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Removes one listener. Returns `false` when the id is not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Invokes every listener with the same payload reference.
    pub fn notify(&mut self, payload: &T) -> NotifyReport {
        let mut report = NotifyReport::default();
        for (id, listener) in self.entries.iter_mut() {
            match catch_unwind(AssertUnwindSafe(|| listener(payload))) {
                Ok(()) => report.delivered += 1,
                Err(_) => {
                    report.failed += 1;
                    error!(
                        "event=listener_failed module=listeners status=error subscription={}",
                        id
                    );
                }
            }
        }
        report
    }
}
