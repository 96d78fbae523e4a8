//! Synchronous event fan-out to registered listeners.

use tracing::trace;

use crate::event::Event;

/// A consumer of domain events.
///
/// Listeners react after a command has been executed (sending a notification,
/// bumping a counter, ...). A listener must not assume exclusive delivery:
/// the registry accepts the same listener more than once.
pub trait EventListener<E: Event> {
    fn on_event(&mut self, event: &E);
}

/// Ordered registry of event listeners.
///
/// - Registration order is notification order.
/// - No deduplication: a listener registered twice is notified twice per
///   event.
/// - Dispatch is synchronous on the caller's stack. Panics are not caught; a
///   panicking listener aborts the remaining notifications.
pub struct ListenerSet<E: Event> {
    listeners: Vec<Box<dyn EventListener<E>>>,
}

impl<E: Event> ListenerSet<E> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Append a listener to the registry.
    pub fn register(&mut self, listener: Box<dyn EventListener<E>>) {
        self.listeners.push(listener);
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Notify every registered listener, in registration order.
    pub fn notify(&mut self, event: &E) {
        trace!(
            event_type = event.event_type(),
            listeners = self.listeners.len(),
            "dispatching event"
        );

        for listener in &mut self.listeners {
            listener.on_event(event);
        }
    }

    /// Notify listeners of each event, preserving event order.
    pub fn notify_all(&mut self, events: &[E]) {
        for event in events {
            self.notify(event);
        }
    }
}

impl<E: Event> Default for ListenerSet<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Event> core::fmt::Debug for ListenerSet<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListenerSet")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
