//! Domain events and the per-aggregate event log.

use core::any::type_name;
use core::fmt::Debug;

/// Something that happened inside an aggregate's business operation.
///
/// Events are facts: immutable once recorded, delivered later by whatever
/// persists or dispatches them.
pub trait DomainEvent: Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (defaults to the Rust type name).
    fn event_type(&self) -> &'static str {
        type_name::<Self>()
    }
}

/// Append-only, clearable sequence of domain events.
///
/// An aggregate keeps its log in a private field and records into it from its
/// own business methods; outside code only sees the slice handed out by
/// [`crate::AggregateRoot::domain_events`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventLog<E> {
    events: Vec<E>,
}

impl<E: DomainEvent> EventLog<E> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Appends `event` after every event recorded so far.
    pub fn record(&mut self, event: E) {
        tracing::trace!(
            event_type = event.event_type(),
            pending = self.events.len() + 1,
            "domain event recorded"
        );
        self.events.push(event);
    }

    pub fn as_slice(&self) -> &[E] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, E> {
        self.events.iter()
    }

    /// Drops every recorded event. Clearing an empty log does nothing.
    pub fn clear(&mut self) {
        if !self.events.is_empty() {
            tracing::trace!(cleared = self.events.len(), "domain events cleared");
        }
        self.events.clear();
    }
}

impl<E: DomainEvent> Default for EventLog<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, E: DomainEvent> IntoIterator for &'a EventLog<E> {
    type Item = &'a E;
    type IntoIter = core::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
