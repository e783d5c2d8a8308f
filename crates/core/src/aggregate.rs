//! Aggregate root trait: an entity that owns the domain events it produces.

use crate::entity::Entity;
use crate::event::DomainEvent;

/// Aggregate root marker + event log access.
///
/// The aggregate records events into a private [`crate::EventLog`] from its own
/// business methods. Callers get a read-only, ordered view of what is pending
/// and clear it once the events have been persisted or dispatched.
///
/// Aggregates are identified by [`crate::AggregateId`] (a 64-bit integer);
/// the `Id` bound stays open so aggregates keyed by other identifiers can
/// still use the trait.
///
/// Aggregates are not internally synchronized; sharing one across threads is
/// the repository's/unit of work's concern.
pub trait AggregateRoot: Entity {
    /// Event type produced by this aggregate.
    type Event: DomainEvent;

    /// Events recorded since construction or since the last clear, oldest first.
    fn domain_events(&self) -> &[Self::Event];

    /// Forgets every pending event. A no-op when nothing is pending.
    fn clear_events(&mut self);

    fn has_pending_events(&self) -> bool {
        !self.domain_events().is_empty()
    }
}
