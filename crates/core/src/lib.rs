//! `domainkit-core` — domain foundation building blocks.
//!
//! Identity-typed entities, structurally compared value objects, smart enums
//! and aggregate roots that collect domain events. This crate contains **pure
//! domain** primitives (no infrastructure concerns).

pub mod aggregate;
pub mod entity;
pub mod enumeration;
pub mod error;
pub mod event;
pub mod id;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use entity::{Entity, Identity};
pub use enumeration::Enumeration;
pub use error::{DomainError, DomainResult};
pub use event::{DomainEvent, EventLog};
pub use id::{AggregateId, Identifier};
pub use value_object::{AsComponent, Component, ValueObject};
