//! Entity trait: identity + continuity across state changes.
//!
//! Two entities are the same entity when they are of the same concrete type and
//! carry the same *assigned* identifier. An entity whose identifier is still the
//! type's sentinel is transient and equals nothing but itself.

use core::any::{Any, type_name};
use core::hash::{Hash, Hasher};

use crate::error::{DomainError, DomainResult};
use crate::id::Identifier;

/// Entity marker + identity semantics.
pub trait Entity: 'static {
    /// Strongly-typed entity identifier.
    type Id: Identifier;

    /// Returns the entity identifier (possibly the unset sentinel).
    fn id(&self) -> &Self::Id;

    /// `true` while no identity has been assigned.
    fn is_transient(&self) -> bool {
        self.id().is_unset()
    }

    /// Identity comparison against any other entity.
    ///
    /// - different concrete types never match, even with equal ids;
    /// - the same instance always matches itself;
    /// - otherwise a transient side never matches, so two unsaved entities
    ///   cannot collide with each other or with a persisted one.
    fn same_identity_as<O>(&self, other: &O) -> bool
    where
        Self: Sized,
        O: Entity,
    {
        let Some(other) = (other as &dyn Any).downcast_ref::<Self>() else {
            return false;
        };

        if core::ptr::eq(self, other) {
            return true;
        }

        if self.is_transient() || other.is_transient() {
            return false;
        }

        self.id() == other.id()
    }

    /// Feeds the concrete type name and the id's text form into `state`.
    ///
    /// Entities of different types with numerically equal ids hash apart.
    fn identity_hash<H: Hasher>(&self, state: &mut H)
    where
        Self: Sized,
    {
        type_name::<Self>().hash(state);
        self.id().to_string().hash(state);
    }
}

/// Implements `PartialEq`, `Eq` and `Hash` for an [`Entity`] from its identity.
///
/// A transient entity equals only itself (same address), so a clone of it is a
/// different value and compares unequal. Persisted entities of one type can be
/// used as `HashSet`/`HashMap` keys.
///
/// `Option<T>` then gives the null-safe operator behavior: two `None`s are
/// equal, `None` never equals `Some`.
#[macro_export]
macro_rules! impl_entity_identity {
    ($t:ty) => {
        impl ::core::cmp::PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                $crate::Entity::same_identity_as(self, other)
            }
        }

        impl ::core::cmp::Eq for $t {}

        impl ::core::hash::Hash for $t {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                $crate::Entity::identity_hash(self, state)
            }
        }
    };
}

/// Identity slot embedded in an entity.
///
/// Holds either the unset sentinel or an identifier assigned once, at
/// construction or later by the owning repository/factory.
#[derive(Debug, Clone)]
pub struct Identity<T: Identifier> {
    id: T,
}

impl<T: Identifier> Identity<T> {
    /// An identity that has not been assigned yet.
    pub fn transient() -> Self {
        Self { id: T::unset() }
    }

    /// An already-assigned identity.
    ///
    /// Passing the sentinel yields a transient identity.
    pub fn new(id: T) -> Self {
        Self { id }
    }

    pub fn get(&self) -> &T {
        &self.id
    }

    pub fn is_transient(&self) -> bool {
        self.id.is_unset()
    }

    /// Assigns the identifier of a transient entity.
    ///
    /// Fails when an identity is already present or when `id` is the sentinel.
    pub fn assign(&mut self, id: T) -> DomainResult<()> {
        if !self.is_transient() {
            return Err(DomainError::invalid_operation(format!(
                "identity already assigned (current: {}, attempted: {id})",
                self.id
            )));
        }
        if id.is_unset() {
            return Err(DomainError::invalid_operation(
                "cannot assign the unset identifier",
            ));
        }

        tracing::debug!(id_type = type_name::<T>(), %id, "identity assigned");
        self.id = id;
        Ok(())
    }
}

impl<T: Identifier> Default for Identity<T> {
    fn default() -> Self {
        Self::transient()
    }
}
