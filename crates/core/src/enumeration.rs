//! Smart enums: closed, type-declared sets of `(id, name)` members.
//!
//! Each enumeration type lists its members once in [`Enumeration::DECLARED`].
//! On first access the list is validated for id uniqueness and indexed; the
//! result is cached per type for the life of the process.

use core::any::{Any, TypeId, type_name};
use core::cmp::Ordering;
use core::fmt::Debug;
use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::error::{DomainError, DomainResult};

/// A closed set of named, integer-coded members.
///
/// Equality and hashing use the id within one concrete type; ordering is by id.
/// Uniqueness of ids is the declarer's contract and is checked the first time
/// the members are queried.
pub trait Enumeration: Debug + Send + Sync + Sized + 'static {
    /// Every member of the type.
    const DECLARED: &'static [Self];

    fn id(&self) -> i32;

    fn name(&self) -> &str;

    /// All declared members, once the declaration has been validated.
    fn all() -> DomainResult<&'static [Self]> {
        match &*registry::members::<Self>() {
            Ok(_) => Ok(Self::DECLARED),
            Err(err) => Err(err.clone()),
        }
    }

    fn from_id(id: i32) -> DomainResult<&'static Self> {
        let entry = registry::members::<Self>();
        let index = match &*entry {
            Ok(index) => index,
            Err(err) => return Err(err.clone()),
        };
        index
            .by_id
            .get(&id)
            .map(|&position| &Self::DECLARED[position])
            .ok_or_else(|| DomainError::unknown_member(type_name::<Self>(), id))
    }

    fn from_name(name: &str) -> DomainResult<&'static Self> {
        let entry = registry::members::<Self>();
        let index = match &*entry {
            Ok(index) => index,
            Err(err) => return Err(err.clone()),
        };
        index
            .by_name
            .get(name)
            .map(|&position| &Self::DECLARED[position])
            .ok_or_else(|| DomainError::unknown_member(type_name::<Self>(), name))
    }

    /// Membership comparison against a member of any enumeration type.
    ///
    /// Members of different types never match, even with equal ids.
    fn same_member_as<O: Enumeration>(&self, other: &O) -> bool {
        (other as &dyn Any)
            .downcast_ref::<Self>()
            .is_some_and(|other| other.id() == self.id())
    }

    /// Orders against an arbitrary value.
    ///
    /// Only members of the same enumeration type are comparable; anything else
    /// is a contract violation reported as [`DomainError::InvalidArgument`].
    fn try_compare(&self, other: &dyn Any) -> DomainResult<Ordering> {
        other
            .downcast_ref::<Self>()
            .map(|other| self.id().cmp(&other.id()))
            .ok_or_else(|| {
                DomainError::invalid_argument(format!(
                    "`{}` can only be compared with members of the same enumeration",
                    type_name::<Self>()
                ))
            })
    }
}

mod registry {
    use super::*;

    /// Positions of declared members, keyed by id and by name.
    #[derive(Debug)]
    pub(super) struct MemberIndex {
        pub(super) by_id: HashMap<i32, usize>,
        pub(super) by_name: HashMap<&'static str, usize>,
    }

    type Entry = Arc<DomainResult<MemberIndex>>;

    static REGISTRY: Lazy<RwLock<HashMap<TypeId, Entry>>> = Lazy::new(Default::default);

    /// Cached index for `E`, built on first use.
    ///
    /// Concurrent first callers may each build an index, but only the first
    /// one inserted is kept and handed out.
    pub(super) fn members<E: Enumeration>() -> Entry {
        let key = TypeId::of::<E>();
        if let Some(entry) = REGISTRY.read().get(&key) {
            return Arc::clone(entry);
        }

        let built = Arc::new(build::<E>());
        let mut registry = REGISTRY.write();
        Arc::clone(registry.entry(key).or_insert(built))
    }

    fn build<E: Enumeration>() -> DomainResult<MemberIndex> {
        let enumeration = type_name::<E>();
        let mut index = MemberIndex {
            by_id: HashMap::with_capacity(E::DECLARED.len()),
            by_name: HashMap::with_capacity(E::DECLARED.len()),
        };

        for (position, member) in E::DECLARED.iter().enumerate() {
            if index.by_id.insert(member.id(), position).is_some() {
                tracing::warn!(enumeration, id = member.id(), "duplicate enumeration id");
                return Err(DomainError::DuplicateEnumerationId {
                    enumeration,
                    id: member.id(),
                });
            }
            index.by_name.entry(member.name()).or_insert(position);
        }

        tracing::debug!(enumeration, members = E::DECLARED.len(), "enumeration registry built");
        Ok(index)
    }
}

/// Declares a smart enum.
///
/// The generated struct exposes one associated constant per member, lists them
/// in [`Enumeration::DECLARED`], displays as its name, compares and hashes by
/// id, and orders by id. Members can be value object components (by id). Its fields are private, so no members beyond the
/// declared ones can be built outside the declaring module.
///
/// ```ignore
/// enumeration! {
///     /// Card colors.
///     pub struct Color {
///         RED = (1, "Red"),
///         GREEN = (2, "Green"),
///     }
/// }
///
/// assert_eq!(Color::RED.to_string(), "Red");
/// assert_eq!(Color::all()?.len(), 2);
/// ```
#[macro_export]
macro_rules! enumeration {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$member_meta:meta])* $member:ident = ($id:expr, $label:expr) ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        $vis struct $name {
            id: i32,
            name: &'static str,
        }

        impl $name {
            $(
                $(#[$member_meta])*
                pub const $member: $name = $name { id: $id, name: $label };
            )*
        }

        impl $crate::Enumeration for $name {
            const DECLARED: &'static [Self] = &[$($name::$member),*];

            fn id(&self) -> i32 {
                self.id
            }

            fn name(&self) -> &str {
                self.name
            }
        }

        impl ::core::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.id == other.id
            }
        }

        impl ::core::cmp::Eq for $name {}

        impl ::core::hash::Hash for $name {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash(&self.id, state);
            }
        }

        impl ::core::cmp::PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
            }
        }

        impl ::core::cmp::Ord for $name {
            fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                self.id.cmp(&other.id)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.name)
            }
        }

        impl $crate::AsComponent for $name {
            fn as_component(&self) -> $crate::Component<'_> {
                $crate::Component::Int(::core::primitive::i128::from(self.id))
            }
        }
    };
}
