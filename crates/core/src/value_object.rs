//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity**. They are defined
//! entirely by an ordered sequence of *equality components*, and two value
//! objects are equal when they are of the same concrete type and their
//! component sequences are equal.
//!
//! ## Value Object vs Entity
//!
//! - **Value Object**: no identity (two value objects with the same components are equal)
//! - **Entity**: has identity (two entities with the same assigned id are the same entity)
//!
//! ## Ordering
//!
//! Every value object can be ordered against every other one, which makes a
//! mixed `Vec<Box<dyn ValueObject>>` sortable:
//!
//! 1. different concrete types order by their type names;
//! 2. the same type orders component by component, stopping at the first
//!    difference (a shorter sequence that is a prefix of a longer one sorts first).
//!
//! ## Usage Pattern
//!
//! ```ignore
//! #[derive(Debug, Clone)]
//! struct Money {
//!     amount: i64,
//!     currency: String,
//! }
//!
//! impl ValueObject for Money {
//!     fn equality_components(&self) -> Vec<Component<'_>> {
//!         vec![self.amount.as_component(), self.currency.as_component()]
//!     }
//! }
//!
//! value_object!(Money);
//!
//! let m1 = Money { amount: 100, currency: "USD".to_string() };
//! let m2 = Money { amount: 100, currency: "USD".to_string() };
//! assert_eq!(m1, m2);
//! ```

use core::any::{TypeId, type_name};
use core::cmp::Ordering;
use core::fmt::Debug;
use core::hash::{Hash, Hasher};
use std::collections::hash_map::DefaultHasher;

use uuid::Uuid;

use crate::id::AggregateId;

/// Starting value of the component hash fold (also the hash of an empty sequence).
pub const HASH_SEED: u64 = 17;

/// Multiplier applied to the running hash before each component is added.
pub const HASH_FACTOR: u64 = 31;

/// One equality component of a value object.
///
/// Components of the same kind use their natural ordering. Components of
/// different kinds order by kind, in declaration order of the variants, with
/// `Absent` below everything. Floats use IEEE total ordering, so `NaN` equals
/// itself and `-0.0` sorts below `0.0`.
#[derive(Debug, Clone, Copy)]
pub enum Component<'a> {
    /// A missing optional value.
    Absent,
    Bool(bool),
    Int(i128),
    Float(f64),
    Char(char),
    Text(&'a str),
    Bytes(&'a [u8]),
    /// Another value object, compared with its own value semantics.
    Nested(&'a dyn ValueObject),
}

impl Component<'_> {
    fn rank(&self) -> u8 {
        match self {
            Component::Absent => 0,
            Component::Bool(_) => 1,
            Component::Int(_) => 2,
            Component::Float(_) => 3,
            Component::Char(_) => 4,
            Component::Text(_) => 5,
            Component::Bytes(_) => 6,
            Component::Nested(_) => 7,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Component::Absent)
    }

    /// Deterministic hash of this single component.
    pub fn component_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl PartialEq for Component<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Component<'_> {}

impl PartialOrd for Component<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Component<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        use Component::*;

        match (self, other) {
            (Absent, Absent) => Ordering::Equal,
            (Absent, _) => Ordering::Less,
            (_, Absent) => Ordering::Greater,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Int(a), Int(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Char(a), Char(b)) => a.cmp(b),
            (Text(a), Text(b)) => a.cmp(b),
            (Bytes(a), Bytes(b)) => a.cmp(b),
            (Nested(a), Nested(b)) => a.value_cmp(*b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl Hash for Component<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            Component::Absent => {}
            Component::Bool(v) => v.hash(state),
            Component::Int(v) => v.hash(state),
            Component::Float(v) => v.to_bits().hash(state),
            Component::Char(v) => v.hash(state),
            Component::Text(v) => v.hash(state),
            Component::Bytes(v) => v.hash(state),
            Component::Nested(v) => v.value_hash().hash(state),
        }
    }
}

/// Conversion of a field into an equality component.
pub trait AsComponent {
    fn as_component(&self) -> Component<'_>;
}

macro_rules! impl_int_component {
    ($($t:ty),* $(,)?) => {
        $(
            impl AsComponent for $t {
                fn as_component(&self) -> Component<'_> {
                    Component::Int(i128::from(*self))
                }
            }
        )*
    };
}

impl_int_component!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl AsComponent for isize {
    fn as_component(&self) -> Component<'_> {
        Component::Int(*self as i128)
    }
}

impl AsComponent for usize {
    fn as_component(&self) -> Component<'_> {
        Component::Int(*self as i128)
    }
}

impl AsComponent for bool {
    fn as_component(&self) -> Component<'_> {
        Component::Bool(*self)
    }
}

impl AsComponent for f32 {
    fn as_component(&self) -> Component<'_> {
        Component::Float(f64::from(*self))
    }
}

impl AsComponent for f64 {
    fn as_component(&self) -> Component<'_> {
        Component::Float(*self)
    }
}

impl AsComponent for char {
    fn as_component(&self) -> Component<'_> {
        Component::Char(*self)
    }
}

impl AsComponent for str {
    fn as_component(&self) -> Component<'_> {
        Component::Text(self)
    }
}

impl AsComponent for String {
    fn as_component(&self) -> Component<'_> {
        Component::Text(self.as_str())
    }
}

impl AsComponent for [u8] {
    fn as_component(&self) -> Component<'_> {
        Component::Bytes(self)
    }
}

impl AsComponent for Vec<u8> {
    fn as_component(&self) -> Component<'_> {
        Component::Bytes(self.as_slice())
    }
}

impl AsComponent for Uuid {
    fn as_component(&self) -> Component<'_> {
        Component::Bytes(self.as_bytes())
    }
}

impl AsComponent for AggregateId {
    fn as_component(&self) -> Component<'_> {
        Component::Int(i128::from(self.get()))
    }
}

impl<T: AsComponent> AsComponent for Option<T> {
    fn as_component(&self) -> Component<'_> {
        match self {
            Some(value) => value.as_component(),
            None => Component::Absent,
        }
    }
}

impl<T: AsComponent + ?Sized> AsComponent for &T {
    fn as_component(&self) -> Component<'_> {
        (**self).as_component()
    }
}

/// A value object: immutable, compared by its equality components.
///
/// Implementors only provide [`ValueObject::equality_components`]; it must be a
/// pure function of the object's state. The provided methods carry the
/// equality, ordering and hashing rules and are not meant to be overridden.
pub trait ValueObject: Debug + 'static {
    /// The ordered components that define this value.
    fn equality_components(&self) -> Vec<Component<'_>>;

    fn concrete_type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn concrete_type_name(&self) -> &'static str {
        type_name::<Self>()
    }

    /// Same concrete type and pairwise-equal components of the same length.
    fn value_eq(&self, other: &dyn ValueObject) -> bool {
        self.concrete_type_id() == other.concrete_type_id()
            && self.equality_components() == other.equality_components()
    }

    /// Total order across all value objects.
    fn value_cmp(&self, other: &dyn ValueObject) -> Ordering {
        let (this_type, other_type) = (self.concrete_type_id(), other.concrete_type_id());
        if this_type != other_type {
            return self
                .concrete_type_name()
                .cmp(other.concrete_type_name())
                .then_with(|| this_type.cmp(&other_type));
        }

        self.equality_components()
            .as_slice()
            .cmp(other.equality_components().as_slice())
    }

    /// Order-sensitive fold over the component hashes.
    fn value_hash(&self) -> u64 {
        fold_component_hashes(&self.equality_components())
    }
}

/// `hash = hash * 31 + component_hash`, seeded with [`HASH_SEED`].
pub fn fold_component_hashes(components: &[Component<'_>]) -> u64 {
    components.iter().fold(HASH_SEED, |hash, component| {
        hash.wrapping_mul(HASH_FACTOR)
            .wrapping_add(component.component_hash())
    })
}

impl PartialEq for dyn ValueObject {
    fn eq(&self, other: &Self) -> bool {
        self.value_eq(other)
    }
}

impl Eq for dyn ValueObject {}

impl PartialOrd for dyn ValueObject {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for dyn ValueObject {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value_cmp(other)
    }
}

impl Hash for dyn ValueObject {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.value_hash());
    }
}

/// Implements `PartialEq`, `Eq`, `PartialOrd`, `Ord` and `Hash` for a
/// [`ValueObject`] from its equality components.
#[macro_export]
macro_rules! value_object {
    ($t:ty) => {
        impl ::core::cmp::PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                $crate::ValueObject::value_eq(self, other)
            }
        }

        impl ::core::cmp::Eq for $t {}

        impl ::core::cmp::PartialOrd for $t {
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
            }
        }

        impl ::core::cmp::Ord for $t {
            fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                $crate::ValueObject::value_cmp(self, other)
            }
        }

        impl ::core::hash::Hash for $t {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                state.write_u64($crate::ValueObject::value_hash(self));
            }
        }
    };
}

/// Declares a value object wrapping exactly one value.
///
/// The generated newtype has `new`, `value`, `into_value`, a `Display` equal to
/// the wrapped value's, `AsRef` and `From` conversions back to the wrapped type,
/// and the full set of comparison traits. The wrapped type must implement
/// [`AsComponent`], `Debug`, `Clone` and `Display`.
///
/// Types that validate their input should keep `new` private by implementing
/// [`ValueObject`] by hand instead.
///
/// ```ignore
/// single_value_object! {
///     /// Customer e-mail address.
///     pub struct Email(String);
/// }
/// ```
#[macro_export]
macro_rules! single_value_object {
    ($(#[$meta:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name($inner);

        impl $name {
            pub fn new(value: $inner) -> Self {
                Self(value)
            }

            pub fn value(&self) -> &$inner {
                &self.0
            }

            pub fn into_value(self) -> $inner {
                self.0
            }
        }

        impl $crate::ValueObject for $name {
            fn equality_components(&self) -> ::std::vec::Vec<$crate::Component<'_>> {
                ::std::vec![$crate::AsComponent::as_component(&self.0)]
            }
        }

        $crate::value_object!($name);

        impl $crate::AsComponent for $name {
            fn as_component(&self) -> $crate::Component<'_> {
                $crate::Component::Nested(self)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::core::convert::AsRef<$inner> for $name {
            fn as_ref(&self) -> &$inner {
                &self.0
            }
        }

        impl ::core::convert::From<$name> for $inner {
            fn from(value: $name) -> $inner {
                value.0
            }
        }
    };
}
