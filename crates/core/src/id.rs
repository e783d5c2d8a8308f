//! Identifier types usable as entity identity.

use core::fmt::{Debug, Display};
use core::hash::Hash;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// An identifier type with a typed "not yet assigned" sentinel.
///
/// Entities compare by identifier, but only once one has been assigned: an id
/// equal to [`Identifier::unset`] marks the entity as transient.
pub trait Identifier: Clone + Eq + Hash + Debug + Display + Send + Sync + 'static {
    /// The sentinel value carried by entities that have no identity yet.
    fn unset() -> Self;

    fn is_unset(&self) -> bool {
        *self == Self::unset()
    }
}

macro_rules! impl_zero_identifier {
    ($($t:ty),* $(,)?) => {
        $(
            impl Identifier for $t {
                fn unset() -> Self {
                    0
                }
            }
        )*
    };
}

impl_zero_identifier!(i32, i64, u32, u64);

impl Identifier for String {
    fn unset() -> Self {
        String::new()
    }

    fn is_unset(&self) -> bool {
        self.is_empty()
    }
}

impl Identifier for Uuid {
    fn unset() -> Self {
        Uuid::nil()
    }

    fn is_unset(&self) -> bool {
        self.is_nil()
    }
}

/// Identifier of an aggregate root (64-bit, database-assigned).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AggregateId(i64);

impl AggregateId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for AggregateId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for AggregateId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<AggregateId> for i64 {
    fn from(value: AggregateId) -> Self {
        value.0
    }
}

impl FromStr for AggregateId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = i64::from_str(s.trim())
            .map_err(|e| DomainError::invalid_argument(format!("AggregateId: {e}")))?;
        Ok(Self(value))
    }
}

impl Identifier for AggregateId {
    fn unset() -> Self {
        Self(0)
    }
}
