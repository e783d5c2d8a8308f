//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The building blocks themselves are total over well-typed inputs; these
/// variants cover contract violations at their edges (foreign comparisons,
/// double identity assignment, badly declared enumerations) plus the two
/// failures concrete domain types raise on top of them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input to a value object constructor).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An operation received an argument it has no defined behavior for.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An operation was invoked in a state where it is not allowed.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// Two declared members of one enumeration share an id.
    #[error("enumeration `{enumeration}` declares id {id} more than once")]
    DuplicateEnumerationId { enumeration: &'static str, id: i32 },

    /// No declared member of the enumeration matches the requested key.
    #[error("enumeration `{enumeration}` has no member `{key}`")]
    UnknownEnumerationMember { enumeration: &'static str, key: String },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invalid_operation(msg: impl Into<String>) -> Self {
        Self::InvalidOperation(msg.into())
    }

    pub fn unknown_member(enumeration: &'static str, key: impl ToString) -> Self {
        Self::UnknownEnumerationMember {
            enumeration,
            key: key.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_enumeration() {
        let err = DomainError::DuplicateEnumerationId {
            enumeration: "Color",
            id: 3,
        };
        assert_eq!(err.to_string(), "enumeration `Color` declares id 3 more than once");

        let err = DomainError::unknown_member("Color", 42);
        assert_eq!(err.to_string(), "enumeration `Color` has no member `42`");
    }
}
