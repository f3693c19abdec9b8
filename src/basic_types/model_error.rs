use thiserror::Error;

use crate::engine::variables::DomainId;

/// Errors that can occur while building a [`crate::engine::Csp`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("variable '{0}' was created with an empty domain")]
    EmptyDomain(String),
    #[error("constraint '{0}' has an empty scope")]
    EmptyScope(String),
    #[error("{variable} does not belong to this problem (used by constraint '{constraint}')")]
    UnknownVariable {
        constraint: String,
        variable: DomainId,
    },
    #[error("{variable} occurs more than once in the scope of constraint '{constraint}'")]
    RepeatedScopeVariable {
        constraint: String,
        variable: DomainId,
    },
    #[error(
        "constraint '{constraint}' has {actual} variables but its relation has arity {expected}"
    )]
    ArityMismatch {
        constraint: String,
        expected: usize,
        actual: usize,
    },
    #[error("satisfying tuple has length {actual}, expected {expected}")]
    TupleArity { expected: usize, actual: usize },
    #[error("invalid board: {0}")]
    InvalidBoard(String),
}
