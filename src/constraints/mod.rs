//! Constraints over the variables of a [`crate::engine::Csp`].
//!
//! A [`Constraint`] couples an ordered scope with a [`Relation`]; the relation decides which tuples
//! over the scope are satisfying and answers support queries against the current domains. The
//! functions in this module create the relations which are provided by the crate:
//!
//! ```rust
//! # use arcane::constraints;
//! # use arcane::engine::Csp;
//! let mut csp = Csp::new("example");
//! let x = csp.new_variable("x", 1..=3).unwrap();
//! let y = csp.new_variable("y", 1..=3).unwrap();
//!
//! let _ = csp.add_constraint("x != y", [x, y], constraints::not_equal()).unwrap();
//! ```

mod all_different;
mod arithmetic;
mod predicate;
mod relation;
mod table;

use std::fmt::Display;
use std::fmt::Formatter;

pub use all_different::AllDifferentRelation;
pub use arithmetic::LinearEqualRelation;
pub use predicate::PredicateRelation;
pub use relation::Relation;
pub use table::TableRelation;

use crate::basic_types::ModelError;
use crate::engine::variables::DomainId;

/// A handle to a constraint of a [`crate::engine::Csp`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConstraintId {
    id: u32,
}

impl ConstraintId {
    pub(crate) fn new(id: u32) -> Self {
        ConstraintId { id }
    }

    pub fn index(&self) -> usize {
        self.id as usize
    }
}

impl Display for ConstraintId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "c{}", self.id)
    }
}

#[derive(Debug)]
pub struct Constraint {
    name: String,
    /// The order of the scope determines how tuples are interpreted by the relation.
    scope: Box<[DomainId]>,
    relation: Box<dyn Relation>,
}

impl Constraint {
    pub(crate) fn new(name: String, scope: Box<[DomainId]>, relation: Box<dyn Relation>) -> Self {
        Constraint {
            name,
            scope,
            relation,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> &[DomainId] {
        &self.scope
    }

    pub fn relation(&self) -> &dyn Relation {
        self.relation.as_ref()
    }

    /// The position of `variable` in the scope.
    pub fn position_of(&self, variable: DomainId) -> Option<usize> {
        self.scope.iter().position(|&other| other == variable)
    }
}

/// The relation `x != y` over a binary scope.
pub fn not_equal() -> PredicateRelation {
    PredicateRelation::not_equal()
}

/// The relation given by an explicit list of satisfying tuples.
pub fn table(
    arity: usize,
    tuples: impl IntoIterator<Item = Vec<i32>>,
) -> Result<TableRelation, ModelError> {
    TableRelation::new(arity, tuples)
}

/// The relation in which every pair of variables takes a different value.
pub fn all_different() -> AllDifferentRelation {
    AllDifferentRelation
}

/// The relation `\sum weights[i] * x_i = rhs`.
pub fn linear_equal(weights: impl Into<Box<[i32]>>, rhs: i32) -> LinearEqualRelation {
    LinearEqualRelation::new(weights.into(), rhs)
}

/// The relation `\sum x_i = rhs` over `arity` variables.
pub fn sum_equals(arity: usize, rhs: i32) -> LinearEqualRelation {
    LinearEqualRelation::new(vec![1; arity].into(), rhs)
}

/// A relation defined by an arbitrary check on complete tuples.
pub fn predicate(check: impl Fn(&[i32]) -> bool + 'static) -> PredicateRelation {
    PredicateRelation::new(check)
}
