use std::fmt::Debug;
use std::fmt::Formatter;

use super::Relation;

type Check = Box<dyn Fn(&[i32]) -> bool>;

/// A relation given by an opaque check function. Support queries fall back to enumerating the
/// current domains of the scope, so this should only be used for small scopes.
pub struct PredicateRelation {
    name: &'static str,
    arity: Option<usize>,
    check: Check,
}

impl Debug for PredicateRelation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredicateRelation")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish()
    }
}

impl PredicateRelation {
    pub fn new(check: impl Fn(&[i32]) -> bool + 'static) -> Self {
        PredicateRelation {
            name: "predicate",
            arity: None,
            check: Box::new(check),
        }
    }

    pub fn with_arity(mut self, arity: usize) -> Self {
        self.arity = Some(arity);
        self
    }

    pub fn not_equal() -> Self {
        PredicateRelation {
            name: "not_equal",
            arity: Some(2),
            check: Box::new(|tuple| tuple[0] != tuple[1]),
        }
    }
}

impl Relation for PredicateRelation {
    fn check(&self, tuple: &[i32]) -> bool {
        (self.check)(tuple)
    }

    fn arity(&self) -> Option<usize> {
        self.arity
    }
}
