use std::fmt::Debug;

use crate::engine::variables::DomainId;
use crate::engine::Domains;

/// Decides which tuples over a scope satisfy a constraint.
///
/// Only [`Relation::check`] is required. The default [`Relation::has_support`] enumerates the
/// current domains of the other variables in the scope until a satisfying tuple is found, which is
/// exponential in the arity; relations with more structure should override it.
pub trait Relation: Debug {
    /// Whether `tuple`, interpreted in scope order, satisfies the relation.
    fn check(&self, tuple: &[i32]) -> bool;

    /// The number of variables this relation is defined over, or [`None`] if it can be posted over
    /// scopes of any length.
    fn arity(&self) -> Option<usize> {
        None
    }

    /// Whether there is a satisfying tuple with `value` at `position` in which every other entry
    /// is in the current domain of the corresponding variable of `scope`.
    fn has_support(
        &self,
        scope: &[DomainId],
        position: usize,
        value: i32,
        domains: &Domains,
    ) -> bool {
        let mut tuple = vec![value; scope.len()];
        extend_to_support(self, scope, position, domains, &mut tuple, 0)
    }
}

fn extend_to_support<R: Relation + ?Sized>(
    relation: &R,
    scope: &[DomainId],
    position: usize,
    domains: &Domains,
    tuple: &mut [i32],
    index: usize,
) -> bool {
    if index == scope.len() {
        return relation.check(tuple);
    }

    if index == position {
        return extend_to_support(relation, scope, position, domains, tuple, index + 1);
    }

    for value in domains.current_domain(scope[index]) {
        tuple[index] = value;

        if extend_to_support(relation, scope, position, domains, tuple, index + 1) {
            return true;
        }
    }

    false
}
