use super::Relation;
use crate::basic_types::HashSet;
use crate::engine::variables::DomainId;
use crate::engine::Domains;

/// The relation `\sum weights[i] * x_i = rhs`.
///
/// Support for `x_p = v` is decided by computing the set of sums reachable by the other terms from
/// their current domains and checking whether `rhs - weights[p] * v` is among them. This is exact
/// and cheap as long as the number of distinct partial sums stays small, which is the case for the
/// digit domains this relation is typically used with.
#[derive(Clone, Debug)]
pub struct LinearEqualRelation {
    weights: Box<[i32]>,
    rhs: i32,
}

impl LinearEqualRelation {
    pub fn new(weights: Box<[i32]>, rhs: i32) -> Self {
        LinearEqualRelation { weights, rhs }
    }
}

impl Relation for LinearEqualRelation {
    fn check(&self, tuple: &[i32]) -> bool {
        let sum: i64 = self
            .weights
            .iter()
            .zip(tuple)
            .map(|(&weight, &value)| weight as i64 * value as i64)
            .sum();

        sum == self.rhs as i64
    }

    fn arity(&self) -> Option<usize> {
        Some(self.weights.len())
    }

    fn has_support(
        &self,
        scope: &[DomainId],
        position: usize,
        value: i32,
        domains: &Domains,
    ) -> bool {
        let mut reachable: HashSet<i64> = HashSet::default();
        let _ = reachable.insert(0);

        for (index, (&variable, &weight)) in scope.iter().zip(self.weights.iter()).enumerate() {
            if index == position {
                continue;
            }

            let mut next = HashSet::default();
            for partial in &reachable {
                for other in domains.current_domain(variable) {
                    let _ = next.insert(partial + weight as i64 * other as i64);
                }
            }
            reachable = next;
        }

        let required = self.rhs as i64 - self.weights[position] as i64 * value as i64;
        reachable.contains(&required)
    }
}
