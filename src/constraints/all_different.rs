use super::Relation;
use crate::basic_types::HashMap;
use crate::basic_types::HashSet;
use crate::engine::variables::DomainId;
use crate::engine::Domains;

/// Every variable in the scope takes a different value.
///
/// A value `v` of a variable is supported iff the other variables can be matched to pairwise
/// distinct values from their current domains, none of them `v`. The matching is found with
/// augmenting paths (Kuhn's algorithm), which keeps support queries polynomial for long scopes.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllDifferentRelation;

impl Relation for AllDifferentRelation {
    fn check(&self, tuple: &[i32]) -> bool {
        let mut seen: HashSet<i32> = HashSet::default();
        tuple.iter().all(|value| seen.insert(*value))
    }

    fn has_support(
        &self,
        scope: &[DomainId],
        position: usize,
        value: i32,
        domains: &Domains,
    ) -> bool {
        let candidates: Vec<Vec<i32>> = scope
            .iter()
            .enumerate()
            .filter(|&(other, _)| other != position)
            .map(|(_, &variable)| {
                domains
                    .current_domain(variable)
                    .filter(|&candidate| candidate != value)
                    .collect()
            })
            .collect();

        let mut matched_to: HashMap<i32, usize> = HashMap::default();
        (0..candidates.len()).all(|variable| {
            let mut visited = HashSet::default();
            augment(variable, &candidates, &mut matched_to, &mut visited)
        })
    }
}

/// Try to match `variable` to a value, re-matching previously matched variables if needed.
fn augment(
    variable: usize,
    candidates: &[Vec<i32>],
    matched_to: &mut HashMap<i32, usize>,
    visited: &mut HashSet<i32>,
) -> bool {
    for &value in &candidates[variable] {
        if !visited.insert(value) {
            continue;
        }

        let is_free = match matched_to.get(&value).copied() {
            None => true,
            Some(owner) => augment(owner, candidates, matched_to, visited),
        };

        if is_free {
            let _ = matched_to.insert(value, variable);
            return true;
        }
    }

    false
}
