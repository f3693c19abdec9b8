use super::Relation;
use crate::basic_types::HashMap;
use crate::basic_types::HashSet;
use crate::basic_types::ModelError;
use crate::engine::variables::DomainId;
use crate::engine::Domains;

/// A relation given by its satisfying tuples.
///
/// Next to the set of tuples, an index from `(position, value)` to the tuples which have `value` at
/// `position` is kept, so a support query only looks at the tuples which could support the value.
#[derive(Debug)]
pub struct TableRelation {
    arity: usize,
    tuples: Vec<Box<[i32]>>,
    satisfying: HashSet<Box<[i32]>>,
    supports: HashMap<(usize, i32), Vec<usize>>,
}

impl TableRelation {
    pub fn new(
        arity: usize,
        tuples: impl IntoIterator<Item = Vec<i32>>,
    ) -> Result<Self, ModelError> {
        let mut relation = TableRelation {
            arity,
            tuples: Vec::new(),
            satisfying: HashSet::default(),
            supports: HashMap::default(),
        };

        for tuple in tuples {
            if tuple.len() != arity {
                return Err(ModelError::TupleArity {
                    expected: arity,
                    actual: tuple.len(),
                });
            }

            relation.insert(tuple.into());
        }

        Ok(relation)
    }

    /// Build the table by enumerating the cartesian product of `domains` and keeping the tuples
    /// accepted by `predicate`.
    pub fn from_product(domains: &[Vec<i32>], predicate: impl Fn(&[i32]) -> bool) -> Self {
        let mut relation = TableRelation {
            arity: domains.len(),
            tuples: Vec::new(),
            satisfying: HashSet::default(),
            supports: HashMap::default(),
        };

        if domains.iter().any(|domain| domain.is_empty()) {
            return relation;
        }

        let mut indices = vec![0; domains.len()];
        let mut tuple: Vec<i32> = domains.iter().map(|domain| domain[0]).collect();

        loop {
            if predicate(&tuple) {
                relation.insert(tuple.clone().into());
            }

            // Advance the odometer, the last position moves fastest.
            let mut position = domains.len();
            loop {
                if position == 0 {
                    return relation;
                }
                position -= 1;

                indices[position] += 1;
                if indices[position] < domains[position].len() {
                    tuple[position] = domains[position][indices[position]];
                    break;
                }

                indices[position] = 0;
                tuple[position] = domains[position][0];
            }
        }
    }

    fn insert(&mut self, tuple: Box<[i32]>) {
        if !self.satisfying.insert(tuple.clone()) {
            return;
        }

        let index = self.tuples.len();
        for (position, &value) in tuple.iter().enumerate() {
            self.supports
                .entry((position, value))
                .or_default()
                .push(index);
        }
        self.tuples.push(tuple);
    }

    pub fn num_tuples(&self) -> usize {
        self.tuples.len()
    }
}

impl Relation for TableRelation {
    fn check(&self, tuple: &[i32]) -> bool {
        self.satisfying.contains(tuple)
    }

    fn arity(&self) -> Option<usize> {
        Some(self.arity)
    }

    fn has_support(
        &self,
        scope: &[DomainId],
        position: usize,
        value: i32,
        domains: &Domains,
    ) -> bool {
        let Some(candidates) = self.supports.get(&(position, value)) else {
            return false;
        };

        candidates.iter().any(|&index| {
            self.tuples[index]
                .iter()
                .zip(scope)
                .enumerate()
                .all(|(other, (&entry, &variable))| {
                    other == position || domains.contains(variable, entry)
                })
        })
    }
}
