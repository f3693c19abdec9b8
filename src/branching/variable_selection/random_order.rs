use rand::rngs::SmallRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;

use crate::branching::VariableSelector;
use crate::engine::variables::DomainId;
use crate::engine::Csp;

/// A [`VariableSelector`] which selects an unassigned variable uniformly at random.
#[derive(Debug)]
pub struct RandomOrder {
    rng: SmallRng,
}

impl RandomOrder {
    pub fn with_seed(seed: u64) -> Self {
        RandomOrder {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl VariableSelector for RandomOrder {
    fn select_variable(&mut self, csp: &Csp) -> Option<DomainId> {
        csp.unassigned_variables().choose(&mut self.rng)
    }
}
