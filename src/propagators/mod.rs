//! Contains the propagation strategies which can be plugged into the search.
//!
//! See the [`crate::engine::Propagator`] trait for the contract every strategy follows. The
//! [`PropagationStrategy`] enum selects one of them at runtime.

mod forward_checking;
mod generalised_arc_consistency;
mod plain_backtracking;

use clap::ValueEnum;
pub use forward_checking::ForwardChecking;
pub use generalised_arc_consistency::GeneralisedArcConsistency;
pub use plain_backtracking::PlainBacktracking;

use crate::basic_types::Propagation;
use crate::engine::variables::DomainId;
use crate::engine::Csp;
use crate::engine::Propagator;

/// The propagation strategies provided by the crate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum PropagationStrategy {
    /// Only check constraints whose scope is fully assigned.
    Backtracking,
    /// Filter constraints with exactly one unassigned variable.
    ForwardChecking,
    /// Enforce generalised arc consistency.
    #[default]
    Gac,
}

impl Propagator for PropagationStrategy {
    fn name(&self) -> &str {
        match self {
            PropagationStrategy::Backtracking => PlainBacktracking.name(),
            PropagationStrategy::ForwardChecking => ForwardChecking.name(),
            PropagationStrategy::Gac => GeneralisedArcConsistency.name(),
        }
    }

    fn propagate(&self, csp: &mut Csp, assigned: Option<DomainId>) -> Propagation {
        match self {
            PropagationStrategy::Backtracking => PlainBacktracking.propagate(csp, assigned),
            PropagationStrategy::ForwardChecking => ForwardChecking.propagate(csp, assigned),
            PropagationStrategy::Gac => GeneralisedArcConsistency.propagate(csp, assigned),
        }
    }
}
