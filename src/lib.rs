//! # Arcane
//! Arcane is a constraint-propagation engine for finite-domain Constraint Satisfaction Problems,
//! meant to be plugged into a backtracking search.
//!
//! A problem is a [`engine::Csp`]: variables with finite domains of integers, and constraints over
//! ordered scopes of those variables. Given the current (partial) assignment, a
//! [`engine::Propagator`] removes values from the domains which cannot be part of a solution and
//! reports exactly which values it removed, so the search can put them back when it backtracks.
//!
//! Three propagation strategies are provided in [`propagators`]:
//! * [plain backtracking][propagators::PlainBacktracking], which only checks fully assigned
//!   constraints;
//! * [forward checking][propagators::ForwardChecking], which filters constraints with a single
//!   unassigned variable;
//! * [generalised arc consistency][propagators::GeneralisedArcConsistency], which filters every
//!   constraint until a fixpoint is reached.
//!
//! The [minimum remaining values][branching::MinimumRemainingValues] heuristic selects the next
//! variable to branch on.
//!
//! ```rust
//! # use arcane::constraints;
//! # use arcane::engine::Csp;
//! # use arcane::engine::Propagator;
//! # use arcane::propagators::ForwardChecking;
//! let mut csp = Csp::new("example");
//! let x = csp.new_variable("x", [1, 2]).unwrap();
//! let y = csp.new_variable("y", [1, 2]).unwrap();
//! let _ = csp.add_constraint("x != y", [x, y], constraints::not_equal()).unwrap();
//!
//! csp.assign(x, 1);
//! let propagation = ForwardChecking.propagate(&mut csp, Some(x));
//!
//! assert!(propagation.is_consistent());
//! assert_eq!(csp.current_domain(y).collect::<Vec<_>>(), vec![2]);
//!
//! // Backtracking undoes the pruning.
//! csp.restore(&propagation.pruned);
//! csp.unassign(x);
//! ```

pub mod asserts;
pub mod basic_types;
pub mod branching;
pub mod constraints;
pub mod engine;
pub mod model;
pub mod propagators;
pub mod runner;
pub mod statistics;

#[cfg(test)]
mod tests;

pub use basic_types::DomainWipeout;
pub use basic_types::ModelError;
pub use basic_types::Propagation;
pub use basic_types::Pruning;
