//! The problem representation ([`Csp`] and its [`Domains`]), the [`Propagator`] interface and the
//! backtracking search which drives propagation.

mod csp;
mod domains;
mod propagation;
pub mod search;
pub mod termination;
pub mod variables;

#[cfg(test)]
pub(crate) mod test_helper;

pub use csp::Csp;
pub use domains::Domains;
pub use propagation::Propagator;
