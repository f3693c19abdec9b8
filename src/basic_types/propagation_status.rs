use thiserror::Error;

use super::Pruning;
use crate::engine::variables::DomainId;

/// The outcome of a propagation call: either the domains are still non-empty, or the domain of
/// some variable was wiped out.
pub type PropagationStatus = Result<(), DomainWipeout>;

/// Raised when propagation empties the domain of `variable`. This is the only way a propagator
/// fails; it is an expected outcome that drives backtracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("the domain of {variable} was wiped out")]
pub struct DomainWipeout {
    pub variable: DomainId,
}

/// The result of invoking a propagator.
///
/// Regardless of the status, `pruned` holds every value removed during the call, in the order in
/// which they were removed, so the caller can always restore the domains exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Propagation {
    pub status: PropagationStatus,
    pub pruned: Vec<Pruning>,
}

impl Propagation {
    pub fn consistent(pruned: Vec<Pruning>) -> Self {
        Propagation {
            status: Ok(()),
            pruned,
        }
    }

    pub fn wipeout(variable: DomainId, pruned: Vec<Pruning>) -> Self {
        Propagation {
            status: Err(DomainWipeout { variable }),
            pruned,
        }
    }

    /// Whether no domain wipeout was detected.
    pub fn is_consistent(&self) -> bool {
        self.status.is_ok()
    }
}
