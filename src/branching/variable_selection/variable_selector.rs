use crate::engine::variables::DomainId;
use crate::engine::Csp;

/// A trait containing the interface for [`VariableSelector`]s,
/// specifying the appropriate hooks into the search process.
pub trait VariableSelector {
    /// Determines which variable to select next if there are any left to branch on.
    /// Should only return [`None`] when all variables of the [`Csp`] have been assigned.
    /// Otherwise it should return an unassigned variable to branch on next.
    ///
    /// Selecting a variable never changes the problem.
    fn select_variable(&mut self, csp: &Csp) -> Option<DomainId>;
}
