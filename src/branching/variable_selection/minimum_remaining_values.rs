use crate::branching::VariableSelector;
use crate::engine::variables::DomainId;
use crate::engine::Csp;

/// A [`VariableSelector`] which selects the unassigned variable with the smallest current domain.
/// Ties are broken in favour of the variable which was created first.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinimumRemainingValues;

impl VariableSelector for MinimumRemainingValues {
    fn select_variable(&mut self, csp: &Csp) -> Option<DomainId> {
        csp.unassigned_variables()
            .min_by_key(|&variable| csp.domain_size(variable))
    }
}
