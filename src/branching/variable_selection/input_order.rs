use crate::branching::VariableSelector;
use crate::engine::variables::DomainId;
use crate::engine::Csp;

/// A [`VariableSelector`] which selects the first unassigned variable in the order in which the
/// variables were created.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputOrder;

impl VariableSelector for InputOrder {
    fn select_variable(&mut self, csp: &Csp) -> Option<DomainId> {
        csp.unassigned_variables().next()
    }
}
