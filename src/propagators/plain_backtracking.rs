use crate::basic_types::Propagation;
use crate::engine::variables::DomainId;
use crate::engine::Csp;
use crate::engine::Propagator;

/// No propagation: only the constraints on the newly assigned variable whose scope is fully
/// assigned are checked. Domains are never pruned.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainBacktracking;

impl Propagator for PlainBacktracking {
    fn name(&self) -> &str {
        "PlainBacktracking"
    }

    fn propagate(&self, csp: &mut Csp, assigned: Option<DomainId>) -> Propagation {
        let Some(assigned) = assigned else {
            return Propagation::consistent(vec![]);
        };

        for &constraint in csp.constraints_containing(assigned) {
            if csp.unassigned_count(constraint) > 0 {
                continue;
            }

            let tuple = csp.scope_tuple(constraint);
            if !csp.check(constraint, &tuple) {
                return Propagation::wipeout(assigned, vec![]);
            }
        }

        Propagation::consistent(vec![])
    }
}
