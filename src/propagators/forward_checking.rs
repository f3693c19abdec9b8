use log::trace;

use crate::arcane_assert_advanced;
use crate::basic_types::Propagation;
use crate::basic_types::Pruning;
use crate::constraints::ConstraintId;
use crate::engine::variables::DomainId;
use crate::engine::Csp;
use crate::engine::Propagator;

/// Forward checking: every constraint with exactly one unassigned variable in its scope removes the
/// values of that variable which violate it given the assigned values of the rest of the scope.
///
/// Before search all constraints are checked (this covers unary constraints and scopes in which
/// all but one variable is fixed by the model); after an assignment only the constraints on the
/// assigned variable are.
#[derive(Clone, Copy, Debug, Default)]
pub struct ForwardChecking;

impl Propagator for ForwardChecking {
    fn name(&self) -> &str {
        "ForwardChecking"
    }

    fn propagate(&self, csp: &mut Csp, assigned: Option<DomainId>) -> Propagation {
        let candidates: Vec<ConstraintId> = match assigned {
            Some(variable) => csp.constraints_containing(variable).to_vec(),
            None => csp.constraints().collect(),
        };

        let mut pruned = vec![];

        for constraint in candidates {
            if csp.unassigned_count(constraint) != 1 {
                continue;
            }

            if let Err(variable) = forward_check(csp, constraint, &mut pruned) {
                return Propagation::wipeout(variable, pruned);
            }
        }

        Propagation::consistent(pruned)
    }
}

/// Prune the values of the only unassigned variable of `constraint` which violate it. Returns the
/// variable as an error if its domain is wiped out.
fn forward_check(
    csp: &mut Csp,
    constraint: ConstraintId,
    pruned: &mut Vec<Pruning>,
) -> Result<(), DomainId> {
    let Some(variable) = csp.unassigned_in_scope(constraint).next() else {
        return Ok(());
    };
    let position = csp
        .constraint(constraint)
        .position_of(variable)
        .expect("an unassigned scope variable is in the scope");

    let mut tuple = csp.scope_tuple(constraint);
    let values: Vec<i32> = csp.current_domain(variable).collect();

    for value in values {
        tuple[position] = value;

        if !csp.check(constraint, &tuple) {
            csp.prune(variable, value);
            pruned.push(Pruning::new(variable, value));
        }
    }

    arcane_assert_advanced!(
        csp.current_domain(variable).all(|value| {
            tuple[position] = value;
            csp.check(constraint, &tuple)
        }),
        "forward checking left a violating value of {variable}"
    );

    if csp.domain_size(variable) == 0 {
        trace!(
            "forward checking '{}' wiped out {variable}",
            csp.constraint(constraint).name()
        );
        return Err(variable);
    }

    Ok(())
}
