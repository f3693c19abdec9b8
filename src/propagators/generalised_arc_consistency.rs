use std::collections::VecDeque;

use log::trace;

use crate::arcane_assert_extreme;
use crate::basic_types::Propagation;
use crate::basic_types::Pruning;
use crate::constraints::ConstraintId;
use crate::engine::variables::DomainId;
use crate::engine::Csp;
use crate::engine::Propagator;

/// Generalised arc consistency (GAC-3): after a successful call every value in the current domain
/// of every variable has a support in every constraint it appears in.
///
/// Constraints are processed from a FIFO queue. Whenever a value is pruned from a variable, every
/// constraint on that variable which is not queued is appended, since the pruned value may have
/// been the support of some other value. Domains only shrink, so this reaches a fixpoint or a
/// wipeout.
#[derive(Clone, Copy, Debug, Default)]
pub struct GeneralisedArcConsistency;

impl Propagator for GeneralisedArcConsistency {
    fn name(&self) -> &str {
        "GeneralisedArcConsistency"
    }

    fn propagate(&self, csp: &mut Csp, assigned: Option<DomainId>) -> Propagation {
        let mut queue = ConstraintQueue::new(csp.num_constraints());
        match assigned {
            Some(variable) => csp
                .constraints_containing(variable)
                .iter()
                .for_each(|&constraint| queue.push(constraint)),
            None => csp.constraints().for_each(|constraint| queue.push(constraint)),
        }

        let mut pruned = vec![];
        let mut revised = vec![false; csp.num_constraints()];

        while let Some(constraint) = queue.pop() {
            revised[constraint.index()] = true;
            if let Err(variable) = revise(csp, constraint, &mut queue, &mut pruned) {
                trace!(
                    "GAC on '{}' wiped out {variable}",
                    csp.constraint(constraint).name()
                );
                return Propagation::wipeout(variable, pruned);
            }
        }

        // Every revised constraint is queued again when one of its variables loses a value, so
        // each of them ends with a revision that removed nothing.
        arcane_assert_extreme!(
            csp.constraints()
                .filter(|constraint| revised[constraint.index()])
                .all(|constraint| is_arc_consistent(csp, constraint)),
            "a revised constraint is not arc consistent at the fixpoint"
        );

        Propagation::consistent(pruned)
    }
}

fn is_arc_consistent(csp: &Csp, constraint: ConstraintId) -> bool {
    csp.scope(constraint).iter().all(|&variable| {
        csp.current_domain(variable)
            .all(|value| csp.has_support(constraint, variable, value))
    })
}

/// Remove the unsupported values of every variable in the scope of `constraint`.
fn revise(
    csp: &mut Csp,
    constraint: ConstraintId,
    queue: &mut ConstraintQueue,
    pruned: &mut Vec<Pruning>,
) -> Result<(), DomainId> {
    let scope = csp.scope(constraint).to_vec();

    for variable in scope {
        let values: Vec<i32> = csp.current_domain(variable).collect();

        for value in values {
            if csp.has_support(constraint, variable, value) {
                continue;
            }

            // The assigned value is never removed; the assignment itself is inconsistent.
            if csp.is_assigned(variable) {
                return Err(variable);
            }

            csp.prune(variable, value);
            pruned.push(Pruning::new(variable, value));

            if csp.domain_size(variable) == 0 {
                return Err(variable);
            }

            csp.constraints_containing(variable)
                .iter()
                .for_each(|&other| queue.push(other));
        }
    }

    Ok(())
}

/// A FIFO queue of constraints which contains every constraint at most once.
#[derive(Debug)]
struct ConstraintQueue {
    queue: VecDeque<ConstraintId>,
    is_queued: Vec<bool>,
}

impl ConstraintQueue {
    fn new(num_constraints: usize) -> Self {
        ConstraintQueue {
            queue: VecDeque::new(),
            is_queued: vec![false; num_constraints],
        }
    }

    fn push(&mut self, constraint: ConstraintId) {
        if !self.is_queued[constraint.index()] {
            self.is_queued[constraint.index()] = true;
            self.queue.push_back(constraint);
        }
    }

    fn pop(&mut self) -> Option<ConstraintId> {
        let constraint = self.queue.pop_front()?;
        self.is_queued[constraint.index()] = false;
        Some(constraint)
    }
}
