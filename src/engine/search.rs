//! A chronological backtracking search which uses a [`Propagator`] to filter domains after every
//! assignment and a [`VariableSelector`] to decide which variable to branch on.
//!
//! Values are tried in the order of the current domain. The search undoes every pruning reported
//! by the propagator when it leaves a branch, so once [`BacktrackingSearch::satisfy`] returns the
//! problem is back in the state it was in before the call.

use std::time::Instant;

use log::debug;
use log::info;

use super::termination::TerminationCondition;
use super::variables::DomainId;
use super::Csp;
use super::Propagator;
use crate::arcane_assert_moderate;
use crate::basic_types::HashMap;
use crate::branching::VariableSelector;
use crate::constraints::ConstraintId;
use crate::statistics::log_statistic;
use crate::statistics::log_statistic_postfix;

/// An assignment of a value to every variable of a problem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    values: HashMap<DomainId, i32>,
}

impl Solution {
    fn from_assignment(csp: &Csp) -> Self {
        let values = csp
            .variables()
            .map(|variable| {
                let value = csp.assigned_value(variable);
                arcane_assert_moderate!(value.is_some(), "{variable} is not assigned");
                (variable, value.unwrap_or_default())
            })
            .collect();

        Solution { values }
    }

    pub fn get_value(&self, variable: DomainId) -> i32 {
        self.values[&variable]
    }

    pub fn num_variables(&self) -> usize {
        self.values.len()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SatisfactionResult {
    Satisfiable(Solution),
    Unsatisfiable,
    /// The termination condition triggered before the search completed.
    Unknown,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    pub decisions: u64,
    pub failed_propagations: u64,
    pub backtracks: u64,
    pub propagation_calls: u64,
    pub pruned_values: u64,
}

#[derive(Debug)]
enum Outcome {
    Solution(Solution),
    Exhausted,
    Stopped,
}

#[derive(Debug, Default)]
pub struct BacktrackingSearch {
    statistics: SearchStatistics,
    time_spent_ms: u128,
}

impl BacktrackingSearch {
    pub fn statistics(&self) -> SearchStatistics {
        self.statistics
    }

    /// Search for a solution of `csp`. Variables which are assigned when the search starts keep
    /// their values.
    pub fn satisfy<P: Propagator + ?Sized>(
        &mut self,
        csp: &mut Csp,
        propagator: &P,
        selector: &mut dyn VariableSelector,
        termination: &mut impl TerminationCondition,
    ) -> SatisfactionResult {
        let start = Instant::now();
        info!(
            "Solving '{}' ({} variables, {} constraints) with {}",
            csp.name(),
            csp.num_variables(),
            csp.num_constraints(),
            propagator.name()
        );

        let root = propagator.propagate(csp, None);
        self.record_propagation(root.pruned.len(), root.is_consistent());

        let outcome = if let Err(wipeout) = root.status {
            debug!("Root propagation failed: {wipeout}");
            Outcome::Exhausted
        } else if let Some(constraint) = violated_fixed_constraint(csp) {
            debug!(
                "'{}' is violated by the variables fixed before search",
                csp.constraint(constraint).name()
            );
            Outcome::Exhausted
        } else {
            self.search(csp, propagator, selector, termination)
        };
        csp.restore(&root.pruned);

        self.time_spent_ms += start.elapsed().as_millis();

        match outcome {
            Outcome::Solution(solution) => SatisfactionResult::Satisfiable(solution),
            Outcome::Exhausted => SatisfactionResult::Unsatisfiable,
            Outcome::Stopped => SatisfactionResult::Unknown,
        }
    }

    fn search<P: Propagator + ?Sized>(
        &mut self,
        csp: &mut Csp,
        propagator: &P,
        selector: &mut dyn VariableSelector,
        termination: &mut impl TerminationCondition,
    ) -> Outcome {
        let Some(variable) = selector.select_variable(csp) else {
            return Outcome::Solution(Solution::from_assignment(csp));
        };
        arcane_assert_moderate!(
            !csp.is_assigned(variable),
            "the variable selector returned the assigned variable {variable}"
        );

        let values: Vec<i32> = csp.current_domain(variable).collect();
        for value in values {
            if termination.should_stop() {
                return Outcome::Stopped;
            }

            self.statistics.decisions += 1;
            csp.assign(variable, value);

            let propagation = propagator.propagate(csp, Some(variable));
            self.record_propagation(propagation.pruned.len(), propagation.is_consistent());

            let outcome = if propagation.is_consistent() {
                self.search(csp, propagator, selector, termination)
            } else {
                Outcome::Exhausted
            };

            csp.restore(&propagation.pruned);
            csp.unassign(variable);

            if !matches!(outcome, Outcome::Exhausted) {
                return outcome;
            }
        }

        self.statistics.backtracks += 1;
        Outcome::Exhausted
    }

    fn record_propagation(&mut self, num_pruned: usize, is_consistent: bool) {
        self.statistics.propagation_calls += 1;
        self.statistics.pruned_values += num_pruned as u64;
        if !is_consistent {
            self.statistics.failed_propagations += 1;
        }
    }

    pub fn log_statistics(&self) {
        log_statistic("decisions", self.statistics.decisions);
        log_statistic("failedPropagations", self.statistics.failed_propagations);
        log_statistic("backtracks", self.statistics.backtracks);
        log_statistic("propagationCalls", self.statistics.propagation_calls);
        log_statistic("prunedValues", self.statistics.pruned_values);
        log_statistic("timeSpentInSearchMs", self.time_spent_ms);
        log_statistic_postfix();
    }
}

/// A constraint whose whole scope is assigned and which is not satisfied. The propagators only
/// look at such constraints when one of their variables is assigned during search, so constraints
/// over variables fixed before search are checked here.
fn violated_fixed_constraint(csp: &Csp) -> Option<ConstraintId> {
    csp.constraints()
        .filter(|&constraint| csp.unassigned_count(constraint) == 0)
        .find(|&constraint| !csp.check(constraint, &csp.scope_tuple(constraint)))
}
