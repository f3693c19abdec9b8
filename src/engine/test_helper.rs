//! This module exposes helpers that aid testing of propagators. The [`TestCsp`] allows setting up
//! specific scenarios under which to test the propagation strategies.

use crate::basic_types::HashSet;
use crate::basic_types::Propagation;
use crate::basic_types::Pruning;
use crate::constraints::ConstraintId;
use crate::constraints::Relation;
use crate::engine::variables::DomainId;
use crate::engine::Csp;
use crate::engine::Propagator;

/// A wrapper around a [`Csp`] with shorthands for building test problems and asserting on the
/// outcome of propagation.
#[derive(Debug)]
pub(crate) struct TestCsp {
    pub(crate) csp: Csp,
}

impl Default for TestCsp {
    fn default() -> Self {
        TestCsp {
            csp: Csp::new("test"),
        }
    }
}

#[allow(unused, reason = "not every helper is used by every test")]
impl TestCsp {
    pub(crate) fn new_variable(&mut self, values: &[i32]) -> DomainId {
        let name = format!("v{}", self.csp.num_variables());
        self.csp
            .new_variable(name, values.iter().copied())
            .expect("test variables have non-empty domains")
    }

    pub(crate) fn add(
        &mut self,
        scope: impl Into<Box<[DomainId]>>,
        relation: impl Relation + 'static,
    ) -> ConstraintId {
        let name = format!("c{}", self.csp.num_constraints());
        self.csp
            .add_constraint(name, scope, relation)
            .expect("test constraints are well-formed")
    }

    pub(crate) fn assign(&mut self, variable: DomainId, value: i32) {
        self.csp.assign(variable, value);
    }

    /// Run `propagator` and check the invariants which every propagation call has to uphold: the
    /// reported prunings are distinct, were in the domain before the call and are exactly the
    /// values which disappeared from the domains.
    pub(crate) fn propagate(
        &mut self,
        propagator: &impl Propagator,
        assigned: Option<DomainId>,
    ) -> Propagation {
        let before = self.snapshot();
        let result = propagator.propagate(&mut self.csp, assigned);
        let after = self.snapshot();

        let mut seen: HashSet<_> = HashSet::default();
        for pruning in &result.pruned {
            assert!(seen.insert(*pruning), "{pruning} was reported twice");
            assert!(
                before[pruning.variable.index()].contains(&pruning.value),
                "{pruning} was not in the domain before propagation"
            );
        }

        for (variable, (old, new)) in self.csp.variables().zip(before.iter().zip(after.iter())) {
            assert!(
                new.iter().all(|value| old.contains(value)),
                "the domain of {variable} grew during propagation"
            );

            let removed = old.iter().filter(|value| !new.contains(value));
            for &value in removed {
                assert!(
                    seen.contains(&Pruning::new(variable, value)),
                    "{value} was removed from {variable} but not reported"
                );
            }
        }

        result
    }

    /// The current domain of every variable.
    pub(crate) fn snapshot(&self) -> Vec<Vec<i32>> {
        self.csp
            .variables()
            .map(|variable| self.csp.current_domain(variable).collect())
            .collect()
    }

    pub(crate) fn assert_domain(&self, variable: DomainId, expected: &[i32]) {
        let actual = self.csp.current_domain(variable).collect::<Vec<_>>();
        assert_eq!(
            actual, expected,
            "The expected domain of {variable} is {expected:?}, but it was {actual:?}"
        );
    }

    pub(crate) fn assert_pruned(&self, result: &Propagation, expected: &[(DomainId, i32)]) {
        let mut actual = result
            .pruned
            .iter()
            .map(|pruning| (pruning.variable, pruning.value))
            .collect::<Vec<_>>();
        let mut expected = expected.to_vec();
        actual.sort();
        expected.sort();

        assert_eq!(actual, expected, "unexpected set of pruned values");
    }

    /// Assert that every value of every variable has a support in every constraint on that
    /// variable.
    pub(crate) fn assert_arc_consistent(&self) {
        for constraint in self.csp.constraints() {
            for &variable in self.csp.scope(constraint) {
                for value in self.csp.current_domain(variable) {
                    assert!(
                        self.csp.has_support(constraint, variable, value),
                        "{variable} = {value} has no support in '{}'",
                        self.csp.constraint(constraint).name()
                    );
                }
            }
        }
    }
}
