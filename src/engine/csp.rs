//! Houses the [`Csp`], the problem over which propagation and search operate.

use std::fmt::Display;

use super::variables::DomainId;
use super::Domains;
use crate::arcane_assert_eq_simple;
use crate::arcane_assert_simple;
use crate::basic_types::ModelError;
use crate::basic_types::Pruning;
use crate::constraints::Constraint;
use crate::constraints::ConstraintId;
use crate::constraints::Relation;

/// A finite-domain Constraint Satisfaction Problem: variables with their domains, and the
/// constraints over them.
///
/// The problem owns the domain store; propagators borrow the problem mutably for the duration of a
/// single call and change domains only through [`Csp::prune`]. For every variable the constraints
/// whose scope contains it are indexed, in the order in which the constraints were added.
#[derive(Debug)]
pub struct Csp {
    name: String,
    domains: Domains,
    constraints: Vec<Constraint>,
    constraints_by_variable: Vec<Vec<ConstraintId>>,
}

impl Csp {
    pub fn new(name: impl Display) -> Self {
        Csp {
            name: name.to_string(),
            domains: Domains::default(),
            constraints: Vec::new(),
            constraints_by_variable: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domains(&self) -> &Domains {
        &self.domains
    }

    /// Create a new variable with the given initial domain.
    pub fn new_variable(
        &mut self,
        name: impl Display,
        values: impl IntoIterator<Item = i32>,
    ) -> Result<DomainId, ModelError> {
        let variable = self.domains.new_variable(name.to_string(), values)?;
        self.constraints_by_variable.push(Vec::new());

        Ok(variable)
    }

    /// Add a constraint with the given scope. The length of the scope has to match the arity of the
    /// relation (if it has one), and no variable may occur twice in the scope.
    pub fn add_constraint(
        &mut self,
        name: impl Display,
        scope: impl Into<Box<[DomainId]>>,
        relation: impl Relation + 'static,
    ) -> Result<ConstraintId, ModelError> {
        let name = name.to_string();
        let scope = scope.into();

        if scope.is_empty() {
            return Err(ModelError::EmptyScope(name));
        }

        if let Some(expected) = relation.arity() {
            if expected != scope.len() {
                return Err(ModelError::ArityMismatch {
                    constraint: name,
                    expected,
                    actual: scope.len(),
                });
            }
        }

        for (index, &variable) in scope.iter().enumerate() {
            if !self.domains.is_known(variable) {
                return Err(ModelError::UnknownVariable {
                    constraint: name,
                    variable,
                });
            }

            if scope[..index].contains(&variable) {
                return Err(ModelError::RepeatedScopeVariable {
                    constraint: name,
                    variable,
                });
            }
        }

        let id = ConstraintId::new(self.constraints.len() as u32);
        for &variable in scope.iter() {
            self.constraints_by_variable[variable.index()].push(id);
        }
        self.constraints
            .push(Constraint::new(name, scope, Box::new(relation)));

        Ok(id)
    }

    pub fn num_variables(&self) -> usize {
        self.domains.num_variables()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// All variables, in order of creation.
    pub fn variables(&self) -> impl Iterator<Item = DomainId> {
        self.domains.variables()
    }

    /// The variables which are currently not assigned, in order of creation.
    pub fn unassigned_variables(&self) -> impl Iterator<Item = DomainId> + '_ {
        self.variables()
            .filter(|&variable| !self.domains.is_assigned(variable))
    }

    /// All constraints, in the order in which they were added.
    pub fn constraints(&self) -> impl Iterator<Item = ConstraintId> {
        (0..self.constraints.len() as u32).map(ConstraintId::new)
    }

    /// The constraints whose scope contains `variable`, in the order in which they were added.
    pub fn constraints_containing(&self, variable: DomainId) -> &[ConstraintId] {
        &self.constraints_by_variable[variable.index()]
    }

    pub fn constraint(&self, constraint: ConstraintId) -> &Constraint {
        &self.constraints[constraint.index()]
    }

    pub fn scope(&self, constraint: ConstraintId) -> &[DomainId] {
        self.constraint(constraint).scope()
    }

    /// The number of variables in the scope of `constraint` which are currently unassigned.
    pub fn unassigned_count(&self, constraint: ConstraintId) -> usize {
        self.unassigned_in_scope(constraint).count()
    }

    /// The variables in the scope of `constraint` which are currently unassigned, in scope order.
    pub fn unassigned_in_scope(
        &self,
        constraint: ConstraintId,
    ) -> impl Iterator<Item = DomainId> + '_ {
        self.scope(constraint)
            .iter()
            .copied()
            .filter(|&variable| !self.domains.is_assigned(variable))
    }

    /// Whether the complete `tuple` (in scope order) satisfies `constraint`.
    pub fn check(&self, constraint: ConstraintId, tuple: &[i32]) -> bool {
        let constraint = self.constraint(constraint);
        arcane_assert_eq_simple!(
            constraint.scope().len(),
            tuple.len(),
            "tuple does not cover the scope of '{}'",
            constraint.name()
        );

        constraint.relation().check(tuple)
    }

    /// Whether `variable = value` can be extended to a satisfying tuple of `constraint` using only
    /// values from the current domains of the other variables in its scope.
    pub fn has_support(&self, constraint: ConstraintId, variable: DomainId, value: i32) -> bool {
        let constraint = self.constraint(constraint);
        let Some(position) = constraint.position_of(variable) else {
            panic!(
                "{variable} is not in the scope of constraint '{}'",
                constraint.name()
            );
        };

        constraint
            .relation()
            .has_support(constraint.scope(), position, value, &self.domains)
    }

    pub fn current_domain(&self, variable: DomainId) -> impl Iterator<Item = i32> + '_ {
        self.domains.current_domain(variable)
    }

    pub fn domain_size(&self, variable: DomainId) -> usize {
        self.domains.domain_size(variable)
    }

    pub fn contains(&self, variable: DomainId, value: i32) -> bool {
        self.domains.contains(variable, value)
    }

    pub fn assigned_value(&self, variable: DomainId) -> Option<i32> {
        self.domains.assigned_value(variable)
    }

    pub fn is_assigned(&self, variable: DomainId) -> bool {
        self.domains.is_assigned(variable)
    }

    pub fn initial_domain(&self, variable: DomainId) -> &[i32] {
        self.domains.initial_domain(variable)
    }

    pub fn variable_name(&self, variable: DomainId) -> &str {
        self.domains.name(variable)
    }

    pub fn assign(&mut self, variable: DomainId, value: i32) {
        self.domains.assign(variable, value)
    }

    pub fn unassign(&mut self, variable: DomainId) {
        self.domains.unassign(variable)
    }

    pub fn prune(&mut self, variable: DomainId, value: i32) {
        self.domains.prune(variable, value)
    }

    pub fn unprune(&mut self, variable: DomainId, value: i32) {
        self.domains.unprune(variable, value)
    }

    /// Undo `pruned`, most recent pruning first.
    pub fn restore(&mut self, pruned: &[Pruning]) {
        for pruning in pruned.iter().rev() {
            self.domains.unprune(pruning.variable, pruning.value);
        }
    }

    /// The values of the assigned variables of the scope of `constraint`, in scope order.
    ///
    /// Positions of unassigned variables hold an arbitrary value from their current domain, they
    /// are expected to be overwritten by the caller.
    pub(crate) fn scope_tuple(&self, constraint: ConstraintId) -> Vec<i32> {
        self.scope(constraint)
            .iter()
            .map(|&variable| {
                let value = self.domains.current_domain(variable).next();
                arcane_assert_simple!(value.is_some(), "{variable} has an empty domain");
                value.unwrap_or_default()
            })
            .collect()
    }
}
