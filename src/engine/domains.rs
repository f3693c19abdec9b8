//! The domain store. It records, for every variable, its initial domain, which of those values are
//! still in the current domain and the value it is assigned to (if any).
//!
//! Pruning and unpruning are the only ways in which current domains change. While a variable is
//! assigned its current domain is reported as just the assigned value, and the assigned value
//! itself can never be pruned.

use super::variables::DomainId;
use crate::arcane_assert_moderate;
use crate::arcane_assert_simple;
use crate::basic_types::HashMap;
use crate::basic_types::ModelError;

#[derive(Debug, Default)]
pub struct Domains {
    variables: Vec<VariableDomain>,
}

#[derive(Debug)]
struct VariableDomain {
    name: String,
    values: Box<[i32]>,
    /// Maps every value of the initial domain to its index in `values`.
    positions: HashMap<i32, usize>,
    present: Vec<bool>,
    /// The number of `true` entries in `present`.
    size: usize,
    assigned: Option<i32>,
}

impl VariableDomain {
    fn position(&self, value: i32) -> Option<usize> {
        self.positions.get(&value).copied()
    }

    fn is_present(&self, value: i32) -> bool {
        self.position(value).is_some_and(|index| self.present[index])
    }
}

impl Domains {
    /// Create a variable whose initial (and current) domain is `values`. Duplicate values are
    /// dropped, the order of first occurrence is kept.
    pub(crate) fn new_variable(
        &mut self,
        name: String,
        values: impl IntoIterator<Item = i32>,
    ) -> Result<DomainId, ModelError> {
        let mut positions = HashMap::default();
        let mut unique = Vec::new();

        for value in values {
            if !positions.contains_key(&value) {
                let _ = positions.insert(value, unique.len());
                unique.push(value);
            }
        }

        if unique.is_empty() {
            return Err(ModelError::EmptyDomain(name));
        }

        let id = DomainId::new(self.variables.len() as u32);
        self.variables.push(VariableDomain {
            name,
            present: vec![true; unique.len()],
            size: unique.len(),
            values: unique.into(),
            positions,
            assigned: None,
        });

        Ok(id)
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// All variables, in order of creation.
    pub fn variables(&self) -> impl Iterator<Item = DomainId> {
        (0..self.variables.len() as u32).map(DomainId::new)
    }

    pub(crate) fn is_known(&self, variable: DomainId) -> bool {
        variable.index() < self.variables.len()
    }

    pub fn name(&self, variable: DomainId) -> &str {
        &self.variables[variable.index()].name
    }

    /// The domain the variable was created with, ignoring pruning and assignment.
    pub fn initial_domain(&self, variable: DomainId) -> &[i32] {
        &self.variables[variable.index()].values
    }

    /// The values currently admissible for `variable`, in the order of the initial domain. For an
    /// assigned variable this is only the assigned value.
    pub fn current_domain(&self, variable: DomainId) -> impl Iterator<Item = i32> + '_ {
        let domain = &self.variables[variable.index()];
        let assigned = domain.assigned;

        domain
            .values
            .iter()
            .zip(domain.present.iter())
            .filter_map(move |(&value, &present)| match assigned {
                Some(assigned_value) => (value == assigned_value).then_some(value),
                None => present.then_some(value),
            })
    }

    pub fn domain_size(&self, variable: DomainId) -> usize {
        let domain = &self.variables[variable.index()];
        if domain.assigned.is_some() {
            1
        } else {
            domain.size
        }
    }

    /// Whether `value` is in the current domain of `variable`.
    pub fn contains(&self, variable: DomainId, value: i32) -> bool {
        let domain = &self.variables[variable.index()];
        match domain.assigned {
            Some(assigned_value) => assigned_value == value,
            None => domain.is_present(value),
        }
    }

    pub fn assigned_value(&self, variable: DomainId) -> Option<i32> {
        self.variables[variable.index()].assigned
    }

    pub fn is_assigned(&self, variable: DomainId) -> bool {
        self.assigned_value(variable).is_some()
    }

    /// Fix `variable` to `value`. The value has to be in the current domain.
    pub fn assign(&mut self, variable: DomainId, value: i32) {
        let domain = &mut self.variables[variable.index()];
        arcane_assert_simple!(
            domain.assigned.is_none(),
            "{variable} is already assigned to {:?}",
            domain.assigned
        );
        arcane_assert_simple!(
            domain.is_present(value),
            "cannot assign {variable} to {value}, it is not in the current domain"
        );

        domain.assigned = Some(value);
    }

    pub fn unassign(&mut self, variable: DomainId) {
        let domain = &mut self.variables[variable.index()];
        arcane_assert_moderate!(domain.assigned.is_some(), "{variable} is not assigned");

        domain.assigned = None;
    }

    /// Remove `value` from the current domain of the unassigned `variable`.
    pub fn prune(&mut self, variable: DomainId, value: i32) {
        let domain = &mut self.variables[variable.index()];
        arcane_assert_simple!(
            domain.assigned.is_none(),
            "cannot prune {value} from the assigned variable {variable}"
        );

        let Some(index) = domain.position(value) else {
            panic!("{value} is not in the initial domain of {variable}");
        };
        arcane_assert_simple!(
            domain.present[index],
            "{value} was already pruned from {variable}"
        );

        domain.present[index] = false;
        domain.size -= 1;
    }

    /// Put a previously pruned `value` back into the current domain of `variable`.
    pub fn unprune(&mut self, variable: DomainId, value: i32) {
        let domain = &mut self.variables[variable.index()];

        let Some(index) = domain.position(value) else {
            panic!("{value} is not in the initial domain of {variable}");
        };
        arcane_assert_simple!(
            !domain.present[index],
            "{value} is still in the domain of {variable}"
        );

        domain.present[index] = true;
        domain.size += 1;
    }
}
