use std::fmt::Display;
use std::fmt::Formatter;

use crate::engine::variables::DomainId;

/// A single value removed from the current domain of a variable during one propagation call.
///
/// The search driver undoes prunings by handing them back to [`crate::engine::Csp::restore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pruning {
    pub variable: DomainId,
    pub value: i32,
}

impl Pruning {
    pub fn new(variable: DomainId, value: i32) -> Self {
        Pruning { variable, value }
    }
}

impl Display for Pruning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} != {}]", self.variable, self.value)
    }
}
