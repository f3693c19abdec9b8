//! Provides the [`VariableSelector`] trait which is required
//! for variable selectors to implement; the main method in this trait relies on
//! [`VariableSelector::select_variable`].
//!
//! Furthermore, it defines several implementations of the [`VariableSelector`] trait such as
//! [`MinimumRemainingValues`]. Any [`VariableSelector`] should only select variables which are
//! unassigned.

mod input_order;
mod minimum_remaining_values;
mod random_order;
mod variable_selector;

use clap::ValueEnum;
pub use input_order::*;
pub use minimum_remaining_values::*;
pub use random_order::*;
pub use variable_selector::VariableSelector;

/// The variable selectors which can be chosen on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum VariableSelection {
    /// Minimum remaining values.
    #[default]
    Mrv,
    /// The first unassigned variable in creation order.
    InputOrder,
    /// A uniformly random unassigned variable.
    Random,
}

impl VariableSelection {
    pub fn create(self, seed: u64) -> Box<dyn VariableSelector> {
        match self {
            VariableSelection::Mrv => Box::new(MinimumRemainingValues),
            VariableSelection::InputOrder => Box::new(InputOrder),
            VariableSelection::Random => Box::new(RandomOrder::with_seed(seed)),
        }
    }
}
