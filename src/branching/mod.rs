//! Contains the variable ordering heuristics used by the search; see [`VariableSelector`].

pub mod variable_selection;

pub use variable_selection::*;
