//! A [`TerminationCondition`] is a condition which is polled by the search before every decision,
//! to determine whether it should give up.

mod indefinite;
mod time_budget;

pub use indefinite::*;
pub use time_budget::*;

/// The central trait that defines a termination condition. A termination condition determines
/// when the search should give up searching for solutions.
pub trait TerminationCondition {
    /// Returns `true` when the search should stop, `false` otherwise.
    fn should_stop(&mut self) -> bool;
}

impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> bool {
        match self {
            Some(t) => t.should_stop(),
            None => false,
        }
    }
}
