use crate::basic_types::Propagation;
use crate::engine::variables::DomainId;
use crate::engine::Csp;

/// All propagation strategies implement the [`Propagator`] trait. A propagator removes values from
/// the current domains of a [`Csp`] which cannot take part in a solution that extends the current
/// assignment.
///
/// Propagators are stateless between calls; everything they know about the problem is read from
/// the [`Csp`] they are given.
pub trait Propagator {
    /// Return the name of the propagator, this is a convenience method that is used for printing.
    fn name(&self) -> &str;

    /// Filter the domains of `csp`.
    ///
    /// `assigned` is [`None`] when the propagator is called before search starts, and otherwise the
    /// variable which the search has just assigned.
    ///
    /// The returned [`Propagation`] reports a domain wipeout if the domain of a variable becomes
    /// empty; propagation stops immediately when that happens. In either case it lists every
    /// `(variable, value)` pair pruned by this call, and no pair is pruned twice.
    fn propagate(&self, csp: &mut Csp, assigned: Option<DomainId>) -> Propagation;
}
