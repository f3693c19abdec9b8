#![cfg(test)]
use crate::constraints;
use crate::engine::test_helper::TestCsp;
use crate::propagators::PlainBacktracking;
use crate::DomainWipeout;

#[test]
fn nothing_happens_before_search() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable(&[1]);
    let y = csp.new_variable(&[1]);
    let _ = csp.add([x, y], constraints::not_equal());

    let result = csp.propagate(&PlainBacktracking, None);

    assert!(result.is_consistent());
    assert!(result.pruned.is_empty());
}

#[test]
fn violated_full_assignment_fails_without_pruning() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable(&[1, 2]);
    let y = csp.new_variable(&[1, 2]);
    let _ = csp.add([x, y], constraints::not_equal());

    csp.assign(x, 1);
    csp.assign(y, 1);
    let result = csp.propagate(&PlainBacktracking, Some(y));

    assert_eq!(result.status, Err(DomainWipeout { variable: y }));
    assert!(result.pruned.is_empty());
    csp.assert_domain(x, &[1]);
}

#[test]
fn satisfied_full_assignment_succeeds() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable(&[1, 2]);
    let y = csp.new_variable(&[1, 2]);
    let _ = csp.add([x, y], constraints::not_equal());

    csp.assign(x, 1);
    csp.assign(y, 2);
    let result = csp.propagate(&PlainBacktracking, Some(y));

    assert!(result.is_consistent());
    assert!(result.pruned.is_empty());
}

#[test]
fn partially_assigned_constraints_are_not_checked() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable(&[1]);
    let y = csp.new_variable(&[1]);
    let z = csp.new_variable(&[1, 2]);
    let _ = csp.add([x, y, z], constraints::all_different());

    // x = y = 1 already violates the constraint, but z is not assigned yet.
    csp.assign(x, 1);
    csp.assign(y, 1);
    let result = csp.propagate(&PlainBacktracking, Some(y));

    assert!(result.is_consistent());
    csp.assert_domain(z, &[1, 2]);
}

#[test]
fn only_constraints_on_the_assigned_variable_are_checked() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable(&[1]);
    let y = csp.new_variable(&[1]);
    let z = csp.new_variable(&[1, 2]);
    let _ = csp.add([x, y], constraints::not_equal());

    csp.assign(x, 1);
    csp.assign(y, 1);
    csp.assign(z, 2);
    let result = csp.propagate(&PlainBacktracking, Some(z));

    assert!(result.is_consistent());
}
