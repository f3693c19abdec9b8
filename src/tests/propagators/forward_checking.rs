#![cfg(test)]
use crate::constraints;
use crate::engine::test_helper::TestCsp;
use crate::propagators::ForwardChecking;
use crate::propagators::GeneralisedArcConsistency;
use crate::DomainWipeout;

#[test]
fn prunes_the_assigned_value_from_the_neighbour() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable(&[1, 2]);
    let y = csp.new_variable(&[1, 2]);
    let _ = csp.add([x, y], constraints::not_equal());

    csp.assign(x, 1);
    let result = csp.propagate(&ForwardChecking, Some(x));

    assert!(result.is_consistent());
    csp.assert_pruned(&result, &[(y, 1)]);
    csp.assert_domain(y, &[2]);
}

#[test]
fn misses_wipeout_between_two_unassigned_variables() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable(&[1, 2]);
    let y = csp.new_variable(&[1, 2]);
    let z = csp.new_variable(&[1, 2]);
    let _ = csp.add([x, y], constraints::not_equal());
    let _ = csp.add([x, z], constraints::not_equal());
    let _ = csp.add([y, z], constraints::not_equal());

    csp.assign(x, 1);
    let result = csp.propagate(&ForwardChecking, Some(x));

    assert!(result.is_consistent());
    csp.assert_pruned(&result, &[(y, 1), (z, 1)]);
    csp.assert_domain(y, &[2]);
    csp.assert_domain(z, &[2]);

    // Calling forward checking again does not see that y and z cannot both be 2.
    let result = csp.propagate(&ForwardChecking, Some(x));
    assert!(result.is_consistent());
    assert!(result.pruned.is_empty());

    // Arc consistency on the same state does.
    let result = csp.propagate(&GeneralisedArcConsistency, None);
    assert_eq!(result.status, Err(DomainWipeout { variable: y }));
    csp.assert_pruned(&result, &[(y, 2)]);
    csp.assert_domain(y, &[]);
}

#[test]
fn wipeout_reports_the_emptying_pruning() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable(&[1, 2]);
    let y = csp.new_variable(&[1]);
    let _ = csp.add([x, y], constraints::not_equal());

    csp.assign(x, 1);
    let result = csp.propagate(&ForwardChecking, Some(x));

    assert_eq!(result.status, Err(DomainWipeout { variable: y }));
    csp.assert_pruned(&result, &[(y, 1)]);
}

#[test]
fn wipeout_stops_before_later_constraints() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable(&[1, 2]);
    let y = csp.new_variable(&[1]);
    let z = csp.new_variable(&[1, 2]);
    let _ = csp.add([x, y], constraints::not_equal());
    let _ = csp.add([x, z], constraints::not_equal());

    csp.assign(x, 1);
    let result = csp.propagate(&ForwardChecking, Some(x));

    assert!(!result.is_consistent());
    csp.assert_pruned(&result, &[(y, 1)]);
    csp.assert_domain(z, &[1, 2]);
}

#[test]
fn prunings_of_earlier_constraints_are_kept_on_wipeout() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable(&[1, 2]);
    let y = csp.new_variable(&[1, 2]);
    let z = csp.new_variable(&[1]);
    let _ = csp.add([x, y], constraints::not_equal());
    let _ = csp.add([x, z], constraints::not_equal());

    csp.assign(x, 1);
    let result = csp.propagate(&ForwardChecking, Some(x));

    assert_eq!(result.status, Err(DomainWipeout { variable: z }));
    assert_eq!(result.pruned.len(), 2);
    csp.assert_pruned(&result, &[(y, 1), (z, 1)]);
}

#[test]
fn pre_search_covers_scopes_reduced_by_fixed_variables() {
    let mut csp = TestCsp::default();
    let fixed = csp.new_variable(&[3]);
    let x = csp.new_variable(&[1, 2, 3]);
    let _ = csp.add([fixed, x], constraints::not_equal());

    csp.assign(fixed, 3);
    let result = csp.propagate(&ForwardChecking, None);

    assert!(result.is_consistent());
    csp.assert_pruned(&result, &[(x, 3)]);
}

#[test]
fn n_ary_constraint_with_one_open_variable() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable(&[0, 1]);
    let y = csp.new_variable(&[0, 1]);
    let z = csp.new_variable(&[0, 1]);
    let _ = csp.add([x, y, z], constraints::sum_equals(3, 1));

    csp.assign(x, 0);
    csp.assign(y, 0);
    let result = csp.propagate(&ForwardChecking, Some(y));

    assert!(result.is_consistent());
    csp.assert_pruned(&result, &[(z, 0)]);
    csp.assert_domain(z, &[1]);
}

#[test]
fn remaining_values_satisfy_the_checked_constraint() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable(&[1, 2, 3]);
    let y = csp.new_variable(&[1, 2, 3, 4, 5, 6]);
    let _ = csp.add(
        [x, y],
        constraints::predicate(|tuple| tuple[1] % tuple[0] == 0).with_arity(2),
    );

    csp.assign(x, 2);
    let result = csp.propagate(&ForwardChecking, Some(x));

    assert!(result.is_consistent());
    csp.assert_pruned(&result, &[(y, 1), (y, 3), (y, 5)]);
    csp.assert_domain(y, &[2, 4, 6]);
}
