#![cfg(test)]
use crate::constraints;
use crate::constraints::TableRelation;
use crate::engine::test_helper::TestCsp;
use crate::propagators::GeneralisedArcConsistency;
use crate::DomainWipeout;

#[test]
fn pruning_is_propagated_through_the_queue() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable(&[1, 2]);
    let y = csp.new_variable(&[1, 2]);
    let z = csp.new_variable(&[1, 2]);
    let _ = csp.add([x, y], constraints::not_equal());
    let _ = csp.add([x, z], constraints::not_equal());
    let _ = csp.add([y, z], constraints::not_equal());

    csp.assign(x, 1);
    let result = csp.propagate(&GeneralisedArcConsistency, Some(x));

    assert_eq!(result.status, Err(DomainWipeout { variable: y }));
    assert_eq!(
        result
            .pruned
            .iter()
            .map(|pruning| (pruning.variable, pruning.value))
            .collect::<Vec<_>>(),
        vec![(y, 1), (z, 1), (y, 2)]
    );
}

#[test]
fn restoring_the_reported_prunings_undoes_the_call() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable(&[1, 2]);
    let y = csp.new_variable(&[1, 2]);
    let z = csp.new_variable(&[1, 2]);
    let _ = csp.add([x, y], constraints::not_equal());
    let _ = csp.add([x, z], constraints::not_equal());
    let _ = csp.add([y, z], constraints::not_equal());

    csp.assign(x, 1);
    let before = csp.snapshot();
    let result = csp.propagate(&GeneralisedArcConsistency, Some(x));
    csp.csp.restore(&result.pruned);

    assert_eq!(csp.snapshot(), before);
}

#[test]
fn sum_without_assignment_prunes_nothing() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable(&[0, 1]);
    let y = csp.new_variable(&[0, 1]);
    let z = csp.new_variable(&[0, 1]);
    let _ = csp.add([x, y, z], constraints::sum_equals(3, 1));

    let result = csp.propagate(&GeneralisedArcConsistency, None);

    assert!(result.is_consistent());
    assert!(result.pruned.is_empty());
    csp.assert_arc_consistent();
}

#[test]
fn sum_table_without_assignment_prunes_nothing() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable(&[0, 1]);
    let y = csp.new_variable(&[0, 1]);
    let z = csp.new_variable(&[0, 1]);
    let table = TableRelation::from_product(&[vec![0, 1], vec![0, 1], vec![0, 1]], |tuple| {
        tuple.iter().sum::<i32>() == 1
    });
    assert_eq!(table.num_tuples(), 3);
    let _ = csp.add([x, y, z], table);

    let result = csp.propagate(&GeneralisedArcConsistency, None);

    assert!(result.is_consistent());
    assert!(result.pruned.is_empty());
}

#[test]
fn assigning_one_in_a_sum_prunes_the_others() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable(&[0, 1]);
    let y = csp.new_variable(&[0, 1]);
    let z = csp.new_variable(&[0, 1]);
    let _ = csp.add([x, y, z], constraints::sum_equals(3, 1));

    csp.assign(x, 1);
    let result = csp.propagate(&GeneralisedArcConsistency, Some(x));

    assert!(result.is_consistent());
    csp.assert_pruned(&result, &[(y, 1), (z, 1)]);
    csp.assert_domain(y, &[0]);
    csp.assert_domain(z, &[0]);
    csp.assert_arc_consistent();
}

#[test]
fn unsupported_assignment_fails_without_pruning_the_assigned_variable() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable(&[1, 2]);
    let y = csp.new_variable(&[1]);
    let _ = csp.add([x, y], constraints::not_equal());

    csp.assign(x, 1);
    let result = csp.propagate(&GeneralisedArcConsistency, None);

    assert_eq!(result.status, Err(DomainWipeout { variable: x }));
    assert!(result.pruned.is_empty());
    assert_eq!(csp.csp.assigned_value(x), Some(1));
}

#[test]
fn pigeonhole_is_detected_by_all_different() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable(&[1, 2]);
    let y = csp.new_variable(&[1, 2]);
    let z = csp.new_variable(&[1, 2]);
    let _ = csp.add([x, y, z], constraints::all_different());

    let result = csp.propagate(&GeneralisedArcConsistency, None);

    assert!(!result.is_consistent());
}

#[test]
fn all_different_removes_values_taken_by_a_matching() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable(&[1, 2]);
    let y = csp.new_variable(&[1, 2]);
    let z = csp.new_variable(&[1, 2, 3]);
    let _ = csp.add([x, y, z], constraints::all_different());

    let result = csp.propagate(&GeneralisedArcConsistency, None);

    assert!(result.is_consistent());
    csp.assert_pruned(&result, &[(z, 1), (z, 2)]);
    csp.assert_domain(z, &[3]);
    csp.assert_arc_consistent();
}

#[test]
fn second_call_prunes_nothing() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable(&[1, 2, 3]);
    let y = csp.new_variable(&[1, 2, 3]);
    let z = csp.new_variable(&[1, 2, 3]);
    let _ = csp.add([x, y], constraints::predicate(|tuple| tuple[0] < tuple[1]).with_arity(2));
    let _ = csp.add([y, z], constraints::predicate(|tuple| tuple[0] < tuple[1]).with_arity(2));

    let first = csp.propagate(&GeneralisedArcConsistency, None);
    assert!(first.is_consistent());
    csp.assert_domain(x, &[1]);
    csp.assert_domain(y, &[2]);
    csp.assert_domain(z, &[3]);

    let second = csp.propagate(&GeneralisedArcConsistency, None);
    assert!(second.is_consistent());
    assert!(second.pruned.is_empty());
}

#[test]
fn constraints_without_the_assigned_variable_are_reached_through_pruning() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable(&[1, 2]);
    let y = csp.new_variable(&[1, 2]);
    let z = csp.new_variable(&[1, 2, 3]);
    let _ = csp.add([x, y], constraints::not_equal());
    let _ = csp.add([y, z], constraints::not_equal());

    csp.assign(x, 2);
    let result = csp.propagate(&GeneralisedArcConsistency, Some(x));

    assert!(result.is_consistent());
    csp.assert_pruned(&result, &[(y, 2), (z, 1)]);
    csp.assert_domain(z, &[2, 3]);
}

#[test]
fn constraints_unrelated_to_the_assignment_are_not_revised() {
    let mut csp = TestCsp::default();
    let x = csp.new_variable(&[1, 2]);
    let y = csp.new_variable(&[1, 2]);
    let z = csp.new_variable(&[1, 2]);
    let w = csp.new_variable(&[1]);
    let _ = csp.add([x, y], constraints::not_equal());
    let _ = csp.add([z, w], constraints::not_equal());

    // z = 1 has no support, but nothing connects z to x. The fixpoint only covers the constraints
    // which were revised during the call.
    csp.assign(x, 1);
    let result = csp.propagate(&GeneralisedArcConsistency, Some(x));

    assert!(result.is_consistent());
    csp.assert_pruned(&result, &[(y, 1)]);
    csp.assert_domain(z, &[1, 2]);

    let result = csp.propagate(&GeneralisedArcConsistency, None);
    assert!(result.is_consistent());
    csp.assert_pruned(&result, &[(z, 1)]);
    csp.assert_arc_consistent();
}
