// End-to-end checks of the deferred evaluation contract through the public API.

use std::cell::Cell;
use std::rc::Rc;
use sugar::query::{double_odd_fluent, double_odd_query};
use sugar::{query, IntegerSequence};

fn zero_to_nine() -> IntegerSequence {
    IntegerSequence::from_range(0..10)
}

#[test]
fn test_immediate_materialization() {
    let integers = zero_to_nine();

    assert_eq!(double_odd_fluent(&integers).materialize(), vec![2, 6, 10, 14, 18]);
    assert_eq!(double_odd_query(&integers).materialize(), vec![2, 6, 10, 14, 18]);
}

#[test]
fn test_append_before_materialization() {
    let integers = zero_to_nine();
    let fluent = double_odd_fluent(&integers);
    let query = double_odd_query(&integers);

    integers.push(11);

    assert_eq!(fluent.materialize(), vec![2, 6, 10, 14, 18, 22]);
    assert_eq!(query.materialize(), vec![2, 6, 10, 14, 18, 22]);
}

#[test]
fn test_rematerialize_after_further_mutation() {
    let integers = zero_to_nine();
    let query = double_odd_query(&integers);

    integers.push(11);
    let first = query.materialize();
    integers.push(13);
    integers.push(14);
    let second = query.materialize();

    assert_eq!(first, vec![2, 6, 10, 14, 18, 22]);
    assert_eq!(second, vec![2, 6, 10, 14, 18, 22, 26]);
}

#[test]
fn test_materialize_twice_without_mutation_is_stable() {
    let integers = zero_to_nine();
    let fluent = double_odd_fluent(&integers);

    let first = fluent.materialize();
    let second = fluent.materialize();
    assert_eq!(first, second);
}

#[test]
fn test_construction_does_not_evaluate() {
    let seen = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&seen);
    let integers = zero_to_nine();

    let view = query!(from v in integers, where { counter.set(counter.get() + 1); v % 2 != 0 }, select v * 2);
    assert_eq!(seen.get(), 0);

    assert_eq!(view.materialize(), vec![2, 6, 10, 14, 18]);
    assert_eq!(seen.get(), 10);
}

#[test]
fn test_earlier_result_is_a_snapshot() {
    let integers = zero_to_nine();
    let fluent = double_odd_fluent(&integers);

    let forced = fluent.materialize();
    integers.push(11);

    assert_eq!(forced, vec![2, 6, 10, 14, 18]);
    assert_eq!(fluent.materialize().last(), Some(&22));
}
