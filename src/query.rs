//! Two spellings of the same lazy query: "double every odd integer".
//!
//! The fluent form chains adapters directly. The comprehension form reads
//! like a query (`from .. where .. select ..`) and is expanded by [`query!`]
//! into exactly that chain, so both produce a [`LazySequence`] with the same
//! deferred semantics.

use crate::sequence::{IntegerSequence, LazySequence};

/// Builds a [`LazySequence`] with comprehension syntax.
///
/// Each clause is separated by a comma; there may be any number of `where`
/// clauses (including none). The bound name is an `i32` copy of the current
/// element inside `where`, and the (possibly transformed) value inside
/// `select`.
///
/// ```
/// use sugar::query;
/// use sugar::sequence::IntegerSequence;
///
/// let numbers = IntegerSequence::from_range(0..10);
/// let evens_squared = query!(from n in numbers, where n % 2 == 0, where n > 2, select n * n);
///
/// assert_eq!(evens_squared.materialize(), vec![16, 36, 64]);
/// ```
#[macro_export]
macro_rules! query {
    (from $var:ident in $source:expr $(, where $cond:expr)* , select $projection:expr $(,)?) => {
        $crate::sequence::LazySequence::over(&$source)
            $(.filter(move |&$var| $cond))*
            .map(move |$var| $projection)
    };
}

pub fn is_odd(value: &i32) -> bool {
    value % 2 != 0
}

/// Wraps on overflow so the pipeline stays total.
pub fn double(value: i32) -> i32 {
    value.wrapping_mul(2)
}

/// Double all odd integers, fluent form.
pub fn double_odd_fluent(integers: &IntegerSequence) -> LazySequence<i32> {
    integers.filter(is_odd).map(double)
}

/// Double all odd integers, comprehension form.
pub fn double_odd_query(integers: &IntegerSequence) -> LazySequence<i32> {
    query!(from value in integers, where value % 2 != 0, select value.wrapping_mul(2))
}
