//! Lazy views over a shared, growable sequence of integers.
//!
//! [`IntegerSequence`] owns the data; [`LazySequence`] is a recipe (a composed
//! filter/map stage) plus a handle to that same storage. Building a view does
//! no work and never reads the source. Work happens only in
//! [`LazySequence::materialize`], which walks whatever the source holds at
//! that moment:
//!
//! ```
//! use sugar::sequence::IntegerSequence;
//!
//! let numbers = IntegerSequence::from_range(0..4);
//! let odds = numbers.filter(|v| v % 2 != 0);
//!
//! assert_eq!(odds.materialize(), vec![1, 3]);
//! numbers.push(5);
//! assert_eq!(odds.materialize(), vec![1, 3, 5]);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::ops::Range;
use std::rc::Rc;
use tracing::debug;

type Storage = Rc<RefCell<Vec<i32>>>;

/// One fused step: `None` drops the element, `Some` yields it.
type Stage<T> = Rc<dyn Fn(i32) -> Option<T>>;

//==============================================================================
// IntegerSequence: the mutable source
//==============================================================================

/// An ordered, growable list of `i32` that lazy views can watch.
///
/// Mutation goes through `&self` so the owner can keep appending while views
/// built from it are alive. Single-threaded only.
#[derive(Default)]
pub struct IntegerSequence {
    items: Storage,
}

impl IntegerSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_range(range: Range<i32>) -> Self {
        range.collect()
    }

    pub fn push(&self, value: i32) {
        self.items.borrow_mut().push(value);
    }

    pub fn extend<I: IntoIterator<Item = i32>>(&self, values: I) {
        self.items.borrow_mut().extend(values);
    }

    pub fn get(&self, index: usize) -> Option<i32> {
        self.items.borrow().get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Copies out the current contents.
    pub fn to_vec(&self) -> Vec<i32> {
        self.items.borrow().clone()
    }

    /// Starts a fluent chain: `numbers.filter(..).map(..)`.
    pub fn filter<P>(&self, predicate: P) -> LazySequence<i32>
    where
        P: Fn(&i32) -> bool + 'static,
    {
        LazySequence::over(self).filter(predicate)
    }

    pub fn map<U, F>(&self, transform: F) -> LazySequence<U>
    where
        F: Fn(i32) -> U + 'static,
        U: 'static,
    {
        LazySequence::over(self).map(transform)
    }
}

impl FromIterator<i32> for IntegerSequence {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self {
            items: Rc::new(RefCell::new(iter.into_iter().collect())),
        }
    }
}

impl fmt::Debug for IntegerSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.borrow().iter()).finish()
    }
}

//==============================================================================
// LazySequence: deferred filter/map over the live source
//==============================================================================

/// A deferred computation over an [`IntegerSequence`].
///
/// Holds the source by reference (shared storage, never a snapshot).
/// Can be materialized any number of times; each call re-walks the source.
pub struct LazySequence<T> {
    source: Storage,
    stage: Stage<T>,
}

impl LazySequence<i32> {
    /// Identity view: materializes to the source's current contents.
    pub fn over(source: &IntegerSequence) -> Self {
        debug!("lazy view created");
        let stage: Stage<i32> = Rc::new(|value: i32| Some(value));
        Self {
            source: Rc::clone(&source.items),
            stage,
        }
    }
}

impl<T: 'static> LazySequence<T> {
    /// Keeps only items matching `predicate`. Does not run it.
    pub fn filter<P>(self, predicate: P) -> LazySequence<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        let previous = self.stage;
        LazySequence {
            source: self.source,
            stage: Rc::new(move |value: i32| previous(value).filter(|item| predicate(item))),
        }
    }

    /// Transforms each surviving item. Does not run `transform`.
    pub fn map<U, F>(self, transform: F) -> LazySequence<U>
    where
        F: Fn(T) -> U + 'static,
        U: 'static,
    {
        let previous = self.stage;
        LazySequence {
            source: self.source,
            stage: Rc::new(move |value: i32| previous(value).map(&transform)),
        }
    }

    /// Runs the pipeline against the source as it is right now.
    ///
    /// Elements are read one at a time by index and no borrow is held while
    /// the stage runs, so predicates may inspect the source. Anything pushed
    /// during the walk is visited by this same walk.
    pub fn materialize(&self) -> Vec<T> {
        let mut produced = Vec::new();
        let mut index = 0;

        while let Some(value) = self.read(index) {
            if let Some(item) = (self.stage)(value) {
                produced.push(item);
            }
            index += 1;
        }

        debug!(read = index, produced = produced.len(), "materialized lazy view");
        produced
    }

    fn read(&self, index: usize) -> Option<i32> {
        self.source.borrow().get(index).copied()
    }
}

impl<T> Clone for LazySequence<T> {
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
            stage: Rc::clone(&self.stage),
        }
    }
}

impl<T> fmt::Debug for LazySequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Printing the items would mean evaluating; show only the source size.
        f.debug_struct("LazySequence")
            .field("source_len", &self.source.borrow().len())
            .finish_non_exhaustive()
    }
}
