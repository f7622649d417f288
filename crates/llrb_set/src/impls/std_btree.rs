use std::collections::BTreeSet;

use crate::OrderedSet;

/// `std::collections::BTreeSet` behind [`OrderedSet`], used as a baseline.
pub struct StdBTreeSet<T: Ord> {
    inner: BTreeSet<T>,
}

impl<T: Ord> StdBTreeSet<T> {
    pub fn into_inner(self) -> BTreeSet<T> {
        self.inner
    }
}

impl<T: Ord> OrderedSet for StdBTreeSet<T> {
    type Key = T;

    fn new() -> Self {
        Self {
            inner: BTreeSet::new(),
        }
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn insert(&mut self, key: Self::Key) -> bool {
        self.inner.insert(key)
    }
}
