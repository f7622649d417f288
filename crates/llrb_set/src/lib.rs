mod error;
mod node;

pub mod impls;

pub use error::InvariantViolation;
pub use impls::{LlrbSet, StdBTreeSet};

/// Insert-only ordered set interface.
///
/// - Keys are unique.
/// - `insert` returns `false` and leaves the set unchanged when the key exists.
pub trait OrderedSet {
    type Key: Ord;

    fn new() -> Self;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn insert(&mut self, key: Self::Key) -> bool;
}
