use std::cmp::Ordering;

use crate::OrderedSet;
use crate::error::InvariantViolation;
use crate::node::{Color, Link, Node, is_red, rebalance};

/// Set of unique keys kept in a left-leaning red-black tree.
///
/// Only insertion is supported. Duplicate keys are rejected and leave the
/// tree untouched.
#[derive(Debug)]
pub struct LlrbSet<T: Ord> {
    root: Link<T>,
    len: usize,
}

impl<T: Ord> LlrbSet<T> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of distinct keys inserted so far.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `value`, returning `false` if an equal key is already present.
    pub fn insert(&mut self, value: T) -> bool {
        let (mut root, inserted) = Self::insert_node(self.root.take(), value);
        root.color = Color::Black;
        self.root = Some(root);
        if inserted {
            self.len += 1;
        } else {
            log::trace!("llrb: duplicate key rejected, len={}", self.len);
        }
        inserted
    }

    /// Black nodes on the left spine plus the black leaf below it, 0 for an
    /// empty tree.
    ///
    /// Every root-to-leaf path carries the same count, so one path suffices.
    pub fn black_height(&self) -> usize {
        if self.root.is_none() {
            return 0;
        }
        let mut height = 1;
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            if !node.is_red() {
                height += 1;
            }
            cur = node.left.as_deref();
        }
        height
    }

    /// Edges on the longest root-to-leaf path, 0 for empty and single-node trees.
    pub fn total_height(&self) -> usize {
        Self::longest_path(&self.root).saturating_sub(1)
    }

    /// Checks every structural invariant and returns the black height.
    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        let result = self.check();
        if let Err(err) = &result {
            log::debug!("llrb: {err}");
        }
        result
    }

    fn check(&self) -> Result<usize, InvariantViolation> {
        if is_red(&self.root) {
            return Err(InvariantViolation::RedRoot);
        }
        let (blacks, counted) = Self::check_node(&self.root, None, None, false, 0)?;
        if counted != self.len {
            return Err(InvariantViolation::LenMismatch {
                recorded: self.len,
                counted,
            });
        }
        Ok(if self.root.is_some() { blacks } else { 0 })
    }

    /// Returns `(black height, node count)` of the subtree, counting the
    /// absent leaf as one black node.
    fn check_node<'a>(
        link: &'a Link<T>,
        lo: Option<&'a T>,
        hi: Option<&'a T>,
        parent_red: bool,
        depth: usize,
    ) -> Result<(usize, usize), InvariantViolation> {
        let Some(node) = link.as_deref() else {
            return Ok((1, 0));
        };
        if lo.is_some_and(|lo| node.value <= *lo) || hi.is_some_and(|hi| node.value >= *hi) {
            return Err(InvariantViolation::OutOfOrder { depth });
        }
        if parent_red && node.is_red() {
            return Err(InvariantViolation::ConsecutiveReds { depth });
        }
        if is_red(&node.right) {
            return Err(InvariantViolation::RightLeaningRed { depth: depth + 1 });
        }

        let red = node.is_red();
        let (left, left_count) =
            Self::check_node(&node.left, lo, Some(&node.value), red, depth + 1)?;
        let (right, right_count) =
            Self::check_node(&node.right, Some(&node.value), hi, red, depth + 1)?;
        if left != right {
            return Err(InvariantViolation::UnbalancedBlackHeight { depth, left, right });
        }
        Ok((left + usize::from(!red), left_count + right_count + 1))
    }

    fn insert_node(link: Link<T>, value: T) -> (Box<Node<T>>, bool) {
        let Some(mut h) = link else {
            return (Box::new(Node::new(value, Color::Red)), true);
        };

        let inserted = match value.cmp(&h.value) {
            Ordering::Equal => return (h, false),
            Ordering::Less => {
                let (left, inserted) = Self::insert_node(h.left.take(), value);
                h.left = Some(left);
                inserted
            }
            Ordering::Greater => {
                let (right, inserted) = Self::insert_node(h.right.take(), value);
                h.right = Some(right);
                inserted
            }
        };

        if inserted {
            (rebalance(h), true)
        } else {
            (h, false)
        }
    }

    fn longest_path(link: &Link<T>) -> usize {
        match link.as_deref() {
            None => 0,
            Some(node) => 1 + Self::longest_path(&node.left).max(Self::longest_path(&node.right)),
        }
    }
}

impl<T: Ord> Default for LlrbSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for LlrbSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for LlrbSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> OrderedSet for LlrbSet<T> {
    type Key = T;

    fn new() -> Self {
        LlrbSet::new()
    }

    fn len(&self) -> usize {
        LlrbSet::len(self)
    }

    fn insert(&mut self, key: Self::Key) -> bool {
        LlrbSet::insert(self, key)
    }
}
