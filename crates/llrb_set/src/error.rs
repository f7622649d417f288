/// Structural violations reported by [`LlrbSet::validate`](crate::LlrbSet::validate).
///
/// `depth` is the edge distance from the root to the offending node.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum InvariantViolation {
    #[error("root is red")]
    RedRoot,
    #[error("red right link at depth {depth}")]
    RightLeaningRed { depth: usize },
    #[error("consecutive red links at depth {depth}")]
    ConsecutiveReds { depth: usize },
    #[error("unbalanced black height at depth {depth}: left {left}, right {right}")]
    UnbalancedBlackHeight {
        depth: usize,
        left: usize,
        right: usize,
    },
    #[error("key out of order at depth {depth}")]
    OutOfOrder { depth: usize },
    #[error("recorded len {recorded} but tree holds {counted} keys")]
    LenMismatch { recorded: usize, counted: usize },
}
