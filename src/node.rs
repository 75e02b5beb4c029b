//! The read-only view of a tree node shared by both tree flavours.
//!
//! Collaborators that only walk a tree (see [`traversal`][crate::traversal]
//! and [`filter`][crate::filter]) are generic over this trait so they work on
//! the root of either an [`UnbalancedTree`][crate::unbalanced::UnbalancedTree]
//! or a [`BalancedTree`][crate::avl::BalancedTree].

/// A node in a binary search tree. Every node owns its two (possibly absent)
/// children, so walking `left` and `right` from the root visits each node
/// exactly once.
pub trait TreeNode {
    /// The type used for ordering nodes.
    type Key;
    /// The payload stored alongside each key.
    type Value;

    /// The key of this node.
    fn key(&self) -> &Self::Key;

    /// The payload of this node.
    fn value(&self) -> &Self::Value;

    /// The root of the left subtree, if any. All of its keys are smaller
    /// than [`key`][TreeNode::key].
    fn left(&self) -> Option<&Self>;

    /// The root of the right subtree, if any. All of its keys are larger
    /// than [`key`][TreeNode::key].
    fn right(&self) -> Option<&Self>;
}
