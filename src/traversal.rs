//! Walks over the nodes of either tree, returning the keys in the order they were visited.
//!
//! None of these recurse: each keeps its own stack or queue, so they work on degenerate
//! [`UnbalancedTree`][crate::unbalanced::UnbalancedTree]s as well as balanced ones.
//!
//! # Examples
//!
//! ```
//! use avl_bst::traversal::{breadth_first, depth_first, in_order};
//! use avl_bst::unbalanced::UnbalancedTree;
//!
//! //       10
//! //      /  \
//! //     5    15
//! //    / \
//! //   3   7
//! let mut tree = UnbalancedTree::new();
//! for key in [10, 5, 15, 3, 7] {
//!     tree.insert(key, ());
//! }
//!
//! assert_eq!(depth_first(tree.root()), vec![&10, &5, &3, &7, &15]);
//! assert_eq!(breadth_first(tree.root()), vec![&10, &5, &15, &3, &7]);
//! assert_eq!(in_order(tree.root()), vec![&3, &5, &7, &10, &15]);
//! ```

use std::collections::VecDeque;

use crate::node::TreeNode;

/// Pre-order depth-first traversal with an explicit stack. The right child is pushed before the
/// left one so the left subtree is always finished first.
pub fn depth_first<N>(root: Option<&N>) -> Vec<&N::Key>
where
    N: TreeNode,
{
    let mut visited = Vec::new();
    let mut stack: Vec<&N> = root.into_iter().collect();

    while let Some(current) = stack.pop() {
        visited.push(current.key());
        stack.extend(current.right());
        stack.extend(current.left());
    }

    visited
}

/// Level-order breadth-first traversal with a FIFO queue, left child before right.
pub fn breadth_first<N>(root: Option<&N>) -> Vec<&N::Key>
where
    N: TreeNode,
{
    let mut visited = Vec::new();
    let mut queue: VecDeque<&N> = root.into_iter().collect();

    while let Some(current) = queue.pop_front() {
        visited.push(current.key());
        queue.extend(current.left());
        queue.extend(current.right());
    }

    visited
}

/// In-order traversal. For a valid BST the keys come out strictly ascending.
pub fn in_order<N>(root: Option<&N>) -> Vec<&N::Key>
where
    N: TreeNode,
{
    let mut visited = Vec::new();
    let mut stack = Vec::new();
    let mut current = root;

    loop {
        while let Some(node) = current {
            stack.push(node);
            current = node.left();
        }
        match stack.pop() {
            Some(node) => {
                visited.push(node.key());
                current = node.right();
            }
            None => break,
        }
    }

    visited
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avl::BalancedTree;
    use crate::unbalanced::{Node, UnbalancedTree};

    /// ```text
    ///         10
    ///        /  \
    ///       5    15
    ///      / \
    ///     3   7
    /// ```
    fn sample_tree() -> UnbalancedTree<i32, &'static str> {
        let mut tree = UnbalancedTree::new();
        tree.insert(10, "A");
        tree.insert(5, "B");
        tree.insert(15, "C");
        tree.insert(3, "D");
        tree.insert(7, "E");
        tree
    }

    #[test]
    fn dfs_traversal() {
        let tree = sample_tree();

        assert_eq!(depth_first(tree.root()), vec![&10, &5, &3, &7, &15]);
    }

    #[test]
    fn bfs_traversal() {
        let tree = sample_tree();

        assert_eq!(breadth_first(tree.root()), vec![&10, &5, &15, &3, &7]);
    }

    #[test]
    fn empty_root() {
        let root: Option<&Node<i32, ()>> = None;

        assert!(depth_first(root).is_empty());
        assert!(breadth_first(root).is_empty());
        assert!(in_order(root).is_empty());
    }

    #[test]
    fn single_node() {
        let mut tree = UnbalancedTree::new();
        tree.insert(1, ());

        assert_eq!(depth_first(tree.root()), vec![&1]);
        assert_eq!(breadth_first(tree.root()), vec![&1]);
    }

    #[test]
    fn visits_every_node_once() {
        let tree = sample_tree();

        let mut dfs = depth_first(tree.root());
        let mut bfs = breadth_first(tree.root());
        dfs.sort();
        bfs.sort();

        assert_eq!(dfs, in_order(tree.root()));
        assert_eq!(bfs, in_order(tree.root()));
    }

    #[test]
    fn walks_balanced_tree() {
        let mut tree = BalancedTree::new();
        for key in 1..=7 {
            tree.insert(key, ());
        }

        assert_eq!(breadth_first(tree.root()), vec![&4, &2, &6, &1, &3, &5, &7]);
        assert_eq!(depth_first(tree.root()), vec![&4, &2, &1, &3, &6, &5, &7]);
        let keys: Vec<i32> = (1..=7).collect();
        assert_eq!(in_order(tree.root()), keys.iter().collect::<Vec<_>>());
    }
}
