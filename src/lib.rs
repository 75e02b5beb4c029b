//! This crate contrasts a plain Binary Search Tree (BST) with a self-balancing one
//! (an AVL tree), mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). Nothing keeps that height down in an
//! [`UnbalancedTree`][unbalanced::UnbalancedTree]: inserting sorted keys produces a
//! chain of height `N`. A [`BalancedTree`][avl::BalancedTree] rotates nodes after every
//! insert and delete so that the heights of any node's two subtrees never differ by
//! more than one, which keeps the height at `O(lg N)`.
//!
//! ```
//! use avl_bst::avl::BalancedTree;
//! use avl_bst::unbalanced::UnbalancedTree;
//!
//! let mut plain = UnbalancedTree::new();
//! let mut balanced = BalancedTree::new();
//! for key in 1..=1023 {
//!     plain.insert(key, ());
//!     balanced.insert(key, ());
//! }
//!
//! assert_eq!(plain.height(), 1023);
//! assert_eq!(balanced.height(), 10);
//! ```
//!
//! Both trees expose their root so the walks in [`traversal`] and the product
//! search in [`filter`] can run over either one through the [`node::TreeNode`] trait.
//! [`dataset`] generates the [`product::Product`] catalogs used to compare them.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
pub mod dataset;
pub mod filter;
pub mod node;
pub mod product;
pub mod traversal;
pub mod unbalanced;
