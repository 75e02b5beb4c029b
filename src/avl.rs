//! A self-balancing BST (specifically, an AVL tree). Every `insert` and `delete` walks down
//! recursively and, on the way back up, recomputes each node's height and rotates any node whose
//! subtrees differ in height by more than one. This bounds the height (and so the recursion
//! depth) to `O(lg N)` no matter the order keys arrive in.
//!
//! # Examples
//!
//! ```
//! use avl_bst::avl::BalancedTree;
//!
//! let mut tree = BalancedTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! // Ascending keys would make a plain BST a linked list.
//! for key in 1..=7 {
//!     tree.insert(key, key * 10);
//! }
//! assert_eq!(tree.height(), 3);
//! assert!(tree.is_balanced());
//!
//! // Inserting a new value for the same key overwrites the value.
//! assert_eq!(tree.insert(4, 0), Some(40));
//! assert_eq!(tree.find(&4), Some(&0));
//!
//! // Deleting a node returns its value.
//! assert_eq!(tree.delete(&4), Some(0));
//! assert!(tree.search(&4).is_none());
//! assert!(tree.is_balanced());
//! ```

use std::cmp::Ordering;
use std::mem;

use log::trace;

use crate::node::TreeNode;

type Link<K, V> = Option<Box<AvlNode<K, V>>>;

/// Height of an optional subtree. An absent child contributes a height of 0.
fn height<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |n| n.height)
}

/// An AVL tree. This can be used for inserting, finding, and deleting keys and values while
/// keeping every operation `O(lg N)`.
#[derive(Clone, Debug)]
pub struct BalancedTree<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K, V> Default for BalancedTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> BalancedTree<K, V> {
    /// Generate a new, empty `BalancedTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The root node, or `None` for an empty tree. Collaborators walk the tree from here using
    /// [`TreeNode::left`] and [`TreeNode::right`].
    pub fn root(&self) -> Option<&AvlNode<K, V>> {
        self.root.as_deref()
    }

    /// How many keys are stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of levels in the tree. An empty tree has a height of 0 and a single node has a
    /// height of 1.
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// Checks that every node's subtrees differ in height by at most one.
    ///
    /// This always holds after `insert` and `delete` return; it exists for verification.
    pub fn is_balanced(&self) -> bool {
        self.root().map_or(true, AvlNode::is_balanced)
    }

    /// Inserts the given value into the tree stored at the given key. Inserting a new value for
    /// an existing key overwrites its value in place and returns the old one.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::avl::BalancedTree;
    ///
    /// let mut tree = BalancedTree::new();
    ///
    /// assert_eq!(tree.insert(1, 2), None);
    /// assert_eq!(tree.find(&1), Some(&2));
    ///
    /// assert_eq!(tree.insert(1, 3), Some(2));
    /// assert_eq!(tree.find(&1), Some(&3));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        K: Ord,
    {
        let insertion = AvlNode::insert_into(self.root.take(), key, value);
        self.root = Some(insertion.node);
        if insertion.replaced.is_none() {
            self.len += 1;
        }
        insertion.replaced
    }

    /// Finds the node with the given key, if there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::avl::BalancedTree;
    ///
    /// let mut tree = BalancedTree::new();
    /// tree.insert(1, "one");
    ///
    /// let node = tree.search(&1).unwrap();
    /// assert_eq!(node.key(), &1);
    /// assert_eq!(node.value(), &"one");
    /// assert!(tree.search(&42).is_none());
    /// ```
    pub fn search(&self, key: &K) -> Option<&AvlNode<K, V>>
    where
        K: Ord,
    {
        self.root().and_then(|n| n.search(key))
    }

    /// Potentially finds the value associated with the given key in this tree. If no node has
    /// the corresponding key, `None` is returned.
    pub fn find(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        self.search(key).map(AvlNode::value)
    }

    /// A mutable reference to the value stored at the given key. Only the payload can change
    /// through it; the key and the shape of the tree stay put.
    pub fn find_mut(&mut self, key: &K) -> Option<&mut V>
    where
        K: Ord,
    {
        self.root.as_deref_mut().and_then(|n| n.find_mut(key))
    }

    /// Deletes the node containing the given key from the tree and returns its value. If the
    /// tree does not contain a node with the key, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::avl::BalancedTree;
    ///
    /// let mut tree = BalancedTree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.delete(&1), Some(2));
    /// assert_eq!(tree.delete(&1), None);
    /// assert_eq!(tree.find(&1), None);
    /// ```
    pub fn delete(&mut self, key: &K) -> Option<V>
    where
        K: Ord,
    {
        let (root, removed) = AvlNode::delete_from(self.root.take(), key);
        self.root = root;
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }
}

/// A node of a [`BalancedTree`]. On top of its key and value it caches the height of the
/// subtree rooted at it so balance factors are `O(1)` to compute.
#[derive(Clone, Debug)]
pub struct AvlNode<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    height: usize,
}

/// What the caller of [`AvlNode::insert`] gets back.
struct Insertion<K, V> {
    /// The (possibly rotated) root of the subtree that was inserted into.
    node: Box<AvlNode<K, V>>,
    /// Where the inserted key went relative to the subtree's root before any rotation. The
    /// parent uses it to tell a Right-Right from a Right-Left imbalance (and Left-Left from
    /// Left-Right) without holding on to the key itself.
    side: Ordering,
    /// The value that was overwritten, if the key was already present.
    replaced: Option<V>,
}

/// How to pick between a single and a double rotation once a node is found to be too heavy on
/// one side.
#[derive(Clone, Copy)]
enum Cause {
    /// A key was inserted into the heavy child, on the given side of it.
    Inserted(Ordering),
    /// A node was removed somewhere below. Only the heavy child's own balance is left to go on.
    Deleted,
}

impl<K, V> AvlNode<K, V> {
    fn new_boxed(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            left: None,
            right: None,
            height: 1,
        })
    }

    /// The key of this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The value stored at this node's key.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// The root of the left subtree.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// How many levels are in the subtree rooted at this node.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The difference in height between the right and left subtrees. See [the Wikipedia
    /// page][wiki] for more details.
    ///
    /// [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Balance_factor
    pub fn balance(&self) -> isize {
        height(&self.right) as isize - height(&self.left) as isize
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1. Must run after
    /// anything below this node changed shape and before [`balance`][AvlNode::balance] is
    /// trusted.
    pub fn update_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }

    fn is_balanced(&self) -> bool {
        self.balance().abs() <= 1
            && self.left().map_or(true, Self::is_balanced)
            && self.right().map_or(true, Self::is_balanced)
    }

    fn search(&self, key: &K) -> Option<&Self>
    where
        K: Ord,
    {
        match key.cmp(&self.key) {
            Ordering::Less => self.left().and_then(|n| n.search(key)),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right().and_then(|n| n.search(key)),
        }
    }

    fn find_mut(&mut self, key: &K) -> Option<&mut V>
    where
        K: Ord,
    {
        match key.cmp(&self.key) {
            Ordering::Less => self.left.as_deref_mut().and_then(|n| n.find_mut(key)),
            Ordering::Equal => Some(&mut self.value),
            Ordering::Greater => self.right.as_deref_mut().and_then(|n| n.find_mut(key)),
        }
    }

    /// Inserts into an optional subtree, creating the node at the empty slot.
    fn insert_into(link: Link<K, V>, key: K, value: V) -> Insertion<K, V>
    where
        K: Ord,
    {
        match link {
            None => Insertion {
                node: Self::new_boxed(key, value),
                side: Ordering::Equal,
                replaced: None,
            },
            Some(node) => node.insert(key, value),
        }
    }

    fn insert(mut self: Box<Self>, key: K, value: V) -> Insertion<K, V>
    where
        K: Ord,
    {
        let side = key.cmp(&self.key);
        let (cause, replaced) = match side {
            Ordering::Less => {
                let child = Self::insert_into(self.left.take(), key, value);
                self.left = Some(child.node);
                (Cause::Inserted(child.side), child.replaced)
            }
            Ordering::Equal => {
                // Overwriting leaves the shape and every height untouched.
                let replaced = mem::replace(&mut self.value, value);
                return Insertion {
                    node: self,
                    side,
                    replaced: Some(replaced),
                };
            }
            Ordering::Greater => {
                let child = Self::insert_into(self.right.take(), key, value);
                self.right = Some(child.node);
                (Cause::Inserted(child.side), child.replaced)
            }
        };

        Insertion {
            node: self.rebalance(cause),
            side,
            replaced,
        }
    }

    /// Deletes from an optional subtree, returning the new subtree and the removed value.
    fn delete_from(link: Link<K, V>, key: &K) -> (Link<K, V>, Option<V>)
    where
        K: Ord,
    {
        match link {
            None => (None, None),
            Some(node) => node.delete(key),
        }
    }

    fn delete(mut self: Box<Self>, key: &K) -> (Link<K, V>, Option<V>)
    where
        K: Ord,
    {
        let removed = match key.cmp(&self.key) {
            Ordering::Less => {
                let (left, removed) = Self::delete_from(self.left.take(), key);
                self.left = left;
                removed
            }
            Ordering::Greater => {
                let (right, removed) = Self::delete_from(self.right.take(), key);
                self.right = right;
                removed
            }
            Ordering::Equal => match (self.left.take(), self.right.take()) {
                (None, None) => return (None, Some(self.value)),
                (Some(child), None) | (None, Some(child)) => return (Some(child), Some(self.value)),

                // With two children the in-order successor (the smallest key of the right
                // subtree) takes this node's place.
                (Some(left), Some(right)) => {
                    let (right, successor) = right.delete_min();
                    let AvlNode { key, value, .. } = *successor;
                    self.left = Some(left);
                    self.right = right;
                    self.key = key;
                    Some(mem::replace(&mut self.value, value))
                }
            },
        };

        if removed.is_none() {
            // Nothing below changed so there is nothing to rebalance.
            return (Some(self), None);
        }
        (Some(self.rebalance(Cause::Deleted)), removed)
    }

    /// Detaches the smallest node of this subtree. Returns the rebalanced remainder and the
    /// detached node (whose children are no longer meaningful).
    fn delete_min(mut self: Box<Self>) -> (Link<K, V>, Box<Self>) {
        match self.left.take() {
            None => {
                let right = self.right.take();
                (right, self)
            }
            Some(left) => {
                let (left, min) = left.delete_min();
                self.left = left;
                (Some(self.rebalance(Cause::Deleted)), min)
            }
        }
    }

    /// Restores the AVL invariant at this node, assuming it already holds for both children.
    fn rebalance(mut self: Box<Self>, cause: Cause) -> Box<Self> {
        self.update_height();
        let balance = self.balance();

        let node = if balance > 1 {
            let right_is_left_heavy = match cause {
                Cause::Inserted(side) => side == Ordering::Less,
                Cause::Deleted => self.right().map_or(false, |r| r.balance() < 0),
            };
            if right_is_left_heavy {
                self.right = self.right.take().map(Self::rotate_right);
            }
            self.rotate_left()
        } else if balance < -1 {
            let left_is_right_heavy = match cause {
                Cause::Inserted(side) => side == Ordering::Greater,
                Cause::Deleted => self.left().map_or(false, |l| l.balance() > 0),
            };
            if left_is_right_heavy {
                self.left = self.left.take().map(Self::rotate_left);
            }
            self.rotate_right()
        } else {
            self
        };

        // In tests, after balancing, assert that we've restored/maintained the AVL invariant.
        if cfg!(test) {
            assert!(node.balance().abs() <= 1);
        }
        node
    }

    /// Rotate self to the left. This moves the right child up vertically and self down
    /// vertically. Without a right child there is nothing to rotate and `self` is returned as is.
    ///
    /// # Diagram
    ///
    /// ```text
    ///   old_root                    new_root
    ///    /    \                      /    \
    ///   x   new_root  rotate ->  old_root  z
    ///        /  \                 /  \
    ///       y    z               x    y
    /// ```
    fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        match self.right.take() {
            None => self,
            Some(mut new_root) => {
                trace!("rotating left, subtree height {}", self.height);
                self.right = new_root.left.take();
                // The old root is now lower so its height has to be right before the new
                // root's can be.
                self.update_height();
                new_root.left = Some(self);
                new_root.update_height();
                new_root
            }
        }
    }

    /// Rotate self to the right. This moves the left child up vertically and self down
    /// vertically. Without a left child there is nothing to rotate and `self` is returned as is.
    ///
    /// # Diagram
    ///
    /// ```text
    ///      old_root             new_root
    ///       /    \               /    \
    ///   new_root  z  rotate ->  x   old_root
    ///    /  \                        /  \
    ///   x    y                      y    z
    /// ```
    fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        match self.left.take() {
            None => self,
            Some(mut new_root) => {
                trace!("rotating right, subtree height {}", self.height);
                self.left = new_root.right.take();
                self.update_height();
                new_root.right = Some(self);
                new_root.update_height();
                new_root
            }
        }
    }
}

impl<K, V> TreeNode for AvlNode<K, V> {
    type Key = K;
    type Value = V;

    fn key(&self) -> &K {
        AvlNode::key(self)
    }

    fn value(&self) -> &V {
        AvlNode::value(self)
    }

    fn left(&self) -> Option<&Self> {
        AvlNode::left(self)
    }

    fn right(&self) -> Option<&Self> {
        AvlNode::right(self)
    }
}
