//! A plain BST with no rebalancing. Its shape, and so the cost of every operation, is decided
//! entirely by the order keys are inserted in: ascending keys build a linked list of height `N`.
//!
//! Because that height is unbounded, nothing here recurses. Every operation walks the tree with
//! a loop (or an explicit stack), so even a degenerate tree of millions of nodes can be built,
//! searched, and dropped without exhausting the call stack.
//!
//! # Examples
//!
//! ```
//! use avl_bst::unbalanced::UnbalancedTree;
//!
//! let mut tree = UnbalancedTree::new();
//! for key in 0..100 {
//!     tree.insert(key, key);
//! }
//!
//! // Sorted input degrades the tree into a chain.
//! assert_eq!(tree.height(), 100);
//!
//! assert_eq!(tree.find(&42), Some(&42));
//! assert_eq!(tree.delete(&42), Some(42));
//! assert_eq!(tree.find(&42), None);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::node::TreeNode;

type Link<K, V> = Option<Box<Node<K, V>>>;

/// A Binary Search Tree that never rebalances.
pub struct UnbalancedTree<K, V> {
    root: Link<K, V>,
    len: usize,
}

/// A node of an [`UnbalancedTree`]: a key, its value, and two exclusively owned children.
pub struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Default for UnbalancedTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for UnbalancedTree<K, V> {
    // The default drop glue recurses once per level, which a chain of sorted keys turns into one
    // frame per node. Unlink every node first so each `Box` drops with no children attached.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K, V> fmt::Debug for UnbalancedTree<K, V>
where
    K: fmt::Debug,
{
    // Only the keys, in order, to stay iterative.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnbalancedTree")
            .field("len", &self.len)
            .field("keys", &crate::traversal::in_order(self.root()))
            .finish()
    }
}

impl<K, V> UnbalancedTree<K, V> {
    /// Generate a new, empty `UnbalancedTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<K, V>> {
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

    /// The number of levels in the tree, counted one level at a time. An empty tree has
    /// a height of 0.
    pub fn height(&self) -> usize {
        let mut level: Vec<&Node<K, V>> = self.root().into_iter().collect();
        let mut height = 0;
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|n| n.left().into_iter().chain(n.right()))
                .collect();
        }
        height
    }

    /// Inserts the given value into the tree stored at the given key. Inserting a new value for
    /// an existing key overwrites its value in place and returns the old one.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::unbalanced::UnbalancedTree;
    ///
    /// let mut tree = UnbalancedTree::new();
    ///
    /// assert_eq!(tree.insert(1, 2), None);
    /// assert_eq!(tree.insert(1, 3), Some(2));
    /// assert_eq!(tree.find(&1), Some(&3));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        K: Ord,
    {
        let link = Self::link_to(&mut self.root, &key);
        match link {
            Some(node) => Some(mem::replace(&mut node.value, value)),
            None => {
                *link = Some(Node::new_boxed(key, value));
                self.len += 1;
                None
            }
        }
    }

    /// Finds the node with the given key, if there is one.
    pub fn search(&self, key: &K) -> Option<&Node<K, V>>
    where
        K: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Potentially finds the value associated with the given key in this tree. If no node has
    /// the corresponding key, `None` is returned.
    pub fn find(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        self.search(key).map(Node::value)
    }

    /// A mutable reference to the value stored at the given key.
    pub fn find_mut(&mut self, key: &K) -> Option<&mut V>
    where
        K: Ord,
    {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.value),
                Ordering::Greater => node.right.as_deref_mut(),
            };
        }
        None
    }

    /// Deletes the node containing the given key from the tree and returns its value. If the
    /// tree does not contain a node with the key, nothing happens.
    ///
    /// A node with at most one child is replaced by that child. A node with two children takes
    /// the key and value of its in-order successor (the leftmost node of its right subtree),
    /// which is then spliced out of the right subtree instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::unbalanced::UnbalancedTree;
    ///
    /// let mut tree = UnbalancedTree::new();
    /// tree.insert(2, "two");
    /// tree.insert(1, "one");
    /// tree.insert(3, "three");
    ///
    /// assert_eq!(tree.delete(&2), Some("two"));
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(3));
    /// assert_eq!(tree.delete(&2), None);
    /// ```
    pub fn delete(&mut self, key: &K) -> Option<V>
    where
        K: Ord,
    {
        let link = Self::link_to(&mut self.root, key);
        let mut target = link.take()?;
        self.len -= 1;

        match (target.left.take(), target.right.take()) {
            (None, None) => Some(target.value),
            (Some(child), None) | (None, Some(child)) => {
                *link = Some(child);
                Some(target.value)
            }
            (left, Some(right)) => {
                let (right, successor) = Node::detach_min(right);
                target.left = left;
                target.right = right;
                target.key = successor.key;
                let removed = mem::replace(&mut target.value, successor.value);
                *link = Some(target);
                Some(removed)
            }
        }
    }

    /// The link holding the node with the given key, or the empty link where it would go.
    fn link_to<'a>(mut link: &'a mut Link<K, V>, key: &K) -> &'a mut Link<K, V>
    where
        K: Ord,
    {
        loop {
            let ord = match link.as_ref() {
                Some(node) => key.cmp(&node.key),
                None => return link,
            };
            link = match (ord, link) {
                (Ordering::Less, Some(node)) => &mut node.left,
                (Ordering::Greater, Some(node)) => &mut node.right,
                (_, found) => return found,
            };
        }
    }
}

impl<K, V> Node<K, V> {
    fn new_boxed(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            left: None,
            right: None,
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

    /// Unlinks the leftmost node of the subtree rooted at `root`. Returns what is left of the
    /// subtree and the detached node.
    fn detach_min(mut root: Box<Self>) -> (Link<K, V>, Box<Self>) {
        let mut link = &mut root.left;
        while link.as_ref().map_or(false, |n| n.left.is_some()) {
            link = match link {
                Some(node) => &mut node.left,
                None => break,
            };
        }

        match link.take() {
            Some(mut min) => {
                *link = min.right.take();
                (Some(root), min)
            }
            // No left child: `root` itself is the minimum.
            None => {
                let rest = root.right.take();
                (rest, root)
            }
        }
    }
}

impl<K, V> TreeNode for Node<K, V> {
    type Key = K;
    type Value = V;

    fn key(&self) -> &K {
        Node::key(self)
    }

    fn value(&self) -> &V {
        Node::value(self)
    }

    fn left(&self) -> Option<&Self> {
        Node::left(self)
    }

    fn right(&self) -> Option<&Self> {
        Node::right(self)
    }
}
