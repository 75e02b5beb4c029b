mod balanced;
mod unbalanced;

use quickcheck::{Arbitrary, Gen};

use avl_bst::node::TreeNode;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K, V> {
    /// Insert the K, V into the data structure
    Insert(K, V),
    /// Remove the K from the data structure
    Remove(K),
}

impl<K, V> Arbitrary for Op<K, V>
where
    K: Arbitrary,
    V: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1]).unwrap() {
            0 => Op::Insert(K::arbitrary(g), V::arbitrary(g)),
            1 => Op::Remove(K::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}

/// Checks that every key in the subtree under `node` lies strictly between `lower` and `upper`,
/// recursively. Returns how many nodes were checked.
pub(crate) fn check_order<N>(
    node: Option<&N>,
    lower: Option<&N::Key>,
    upper: Option<&N::Key>,
) -> Option<usize>
where
    N: TreeNode,
    N::Key: Ord,
{
    match node {
        None => Some(0),
        Some(n) => {
            let key = n.key();
            if lower.map_or(false, |l| key <= l) || upper.map_or(false, |u| key >= u) {
                return None;
            }
            let left = check_order(n.left(), lower, Some(key))?;
            let right = check_order(n.right(), Some(key), upper)?;
            Some(left + right + 1)
        }
    }
}
