use avl_bst::avl::{AvlNode, BalancedTree};
use avl_bst::traversal::{breadth_first, depth_first, in_order};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeMap, HashSet};

use crate::{check_order, Op};

/// Applies a set of operations to a tree and a map.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in the map.
fn do_ops<K, V>(ops: &[Op<K, V>], bst: &mut BalancedTree<K, V>, map: &mut BTreeMap<K, V>)
where
    K: Clone + Ord,
    V: Clone,
{
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                bst.insert(k.clone(), v.clone());
                map.insert(k.clone(), v.clone());
            }
            Op::Remove(k) => {
                bst.delete(k);
                map.remove(k);
            }
        }
    }
}

/// The real height of the subtree, checking each node's cached height and balance on the way.
fn checked_height<K, V>(node: Option<&AvlNode<K, V>>) -> Option<usize> {
    match node {
        None => Some(0),
        Some(n) => {
            let left = checked_height(n.left())?;
            let right = checked_height(n.right())?;
            let balanced =
                right as isize - left as isize == n.balance() && n.balance().abs() <= 1;
            let height = left.max(right) + 1;
            if balanced && n.height() == height {
                Some(height)
            } else {
                None
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = BalancedTree::new();
    let mut map = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut map);
    map.keys().all(|key| tree.find(key) == map.get(key))
        && tree.len() == map.len()
        && in_order(tree.root()) == map.keys().collect::<Vec<_>>()
}

#[quickcheck]
fn stays_balanced_after_every_operation(ops: Vec<Op<i16, ()>>) -> bool {
    let mut tree = BalancedTree::new();

    ops.iter().all(|op| {
        match op {
            Op::Insert(k, v) => {
                tree.insert(*k, *v);
            }
            Op::Remove(k) => {
                tree.delete(k);
            }
        }
        tree.is_balanced() && checked_height(tree.root()).is_some()
    })
}

#[quickcheck]
fn keeps_search_tree_order(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = BalancedTree::new();
    let mut map = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut map);
    check_order(tree.root(), None, None) == Some(map.len())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = BalancedTree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }

    xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = BalancedTree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = BalancedTree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
        && tree.is_balanced()
}

#[quickcheck]
fn duplicate_insert_keeps_shape(xs: Vec<i8>, key: i8, first: u8, second: u8) -> bool {
    let mut tree = BalancedTree::new();
    for x in &xs {
        tree.insert(*x, 0u8);
    }
    tree.insert(key, first);
    let shape = breadth_first(tree.root()).into_iter().copied().collect::<Vec<_>>();
    let height = tree.height();

    tree.insert(key, second);

    tree.find(&key) == Some(&second)
        && tree.height() == height
        && breadth_first(tree.root()).into_iter().copied().collect::<Vec<_>>() == shape
}

#[quickcheck]
fn round_trip(xs: Vec<i8>, key: i8, value: i8) -> bool {
    let mut tree = BalancedTree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }

    tree.insert(key, value);
    let found = tree.search(&key).map(|n| *n.value()) == Some(value);
    tree.delete(&key);

    found && tree.search(&key).is_none()
}

#[quickcheck]
fn traversals_visit_every_key(xs: Vec<i8>) -> bool {
    let mut tree = BalancedTree::new();
    for x in &xs {
        tree.insert(*x, ());
    }

    let mut dfs = depth_first(tree.root());
    let mut bfs = breadth_first(tree.root());
    dfs.sort();
    bfs.sort();
    let sorted = in_order(tree.root());

    dfs == sorted && bfs == sorted && sorted.windows(2).all(|w| w[0] < w[1])
}

#[test]
fn ascending_height_bound() {
    for n in [1usize, 3, 10, 100, 1000, 10_000] {
        let mut tree = BalancedTree::new();
        for key in 1..=n {
            tree.insert(key, ());
        }

        let bound = ((n + 1) as f64).log2().ceil() as usize + 1;
        assert!(tree.height() <= bound, "n = {}: {} > {}", n, tree.height(), bound);
    }
}
