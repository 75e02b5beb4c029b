use avl_bst::traversal::in_order;
use avl_bst::unbalanced::UnbalancedTree;
use quickcheck_macros::quickcheck;

use std::collections::{BTreeMap, HashSet};

use crate::{check_order, Op};

/// Applies a set of operations to a tree and a map.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in the map.
fn do_ops<K, V>(ops: &[Op<K, V>], bst: &mut UnbalancedTree<K, V>, map: &mut BTreeMap<K, V>)
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

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = UnbalancedTree::new();
    let mut map = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut map);
    map.keys().all(|key| tree.find(key) == map.get(key))
        && tree.len() == map.len()
        && in_order(tree.root()) == map.keys().collect::<Vec<_>>()
}

#[quickcheck]
fn keeps_search_tree_order(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = UnbalancedTree::new();
    let mut map = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut map);
    check_order(tree.root(), None, None) == Some(map.len())
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = UnbalancedTree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none())
}

#[quickcheck]
fn round_trip(xs: Vec<i8>, key: i8, value: i8) -> bool {
    let mut tree = UnbalancedTree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }

    tree.insert(key, value);
    let found = tree.search(&key).map(|n| *n.value()) == Some(value);
    tree.delete(&key);

    found && tree.search(&key).is_none()
}

#[test]
fn ascending_height_is_linear() {
    for n in [1usize, 10, 100, 1000] {
        let mut tree = UnbalancedTree::new();
        for key in 1..=n {
            tree.insert(key, ());
        }

        assert_eq!(tree.height(), n);
    }
}
