use pbst::persistent::Tree;
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// the tree agrees with the set at every step.
fn do_ops<T>(ops: &[Op<T>], mut tree: Tree<T>, set: &mut BTreeSet<T>) -> Option<Tree<T>>
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                tree = tree.insert(x.clone());
                set.insert(x.clone());
            }
            Op::Discard(x) => {
                let _new_tree = tree.insert(x.clone());
            }
            Op::Contains(x) => {
                if tree.contains(x) != set.contains(x) {
                    return None;
                }
            }
            Op::Iter => {
                if !tree.inorder().eq(set.iter()) {
                    return None;
                }
            }
        }
    }

    Some(tree)
}

/// Builds a tree by inserting every value of `xs` in order.
fn build(xs: &[i8]) -> Tree<i8> {
    xs.iter().fold(Tree::new(), |tree, x| tree.insert(*x))
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut set = BTreeSet::new();

    match do_ops(&ops, Tree::new(), &mut set) {
        Some(tree) => tree.size() == set.len() && tree.inorder().eq(set.iter()),
        None => false,
    }
}

#[quickcheck]
fn size_counts_distinct(xs: Vec<i8>) -> bool {
    let distinct: BTreeSet<_> = xs.iter().collect();

    build(&xs).size() == distinct.len()
}

#[quickcheck]
fn inorder_strictly_ascending(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let values: Vec<_> = tree.inorder().collect();

    values.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn insert_then_contains(xs: Vec<i8>, x: i8) -> bool {
    build(&xs).insert(x).contains(&x)
}

#[quickcheck]
fn duplicate_insert_is_noop(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| {
        let same = tree.insert(*x);
        Tree::ptr_eq(&tree, &same)
            && same.size() == tree.size()
            && same.inorder().eq(tree.inorder())
    })
}

#[quickcheck]
fn display_ignores_insertion_order(xs: Vec<i8>) -> bool {
    let mut reversed = xs.clone();
    reversed.reverse();
    let sorted: BTreeSet<_> = xs.iter().collect();
    let expected = format!(
        "[{}]",
        sorted
            .iter()
            .map(|x| x.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    build(&xs).to_string() == expected && build(&reversed).to_string() == expected
}

#[quickcheck]
fn older_version_unchanged(xs: Vec<i8>, x: i8) -> bool {
    let tree = build(&xs);
    let before: Vec<_> = tree.inorder().copied().collect();
    let had_x = tree.contains(&x);

    let new_tree = tree.insert(x);

    tree.inorder().copied().eq(before.iter().copied())
        && tree.contains(&x) == had_x
        && new_tree.contains(&x)
        && new_tree.size() == before.len() + usize::from(!had_x)
}

#[quickcheck]
fn cached_size_matches_inorder(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    tree.size() == tree.inorder().count() && tree.inorder().len() == tree.size()
}
