//! Property tests: incremental maintenance never drifts from a from-scratch rebuild.

use proptest::prelude::*;
use semaphore_group::{Fr, GroupError, IncrementalMerkleTree};

const DEPTH: usize = 4;
const ZERO_LEAF: u64 = u64::MAX;

#[derive(Clone, Debug)]
enum Op {
    Insert(u64),
    Update(usize, u64),
    Remove(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<u64>().prop_map(Op::Insert),
        2 => (any::<usize>(), any::<u64>()).prop_map(|(i, v)| Op::Update(i, v)),
        1 => any::<usize>().prop_map(Op::Remove),
    ]
}

fn apply(tree: &mut IncrementalMerkleTree, op: &Op) -> Result<(), GroupError> {
    // Map arbitrary indices onto occupied slots, plus one past the end.
    let slots = tree.len() + 1;
    match *op {
        Op::Insert(v) => tree.insert(Fr::from(v)).map(|_| ()),
        Op::Update(i, v) => tree.update(i % slots, Fr::from(v)),
        Op::Remove(i) => tree.remove(i % slots),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn incremental_root_matches_rebuild(
        zero in any::<u64>(),
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let zero = Fr::from(zero);
        let mut tree = IncrementalMerkleTree::new(DEPTH, zero).unwrap();

        for op in &ops {
            let before = tree.clone();
            match apply(&mut tree, op) {
                Ok(()) => {}
                Err(GroupError::CapacityExceeded { .. }) | Err(GroupError::IndexOutOfRange { .. }) => {
                    // Failed operations leave the tree untouched.
                    prop_assert_eq!(&tree, &before);
                }
                Err(e) => return Err(TestCaseError::fail(e.to_string())),
            }

            let rebuilt = IncrementalMerkleTree::recompute_root(DEPTH, zero, tree.leaves()).unwrap();
            prop_assert_eq!(tree.root(), rebuilt);
        }
    }

    #[test]
    fn every_occupied_leaf_has_a_valid_proof(values in prop::collection::vec(any::<u64>(), 1..16)) {
        let leaves: Vec<Fr> = values.into_iter().map(Fr::from).collect();
        let tree = IncrementalMerkleTree::with_leaves(DEPTH, Fr::from(0u64), leaves).unwrap();

        for index in 0..tree.len() {
            let proof = tree.generate_proof(index).unwrap();
            prop_assert_eq!(proof.root, tree.root());
            prop_assert!(proof.verify());
        }
    }

    #[test]
    fn index_of_sees_fresh_inserts(
        values in prop::collection::hash_set(
            any::<u64>().prop_filter("the zero leaf is not fresh", |v| *v != ZERO_LEAF),
            1..16,
        ),
    ) {
        let mut tree = IncrementalMerkleTree::new(DEPTH, Fr::from(ZERO_LEAF)).unwrap();

        for v in values {
            let leaf = Fr::from(v);
            prop_assert_eq!(tree.index_of(&leaf), None);
            let index = tree.insert(leaf).unwrap();
            prop_assert_eq!(tree.index_of(&leaf), Some(index));
        }
    }
}
