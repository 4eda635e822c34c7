//! End-to-end membership flows: identities in, proofs out.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use semaphore_group::{Fr, Group, GroupData, GroupError, GroupId, hash_group_id};
use semaphore_identity::Identity;
use semaphore_poseidon::hash2;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Root of a depth-`depth` tree whose only non-zero leaf is `leaf` at index 0.
fn single_leaf_root(leaf: Fr, zero: Fr, depth: usize) -> Fr {
    let mut node = leaf;
    let mut empty = zero;
    for _ in 0..depth {
        node = hash2(node, empty);
        empty = hash2(empty, empty);
    }
    node
}

fn empty_root(zero: Fr, depth: usize) -> Fr {
    (0..depth).fold(zero, |z, _| hash2(z, z))
}

#[test]
fn insert_update_remove_scenario() {
    init_tracing();

    let mut group = Group::new(1u64, 16).unwrap();
    let z = hash_group_id(&GroupId::from(1u64));
    let a = Identity::from_message("alice").unwrap().commitment();
    let b = Identity::from_message("bob").unwrap().commitment();

    assert_eq!(group.root(), empty_root(z, 16));

    group.add_member(a).unwrap();
    assert_eq!(group.root(), single_leaf_root(a, z, 16));

    group.update_member(0, b).unwrap();
    assert_eq!(group.root(), single_leaf_root(b, z, 16));

    group.remove_member(0).unwrap();
    assert_eq!(group.root(), empty_root(z, 16));
}

#[test]
fn identities_prove_membership() {
    init_tracing();

    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    let identities: Vec<Identity> = (0..5).map(|_| Identity::from_rng(&mut rng)).collect();

    let mut group = Group::new(GroupId::parse("0x2a").unwrap(), 20).unwrap();
    group
        .add_members(identities.iter().map(Identity::commitment))
        .unwrap();

    for (expected_index, identity) in identities.iter().enumerate() {
        let index = group.index_of(&identity.commitment()).unwrap();
        assert_eq!(index, expected_index);

        let proof = group.generate_merkle_proof(index).unwrap();
        assert_eq!(proof.leaf, identity.commitment());
        assert_eq!(proof.siblings.len(), 20);
        assert!(proof.path_indices.iter().all(|b| *b <= 1));
        assert!(group.verify_merkle_proof(&proof));
    }

    let outsider = Identity::from_rng(&mut rng);
    assert_eq!(group.index_of(&outsider.commitment()), None);
}

#[test]
fn same_members_different_ids_differ() {
    let members = vec![Fr::from(1u64), Fr::from(2u64)];
    let a = Group::with_members(1u64, 16, members.clone()).unwrap();
    let b = Group::with_members(2u64, 16, members).unwrap();
    assert_ne!(a.root(), b.root());
}

#[test]
fn group_depth_bounds() {
    assert!(Group::new(1u64, 16).is_ok());
    assert!(Group::new(1u64, 32).is_ok());

    let err = Group::new(1u64, 15).unwrap_err();
    assert!(matches!(err, GroupError::InvalidTreeDepth { depth: 15, .. }));
    assert_eq!(err.to_string(), "the tree depth must be between 16 and 32, got 15");

    assert!(matches!(
        Group::new(1u64, 33),
        Err(GroupError::InvalidTreeDepth { depth: 33, .. })
    ));
}

#[test]
fn failed_update_leaves_group_usable() {
    let mut group = Group::new(3u64, 16).unwrap();
    group.add_member(Fr::from(1u64)).unwrap();
    let root = group.root();

    assert!(matches!(
        group.update_member(5, Fr::from(9u64)),
        Err(GroupError::IndexOutOfRange { index: 5, len: 1 })
    ));
    assert_eq!(group.root(), root);

    group.add_members((2..5u64).map(Fr::from)).unwrap();
    assert_eq!(group.len(), 4);
}

#[test]
fn rebuilds_group_from_indexer_json() {
    init_tracing();

    let source = Group::with_members(
        "42".parse::<GroupId>().unwrap(),
        16,
        vec![Fr::from(11u64), Fr::from(12u64), Fr::from(13u64)],
    )
    .unwrap();

    let json = serde_json::json!({
        "id": "42",
        "depth": "16",
        "members": ["11", "0xc", "13"],
        "root": semaphore_poseidon::field::to_decimal(&source.root()),
        "admin": "0x0000000000000000000000000000000000000001"
    });

    let data: GroupData = serde_json::from_value(json).unwrap();
    let group = Group::from_data(&data).unwrap();

    assert_eq!(group.root(), source.root());
    assert_eq!(group.id(), source.id());
    assert_eq!(group.members(), source.members());
}
