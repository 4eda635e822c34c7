//! Semaphore groups: an incremental Merkle tree of identity commitments.
//!
//! This crate contains:
//! - `IncrementalMerkleTree`, a fixed-depth binary Poseidon tree with O(depth) updates.
//! - `MerkleProof`, inclusion proofs an external verifier can replay.
//! - `Group`, which binds a tree to a group id (the id seeds the tree's zero leaf).
//! - Plain data shapes for exchanging groups with ledger/indexer collaborators.

pub mod config;
pub mod data;
pub mod errors;
pub mod group;
pub mod id;
pub mod proof;
pub mod tree;

pub use config::GroupConfig;
pub use data::{GroupData, VerifiedProof, parse_member};
pub use errors::GroupError;
pub use group::Group;
pub use id::{GroupId, hash_bytes32, hash_group_id};
pub use proof::MerkleProof;
pub use semaphore_poseidon::Fr;
pub use tree::IncrementalMerkleTree;
