//! Merkle inclusion proofs.

use semaphore_poseidon::field::{serde_fr, serde_fr_vec};
use semaphore_poseidon::{Fr, hash2};
use serde::{Deserialize, Serialize};

/// Everything an external verifier needs to replay a leaf's path to the root.
///
/// `path_indices[i]` is 0 when the node at level `i` is a left child and 1 when it is
/// a right child; `siblings[i]` is the node next to it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerkleProof {
    #[serde(with = "serde_fr")]
    pub root: Fr,
    #[serde(with = "serde_fr")]
    pub leaf: Fr,
    #[serde(with = "serde_fr_vec")]
    pub siblings: Vec<Fr>,
    pub path_indices: Vec<u8>,
}

impl MerkleProof {
    pub fn depth(&self) -> usize {
        self.siblings.len()
    }

    /// Fold the leaf up through the siblings.
    pub fn compute_root(&self) -> Fr {
        self.siblings
            .iter()
            .zip(&self.path_indices)
            .fold(self.leaf, |node, (sibling, bit)| {
                if *bit == 0 {
                    hash2(node, *sibling)
                } else {
                    hash2(*sibling, node)
                }
            })
    }

    /// True when the proof is well formed and leads to `root`.
    pub fn verify(&self) -> bool {
        self.siblings.len() == self.path_indices.len()
            && self.path_indices.iter().all(|b| *b <= 1)
            && self.compute_root() == self.root
    }
}
