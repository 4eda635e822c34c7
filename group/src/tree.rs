//! Incremental binary Merkle tree over BN254 field elements.
//!
//! Nodes are kept per level, leaves at level 0. A level only stores nodes up to its
//! rightmost populated position; anything to the right is implicitly the empty-subtree
//! hash for that level (`zeroes[level]`). Changing a leaf rehashes exactly `depth`
//! nodes.

use crate::config::MAX_TREE_DEPTH;
use crate::{GroupError, MerkleProof};
use semaphore_poseidon::field::to_decimal;
use semaphore_poseidon::{Fr, hash2};
use std::fmt;
use tracing::debug;

/// Smallest depth a bare tree accepts. Groups apply their own, stricter bound.
pub const MIN_DEPTH: usize = 1;

#[derive(Clone, PartialEq, Eq)]
pub struct IncrementalMerkleTree {
    depth: usize,
    /// `zeroes[0]` is the zero leaf, `zeroes[i + 1] = hash2(zeroes[i], zeroes[i])`.
    zeroes: Vec<Fr>,
    /// `nodes[0]` holds the leaves; `nodes.len() == depth`.
    nodes: Vec<Vec<Fr>>,
    root: Fr,
}

impl IncrementalMerkleTree {
    /// An empty tree whose root is the empty-subtree hash at `depth`.
    pub fn new(depth: usize, zero_value: Fr) -> Result<Self, GroupError> {
        Self::with_leaves(depth, zero_value, Vec::new())
    }

    /// Build a tree from `leaves` in one pass, hashing each level once.
    pub fn with_leaves(depth: usize, zero_value: Fr, leaves: Vec<Fr>) -> Result<Self, GroupError> {
        check_depth(depth)?;

        let capacity = capacity_of(depth);
        if leaves.len() as u64 > capacity {
            return Err(GroupError::CapacityExceeded { capacity });
        }

        let zeroes = zero_hashes(depth, zero_value);
        let mut nodes = Vec::with_capacity(depth);
        let mut current = leaves;

        for zero in &zeroes[..depth] {
            let parents = hash_level(&current, *zero);
            nodes.push(current);
            current = parents;
        }

        let root = current.first().copied().unwrap_or(zeroes[depth]);

        Ok(Self {
            depth,
            zeroes,
            nodes,
            root,
        })
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn root(&self) -> Fr {
        self.root
    }

    pub fn zero_value(&self) -> Fr {
        self.zeroes[0]
    }

    /// Empty-subtree hash per level, from the zero leaf (index 0) up to the empty root.
    pub fn zeroes(&self) -> &[Fr] {
        &self.zeroes
    }

    pub fn leaves(&self) -> &[Fr] {
        &self.nodes[0]
    }

    /// Number of occupied slots, removed leaves included.
    pub fn len(&self) -> usize {
        self.nodes[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes[0].is_empty()
    }

    /// `2^depth`.
    pub fn capacity(&self) -> u64 {
        capacity_of(self.depth)
    }

    /// Append `leaf` and return its index.
    pub fn insert(&mut self, leaf: Fr) -> Result<usize, GroupError> {
        let index = self.len();
        if index as u64 >= self.capacity() {
            return Err(GroupError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }

        self.update_path(index, leaf);
        debug!(index, root = %to_decimal(&self.root), "leaf inserted");
        Ok(index)
    }

    /// Replace the leaf at `index`.
    pub fn update(&mut self, index: usize, leaf: Fr) -> Result<(), GroupError> {
        self.check_index(index)?;
        self.update_path(index, leaf);
        debug!(index, root = %to_decimal(&self.root), "leaf updated");
        Ok(())
    }

    /// Overwrite the leaf at `index` with the zero value. The slot stays allocated, so
    /// later indices do not move.
    pub fn remove(&mut self, index: usize) -> Result<(), GroupError> {
        self.update(index, self.zero_value())
    }

    /// Index of the first leaf equal to `leaf`.
    pub fn index_of(&self, leaf: &Fr) -> Option<usize> {
        self.nodes[0].iter().position(|l| l == leaf)
    }

    /// Inclusion proof for the leaf at `index`: one sibling per level, bottom up.
    pub fn generate_proof(&self, index: usize) -> Result<MerkleProof, GroupError> {
        self.check_index(index)?;

        let mut siblings = Vec::with_capacity(self.depth);
        let mut path_indices = Vec::with_capacity(self.depth);
        let mut position = index;

        for level in 0..self.depth {
            path_indices.push((position & 1) as u8);
            siblings.push(self.node_or_zero(level, position ^ 1));
            position >>= 1;
        }

        Ok(MerkleProof {
            root: self.root,
            leaf: self.nodes[0][index],
            siblings,
            path_indices,
        })
    }

    /// Root of a tree holding `leaves`, computed from nothing but the arguments.
    pub fn recompute_root(depth: usize, zero_value: Fr, leaves: &[Fr]) -> Result<Fr, GroupError> {
        Self::with_leaves(depth, zero_value, leaves.to_vec()).map(|t| t.root)
    }

    fn check_index(&self, index: usize) -> Result<(), GroupError> {
        if index >= self.len() {
            return Err(GroupError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(())
    }

    fn node_or_zero(&self, level: usize, position: usize) -> Fr {
        self.nodes[level]
            .get(position)
            .copied()
            .unwrap_or(self.zeroes[level])
    }

    /// Write `leaf` at `index` and rehash its path to the root.
    ///
    /// `index` is either an existing slot or exactly `len()`; at every level the
    /// touched position is then also either existing or the next free one.
    fn update_path(&mut self, index: usize, leaf: Fr) {
        let mut node = leaf;
        let mut position = index;

        for level in 0..self.depth {
            let sibling = self.node_or_zero(level, position ^ 1);

            let row = &mut self.nodes[level];
            if position == row.len() {
                row.push(node);
            } else {
                row[position] = node;
            }

            node = if position & 1 == 0 {
                hash2(node, sibling)
            } else {
                hash2(sibling, node)
            };
            position >>= 1;
        }

        self.root = node;
    }
}

impl fmt::Debug for IncrementalMerkleTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IncrementalMerkleTree")
            .field("depth", &self.depth)
            .field("len", &self.len())
            .field("root", &to_decimal(&self.root))
            .finish()
    }
}

fn check_depth(depth: usize) -> Result<(), GroupError> {
    if !(MIN_DEPTH..=MAX_TREE_DEPTH).contains(&depth) {
        return Err(GroupError::InvalidTreeDepth {
            depth,
            min: MIN_DEPTH,
            max: MAX_TREE_DEPTH,
        });
    }
    Ok(())
}

fn capacity_of(depth: usize) -> u64 {
    1u64 << depth
}

fn zero_hashes(depth: usize, zero_value: Fr) -> Vec<Fr> {
    let mut zeroes = Vec::with_capacity(depth + 1);
    zeroes.push(zero_value);
    for level in 0..depth {
        zeroes.push(hash2(zeroes[level], zeroes[level]));
    }
    zeroes
}

/// Hash adjacent pairs; an odd trailing node is paired with the level's zero.
fn hash_level(nodes: &[Fr], zero: Fr) -> Vec<Fr> {
    nodes
        .chunks(2)
        .map(|pair| hash2(pair[0], pair.get(1).copied().unwrap_or(zero)))
        .collect()
}
