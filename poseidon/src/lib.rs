//! Poseidon permutation hash over the BN254 scalar field.
//!
//! This crate contains:
//! - Field arithmetic helpers and the string/serde encodings of field elements.
//! - The circomlib parameter sets (round constants + MDS matrices) for arities 1 and 2.
//! - The permutation itself and the `hash1` / `hash2` entry points used by identities and trees.

pub mod constants;
pub mod errors;
pub mod field;
pub mod hash;
mod tables;

pub use ark_bn254::Fr;
pub use errors::HashError;
pub use hash::{hash1, hash2, poseidon};
