//! Semaphore identities.
//!
//! An identity is a `(trapdoor, nullifier)` pair of private field elements. The public
//! commitment that goes into a group's Merkle tree is derived from them:
//!
//! ```text
//! secret     = Poseidon(nullifier, trapdoor)
//! commitment = Poseidon(secret)
//! ```

pub mod errors;
pub mod identity;

pub use errors::IdentityError;
pub use identity::Identity;
pub use semaphore_poseidon::Fr;
