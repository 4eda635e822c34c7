use semaphore_poseidon::HashError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GroupError {
    #[error("the tree depth must be between {min} and {max}, got {depth}")]
    InvalidTreeDepth { depth: usize, min: usize, max: usize },

    #[error("the tree is full: capacity is {capacity} leaves")]
    CapacityExceeded { capacity: u64 },

    #[error("the leaf at index {index} does not exist in this tree ({len} leaves)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("parameter '{name}' is not a {expected}")]
    InvalidParameterType {
        name: &'static str,
        expected: &'static str,
    },

    #[error("invalid group id: {0}")]
    InvalidGroupId(String),

    #[error("{field} mismatch: expected {expected}, computed {actual}")]
    RootMismatch {
        field: &'static str,
        expected: String,
        actual: String,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Field(#[from] HashError),
}
