use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HashError {
    #[error("unsupported poseidon arity: {0} inputs")]
    InvalidArity(usize),

    #[error("invalid field element: {0}")]
    InvalidFieldElement(String),
}
