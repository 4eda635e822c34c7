use semaphore_poseidon::HashError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("parameter '{name}' is not a {expected}")]
    InvalidParameterType {
        name: &'static str,
        expected: &'static str,
    },

    #[error("invalid identity export: {0}")]
    InvalidExport(String),

    #[error("invalid {name}: {source}")]
    InvalidComponent {
        name: &'static str,
        #[source]
        source: HashError,
    },
}
