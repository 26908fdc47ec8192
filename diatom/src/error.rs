use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiatomError {
    #[error("invalid {name} spin {value}, spins have to be non-negative multiples of 1/2")]
    InvalidSpin { name: &'static str, value: f64 },

    #[error("{what} has dimension {found}, expected {expected}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("state index {index} is out of range for {len} states")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("adiabatic sorting needs eigenvectors, run the sweep with states")]
    MissingStates,

    #[error("could not diagonalize hamiltonian: {0}")]
    Diagonalization(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DiatomError>;
