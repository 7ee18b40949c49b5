use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeccakError {
    #[error("Invalid {what} length: expected {expected}, got {actual}")]
    InvalidLength { what: &'static str, expected: usize, actual: usize },
}
