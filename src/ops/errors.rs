use thiserror::Error;

/// Errors that can occur in the low-level sequence operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpsError {
    #[error("Index out of bounds: index={index}, length={length}")]
    InvalidIndex { index: usize, length: usize },
}
