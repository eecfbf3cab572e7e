use thiserror::Error;

/// Errors reported by the Senet core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SenetError {
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    #[error("Invalid throw: {0} (expected 1-5)")]
    InvalidThrow(u8),

    #[error("Invalid search depth: {0} (must be >= 0)")]
    InvalidDepth(i64),

    #[error("Invalid tile index: {0} (expected 1-30)")]
    InvalidTile(u8),

    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    #[error("Invalid chance distribution: {0}")]
    InvalidDistribution(String),
}

/// Convenience Result type for Senet operations
pub type Result<T> = std::result::Result<T, SenetError>;
