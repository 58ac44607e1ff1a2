use thiserror::Error;

/// Errors produced by model constructors and parsing routines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown sort field: {0:?}")]
    UnknownSortField(String),

    #[error("invalid history point: {0}")]
    InvalidHistoryPoint(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
