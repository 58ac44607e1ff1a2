use thiserror::Error;

/// Failure while reading or writing a page element.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// The `sort_by` select has no option with this value.
    #[error("select has no option {0:?}")]
    MissingOption(String),

    /// The host document rejected an operation.
    #[error("dom operation failed: {0}")]
    Dom(String),
}
