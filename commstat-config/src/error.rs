use commstat_model::ModelError;
use thiserror::Error;

/// Validation failures for a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigLoadError {
    #[error("configuration value `{0}` must not be empty")]
    EmptyValue(&'static str),

    #[error("icon class {0:?} is used for more than one marker")]
    DuplicateClass(String),

    #[error("sort widget declares no fields")]
    NoFields,

    #[error("sort field {0:?} is declared more than once")]
    DuplicateField(String),

    #[error("sort field {field:?} has an empty widget id")]
    EmptyWidgetId { field: String },

    #[error("invalid configuration json: {0}")]
    InvalidJson(String),

    #[error(transparent)]
    UnknownField(#[from] ModelError),
}
