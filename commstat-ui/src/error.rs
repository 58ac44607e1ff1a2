use commstat_config::ConfigLoadError;
use commstat_contracts::SurfaceError;
use commstat_model::ModelError;
use thiserror::Error;

/// Failures of the sort control.
///
/// Everything except [`SortControlError::Surface`] and
/// [`SortControlError::FormOutOfSync`] is raised while wiring the control to a
/// page, so a broken page fails at load instead of half-working.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortControlError {
    #[error("sort control has no fields")]
    NoFields,

    #[error("sort field {0:?} is registered more than once")]
    DuplicateField(&'static str),

    #[error("sort field {0:?} has no option in the sort select")]
    MissingOption(&'static str),

    #[error("no icon for sort field {field:?} in widget {widget_id:?}")]
    MissingIcon {
        field: &'static str,
        widget_id: String,
    },

    #[error("sort select has no selected option")]
    NoSelection,

    #[error("sort select holds an invalid value: {0}")]
    InvalidSelection(#[from] ModelError),

    #[error("selected sort field {0:?} has no icon on this page")]
    UnwiredSelection(&'static str),

    #[error("sort field {0:?} is not part of this control")]
    UnknownField(&'static str),

    #[error("filter form out of sync: wrote {expected}, read back {found}")]
    FormOutOfSync { expected: String, found: String },

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Config(#[from] ConfigLoadError),
}

pub type Result<T> = std::result::Result<T, SortControlError>;
