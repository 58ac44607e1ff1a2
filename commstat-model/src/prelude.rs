pub use crate::error::{ModelError, Result as ModelResult};
pub use crate::fields::{CommunitySortField, PostSortField};
pub use crate::form::FormState;
pub use crate::history::{HistoryPoint, HistorySeries};
pub use crate::sort::{FieldState, SortDirection, SortKey};
