//! Core data model definitions shared across commstat crates.
#![allow(missing_docs)]

pub mod error;
pub mod fields;
pub mod form;
pub mod history;
pub mod prelude;
pub mod sort;

pub use error::{ModelError, Result as ModelResult};
pub use fields::{CommunitySortField, PostSortField};
pub use form::FormState;
pub use history::{HistoryPoint, HistorySeries};
pub use sort::{FieldState, SortDirection, SortKey};
