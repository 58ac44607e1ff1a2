//! Trait surfaces through which the sort control reads and writes the page.
//!
//! The control never touches a document directly: each sort icon is reached
//! through [`SortIconSurface`] and the hidden filter form through
//! [`FilterFormSurface`]. The browser binding implements both over `web_sys`
//! elements, and [`memory`] provides plain in-process implementations.

pub mod error;
pub mod form;
pub mod icon;
pub mod memory;

pub use error::SurfaceError;
pub use form::FilterFormSurface;
pub use icon::SortIconSurface;

/// Frequently used surface traits for UI crates.
pub mod prelude {
    pub use super::error::SurfaceError;
    pub use super::form::{FilterFormSurface, FilterFormSurfaceExt};
    pub use super::icon::SortIconSurface;
    pub use super::memory::{MemoryFilterForm, MemorySortIcon};
}
