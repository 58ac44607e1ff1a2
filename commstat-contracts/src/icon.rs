use crate::error::SurfaceError;

/// A clickable sort icon whose look is driven by its class list.
pub trait SortIconSurface {
    fn has_class(&self, class: &str) -> bool;

    /// Adds `class` when `enabled`, removes it otherwise. Idempotent.
    fn set_class(
        &mut self,
        class: &str,
        enabled: bool,
    ) -> Result<(), SurfaceError>;

    /// Current classes in document order; used for diagnostics and tests.
    fn classes(&self) -> Vec<String>;
}
