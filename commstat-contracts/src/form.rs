use crate::error::SurfaceError;
use commstat_model::{FormState, ModelError, SortKey};

/// The hidden `filter` form: a `sort_by` select and an `inverse` checkbox.
pub trait FilterFormSurface {
    /// Values of every `sort_by` option in document order.
    fn option_values(&self) -> Vec<String>;

    /// Value of the first selected `sort_by` option.
    fn selected_value(&self) -> Option<String>;

    /// Selects the option carrying `value` and deselects every other one.
    fn select_value(&mut self, value: &str) -> Result<(), SurfaceError>;

    fn inverse(&self) -> bool;

    fn set_inverse(&mut self, checked: bool) -> Result<(), SurfaceError>;
}

/// Typed helpers on top of the raw string surface.
pub trait FilterFormSurfaceExt: FilterFormSurface {
    fn has_option(&self, value: &str) -> bool {
        self.option_values().iter().any(|option| option == value)
    }

    /// Reads the current selection, `Ok(None)` when nothing is selected.
    fn read_state<K: SortKey>(
        &self,
    ) -> Result<Option<FormState<K>>, ModelError> {
        let Some(value) = self.selected_value() else {
            return Ok(None);
        };
        let sort_by = K::parse(&value)?;
        Ok(Some(FormState::new(sort_by, self.inverse())))
    }

    fn write_state<K: SortKey>(
        &mut self,
        state: FormState<K>,
    ) -> Result<(), SurfaceError> {
        self.select_value(state.sort_by.as_str())?;
        self.set_inverse(state.inverse)
    }
}

impl<T: FilterFormSurface + ?Sized> FilterFormSurfaceExt for T {}
