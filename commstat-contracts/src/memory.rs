//! In-process surfaces backed by plain collections.
//!
//! These mirror how a browser treats a class list and a single-choice select,
//! so the sort control can run headless (tests, server-side previews).

use crate::error::SurfaceError;
use crate::form::FilterFormSurface;
use crate::icon::SortIconSurface;

/// Class list of one sort icon.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySortIcon {
    classes: Vec<String>,
}

impl MemorySortIcon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Icon as rendered by the server, e.g. `["filter__sorting-icon"]`.
    pub fn with_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut icon = Self::default();
        for class in classes {
            let class = class.into();
            if !icon.classes.contains(&class) {
                icon.classes.push(class);
            }
        }
        icon
    }
}

impl SortIconSurface for MemorySortIcon {
    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|existing| existing == class)
    }

    fn set_class(
        &mut self,
        class: &str,
        enabled: bool,
    ) -> Result<(), SurfaceError> {
        if enabled {
            if !self.has_class(class) {
                self.classes.push(class.to_string());
            }
        } else {
            self.classes.retain(|existing| existing != class);
        }
        Ok(())
    }

    fn classes(&self) -> Vec<String> {
        self.classes.clone()
    }
}

/// A `sort_by` select with single selection plus the `inverse` checkbox.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryFilterForm {
    options: Vec<String>,
    selected: Option<usize>,
    inverse: bool,
}

impl MemoryFilterForm {
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            selected: None,
            inverse: false,
        }
    }

    /// Form as rendered by the server with `selected` pre-chosen.
    pub fn with_selection(
        mut self,
        selected: &str,
        inverse: bool,
    ) -> Result<Self, SurfaceError> {
        self.select_value(selected)?;
        self.inverse = inverse;
        Ok(self)
    }
}

impl FilterFormSurface for MemoryFilterForm {
    fn option_values(&self) -> Vec<String> {
        self.options.clone()
    }

    fn selected_value(&self) -> Option<String> {
        self.selected.map(|index| self.options[index].clone())
    }

    fn select_value(&mut self, value: &str) -> Result<(), SurfaceError> {
        let index = self
            .options
            .iter()
            .position(|option| option == value)
            .ok_or_else(|| {
                log::warn!("filter form has no sort option {value:?}");
                SurfaceError::MissingOption(value.to_string())
            })?;
        self.selected = Some(index);
        Ok(())
    }

    fn inverse(&self) -> bool {
        self.inverse
    }

    fn set_inverse(&mut self, checked: bool) -> Result<(), SurfaceError> {
        self.inverse = checked;
        Ok(())
    }
}
