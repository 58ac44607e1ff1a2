use crate::error::{ModelError, Result};
use crate::form::FormState;
use std::fmt;
use std::hash::Hash;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sort order direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortDirection {
    /// First activation of a field always sorts ascending.
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Direction encoded by the filter form's `inverse` checkbox.
    pub fn from_inverse(inverse: bool) -> Self {
        if inverse {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }

    pub fn is_inverse(&self) -> bool {
        matches!(self, SortDirection::Descending)
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "ascending"),
            SortDirection::Descending => write!(f, "descending"),
        }
    }
}

/// Whether a sortable field currently drives the listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FieldState {
    #[default]
    Disabled,
    Enabled(SortDirection),
}

impl FieldState {
    pub fn is_enabled(&self) -> bool {
        matches!(self, FieldState::Enabled(_))
    }

    pub fn direction(&self) -> Option<SortDirection> {
        match self {
            FieldState::Disabled => None,
            FieldState::Enabled(direction) => Some(*direction),
        }
    }
}

impl fmt::Display for FieldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldState::Disabled => write!(f, "disabled"),
            FieldState::Enabled(direction) => write!(f, "enabled({direction})"),
        }
    }
}

/// A closed set of sortable columns for one listing page.
///
/// Implementors are plain fieldless enums; the string id is the value the
/// server expects in the `sort_by` form field.
pub trait SortKey: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Every key in display order.
    fn all() -> &'static [Self];

    /// Form/query identifier, e.g. `views_per_post`.
    fn as_str(&self) -> &'static str;

    /// Human readable column name.
    fn label(&self) -> &'static str;

    /// Sort the server applies when a request carries no `sort_by`.
    fn default_sort() -> FormState<Self>;

    fn parse(id: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|key| key.as_str() == id)
            .ok_or_else(|| ModelError::UnknownSortField(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_flag_maps_to_descending() {
        assert_eq!(SortDirection::from_inverse(true), SortDirection::Descending);
        assert_eq!(SortDirection::from_inverse(false), SortDirection::Ascending);
        assert!(SortDirection::Descending.is_inverse());
        assert!(!SortDirection::Ascending.is_inverse());
    }

    #[test]
    fn toggling_flips_direction() {
        assert_eq!(
            SortDirection::Ascending.toggled(),
            SortDirection::Descending
        );
        assert_eq!(
            SortDirection::Descending.toggled().toggled(),
            SortDirection::Descending
        );
    }

    #[test]
    fn field_state_exposes_direction_only_when_enabled() {
        assert_eq!(FieldState::Disabled.direction(), None);
        assert_eq!(
            FieldState::Enabled(SortDirection::Descending).direction(),
            Some(SortDirection::Descending)
        );
        assert!(!FieldState::default().is_enabled());
    }
}
