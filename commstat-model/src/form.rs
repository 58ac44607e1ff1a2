use crate::sort::{FieldState, SortDirection, SortKey};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sort selection carried by the page's `filter` form: the `sort_by` option
/// and the `inverse` checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormState<K> {
    pub sort_by: K,
    pub inverse: bool,
}

impl<K: SortKey> FormState<K> {
    pub fn new(sort_by: K, inverse: bool) -> Self {
        Self { sort_by, inverse }
    }

    pub fn from_active(sort_by: K, direction: SortDirection) -> Self {
        Self {
            sort_by,
            inverse: direction.is_inverse(),
        }
    }

    pub fn direction(&self) -> SortDirection {
        SortDirection::from_inverse(self.inverse)
    }

    /// State of `field` implied by this selection.
    pub fn field_state(&self, field: K) -> FieldState {
        if field == self.sort_by {
            FieldState::Enabled(self.direction())
        } else {
            FieldState::Disabled
        }
    }

    /// Short label such as `Followers ↓`.
    pub fn summary_label(&self) -> String {
        format!("{} {}", self.sort_by.label(), self.direction().arrow())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::CommunitySortField;

    #[test]
    fn field_state_follows_selection() {
        let form = FormState::new(CommunitySortField::ViewsPerPost, true);

        assert_eq!(
            form.field_state(CommunitySortField::ViewsPerPost),
            FieldState::Enabled(SortDirection::Descending)
        );
        assert_eq!(
            form.field_state(CommunitySortField::Followers),
            FieldState::Disabled
        );
    }

    #[test]
    fn from_active_encodes_inverse() {
        let form = FormState::from_active(
            CommunitySortField::LikesPerView,
            SortDirection::Descending,
        );
        assert!(form.inverse);
        assert_eq!(form.summary_label(), "Likes ↓");
    }
}
