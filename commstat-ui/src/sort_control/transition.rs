//! Pure state of the sort control.
//!
//! Only the active field and its direction are stored, so "exactly one field
//! is enabled" holds by construction: every other registered field reads as
//! [`FieldState::Disabled`].

use crate::error::{Result, SortControlError};
use commstat_model::{FieldState, FormState, SortDirection, SortKey};

/// Next state of a clicked field.
///
/// A disabled field starts ascending; an enabled one flips direction.
pub fn next_state(current: FieldState) -> FieldState {
    match current {
        FieldState::Disabled => FieldState::Enabled(SortDirection::Ascending),
        FieldState::Enabled(direction) => {
            FieldState::Enabled(direction.toggled())
        }
    }
}

/// Per-field states of one control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortStates<K> {
    fields: Vec<K>,
    active: K,
    direction: SortDirection,
}

impl<K: SortKey> SortStates<K> {
    /// States implied by the form: the selected field is enabled, every
    /// other field disabled.
    pub fn from_form(fields: Vec<K>, form: FormState<K>) -> Result<Self> {
        if fields.is_empty() {
            return Err(SortControlError::NoFields);
        }
        if !fields.contains(&form.sort_by) {
            return Err(SortControlError::UnwiredSelection(
                form.sort_by.as_str(),
            ));
        }
        Ok(Self {
            fields,
            active: form.sort_by,
            direction: form.direction(),
        })
    }

    pub fn fields(&self) -> &[K] {
        &self.fields
    }

    pub fn contains(&self, field: K) -> bool {
        self.fields.contains(&field)
    }

    /// `None` when `field` is not registered.
    pub fn state_of(&self, field: K) -> Option<FieldState> {
        if !self.contains(field) {
            return None;
        }
        if field == self.active {
            Some(FieldState::Enabled(self.direction))
        } else {
            Some(FieldState::Disabled)
        }
    }

    pub fn active(&self) -> (K, SortDirection) {
        (self.active, self.direction)
    }

    pub fn form_state(&self) -> FormState<K> {
        FormState::from_active(self.active, self.direction)
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, FieldState)> + '_ {
        self.fields.iter().map(move |field| {
            let state = if *field == self.active {
                FieldState::Enabled(self.direction)
            } else {
                FieldState::Disabled
            };
            (*field, state)
        })
    }

    /// States after `field` was clicked.
    pub fn activated(&self, field: K) -> Result<Self> {
        let current = self
            .state_of(field)
            .ok_or(SortControlError::UnknownField(field.as_str()))?;

        let direction = next_state(current)
            .direction()
            .unwrap_or(SortDirection::Ascending);

        Ok(Self {
            fields: self.fields.clone(),
            active: field,
            direction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commstat_model::CommunitySortField::{self, *};

    fn states(form: FormState<CommunitySortField>) -> SortStates<CommunitySortField> {
        SortStates::from_form(CommunitySortField::all().to_vec(), form).unwrap()
    }

    fn enabled_count(states: &SortStates<CommunitySortField>) -> usize {
        states.iter().filter(|(_, state)| state.is_enabled()).count()
    }

    #[test]
    fn next_state_cycles() {
        let asc = FieldState::Enabled(SortDirection::Ascending);
        let desc = FieldState::Enabled(SortDirection::Descending);

        assert_eq!(next_state(FieldState::Disabled), asc);
        assert_eq!(next_state(asc), desc);
        assert_eq!(next_state(desc), asc);
    }

    #[test]
    fn exactly_one_field_enabled_along_any_click_sequence() {
        let mut current = states(FormState::new(Followers, true));
        assert_eq!(enabled_count(&current), 1);

        let clicks = [
            ViewsPerPost,
            ViewsPerPost,
            LikesPerView,
            Followers,
            Followers,
            Followers,
            LikesPerView,
        ];
        for field in clicks {
            current = current.activated(field).unwrap();
            assert_eq!(enabled_count(&current), 1);
            assert!(current.state_of(field).unwrap().is_enabled());
        }
    }

    #[test]
    fn switching_fields_resets_to_ascending() {
        let current = states(FormState::new(Followers, true));
        let next = current.activated(LikesPerView).unwrap();

        assert_eq!(next.active(), (LikesPerView, SortDirection::Ascending));
        assert_eq!(next.state_of(Followers), Some(FieldState::Disabled));
        assert_eq!(next.form_state(), FormState::new(LikesPerView, false));
    }

    #[test]
    fn unregistered_field_is_rejected() {
        let current = SortStates::from_form(
            vec![Followers, ViewsPerPost],
            FormState::new(Followers, false),
        )
        .unwrap();

        assert_eq!(current.state_of(LikesPerView), None);
        assert_eq!(
            current.activated(LikesPerView),
            Err(SortControlError::UnknownField("likes_per_view"))
        );
    }

    #[test]
    fn selection_must_be_registered() {
        let err = SortStates::from_form(
            vec![Followers],
            FormState::new(ViewsPerPost, false),
        )
        .unwrap_err();
        assert_eq!(err, SortControlError::UnwiredSelection("views_per_post"));
    }
}
