//! The listing page's multi-field sort control.
//!
//! A [`SortControl`] binds one icon per sortable field and the hidden filter
//! form. Its typed [`SortStates`] are the source of truth; icon classes are a
//! projection of them and the form is written back after every click so the
//! next submission carries the new order.

pub mod classes;
pub mod messages;
pub mod transition;

pub use classes::{IconMarkers, IconProjection};
pub use messages::SortMessage;
pub use transition::{SortStates, next_state};

use crate::error::{Result, SortControlError};
use commstat_config::SortWidgetConfig;
use commstat_contracts::form::FilterFormSurfaceExt;
use commstat_contracts::{FilterFormSurface, SortIconSurface};
use commstat_model::{FieldState, FormState, SortDirection, SortKey};

#[derive(Debug)]
pub struct SortControl<K, I, F> {
    icons: Vec<(K, I)>,
    form: F,
    states: SortStates<K>,
    projection: IconProjection,
}

impl<K, I, F> SortControl<K, I, F>
where
    K: SortKey,
    I: SortIconSurface,
    F: FilterFormSurface,
{
    /// Wires the control and paints every icon from the form's current
    /// selection.
    ///
    /// Fails when no icons are given, a field is given twice, a field has no
    /// option in the sort select, or the form's selection is missing, invalid
    /// or not one of the given fields.
    pub fn new(
        form: F,
        icons: Vec<(K, I)>,
        projection: IconProjection,
    ) -> Result<Self> {
        if icons.is_empty() {
            return Err(SortControlError::NoFields);
        }

        let mut fields = Vec::with_capacity(icons.len());
        for (field, _) in &icons {
            if fields.contains(field) {
                return Err(SortControlError::DuplicateField(field.as_str()));
            }
            if !form.has_option(field.as_str()) {
                return Err(SortControlError::MissingOption(field.as_str()));
            }
            fields.push(*field);
        }

        let selection = read_selection::<K, F>(&form)?;
        let states = SortStates::from_form(fields, selection)?;

        let mut control = Self {
            icons,
            form,
            states,
            projection,
        };
        control.render()?;

        log::info!(
            "sort control ready with {} fields, sorted by {}",
            control.icons.len(),
            selection.summary_label()
        );
        Ok(control)
    }

    /// Builds the control from a page layout; `lookup` resolves each field's
    /// icon from its widget id.
    pub fn from_config<L>(
        config: &SortWidgetConfig,
        form: F,
        mut lookup: L,
    ) -> Result<Self>
    where
        L: FnMut(K, &str) -> Result<I>,
    {
        let layout = config.resolve::<K>()?;
        let mut icons = Vec::with_capacity(layout.len());
        for (field, widget_id) in layout {
            icons.push((field, lookup(field, widget_id)?));
        }
        Self::new(form, icons, IconProjection::from_config(config))
    }

    /// Handles a click on `field`'s icon.
    ///
    /// A disabled field becomes the ascending sort key and every other field
    /// is disabled; the enabled field flips direction. Icons are repainted
    /// and the form rewritten before returning the new selection.
    ///
    /// On error the previous selection is written back and the icons are
    /// repainted from it, so state, icons and form still agree.
    pub fn activate_or_toggle(&mut self, field: K) -> Result<FormState<K>> {
        let next = self.states.activated(field)?;
        let (previous, previous_direction) = self.states.active();
        let (active, direction) = next.active();

        log::debug!(
            "sort {}: {} {} -> {} {}",
            field.as_str(),
            previous.as_str(),
            previous_direction,
            active.as_str(),
            direction
        );

        let applied = paint_all(&mut self.icons, &self.projection, &next)
            .and_then(|()| commit(&mut self.form, next.form_state()));
        match applied {
            Ok(state) => {
                self.states = next;
                Ok(state)
            }
            Err(err) => {
                log::error!("sort {} failed, restoring: {err}", field.as_str());
                self.restore();
                Err(err)
            }
        }
    }

    /// Re-reads the form and repaints every icon. Calling it again with an
    /// unchanged form leaves the icons untouched.
    pub fn sync_from_form(&mut self) -> Result<FormState<K>> {
        let selection = read_selection::<K, F>(&self.form)?;
        self.states =
            SortStates::from_form(self.states.fields().to_vec(), selection)?;
        self.render()?;
        Ok(selection)
    }

    pub fn update(&mut self, message: SortMessage<K>) -> Result<FormState<K>> {
        log::trace!("{}", message.name());
        match message {
            SortMessage::Activate(field) => self.activate_or_toggle(field),
            SortMessage::Resync => self.sync_from_form(),
        }
    }

    pub fn field_state(&self, field: K) -> Option<FieldState> {
        self.states.state_of(field)
    }

    pub fn active(&self) -> (K, SortDirection) {
        self.states.active()
    }

    /// Selection derived from the control's own state.
    pub fn form_state(&self) -> FormState<K> {
        self.states.form_state()
    }

    /// Selection as currently reported by the form.
    pub fn read_form(&self) -> Result<FormState<K>> {
        read_selection::<K, F>(&self.form)
    }

    pub fn states(&self) -> &SortStates<K> {
        &self.states
    }

    pub fn fields(&self) -> impl Iterator<Item = K> + '_ {
        self.icons.iter().map(|(field, _)| *field)
    }

    pub fn icon(&self, field: K) -> Option<&I> {
        self.icons
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, icon)| icon)
    }

    pub fn icons(&self) -> impl Iterator<Item = (K, &I)> + '_ {
        self.icons.iter().map(|(field, icon)| (*field, icon))
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    /// Direct access to the form; follow changes with
    /// [`SortControl::sync_from_form`].
    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn projection(&self) -> &IconProjection {
        &self.projection
    }

    fn render(&mut self) -> Result<()> {
        paint_all(&mut self.icons, &self.projection, &self.states)
    }

    /// Best effort write-back of the current states after a failed click.
    fn restore(&mut self) {
        if let Err(err) = self.form.write_state(self.states.form_state()) {
            log::warn!("could not restore filter form: {err}");
        }
        if let Err(err) = self.render() {
            log::warn!("could not restore sort icons: {err}");
        }
    }
}

fn paint_all<K: SortKey, I: SortIconSurface>(
    icons: &mut [(K, I)],
    projection: &IconProjection,
    states: &SortStates<K>,
) -> Result<()> {
    for (field, icon) in icons {
        let state = states
            .state_of(*field)
            .ok_or(SortControlError::UnknownField(field.as_str()))?;
        projection.paint(icon, state)?;
    }
    Ok(())
}

/// Writes `expected` to the form and checks the form took it.
fn commit<K: SortKey, F: FilterFormSurface>(
    form: &mut F,
    expected: FormState<K>,
) -> Result<FormState<K>> {
    form.write_state(expected)?;

    let found = form.read_state::<K>()?;
    if found != Some(expected) {
        let found = match found {
            Some(state) => describe(state),
            None => "no selection".to_string(),
        };
        return Err(SortControlError::FormOutOfSync {
            expected: describe(expected),
            found,
        });
    }
    Ok(expected)
}

fn describe<K: SortKey>(state: FormState<K>) -> String {
    format!("{} (inverse={})", state.sort_by.as_str(), state.inverse)
}

fn read_selection<K: SortKey, F: FilterFormSurface>(
    form: &F,
) -> Result<FormState<K>> {
    form.read_state::<K>()?.ok_or(SortControlError::NoSelection)
}
