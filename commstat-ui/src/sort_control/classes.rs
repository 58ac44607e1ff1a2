use commstat_config::{IconClassConfig, SortWidgetConfig};
use commstat_contracts::{SortIconSurface, SurfaceError};
use commstat_model::{FieldState, SortDirection};

/// Modifier classes an icon carries for one field state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IconMarkers {
    pub disabled: bool,
    pub up: bool,
    pub down: bool,
}

impl IconMarkers {
    /// `up` and `down` are never both set. With `direction_hint` a disabled
    /// icon keeps `up`, showing the direction a click would activate.
    pub fn for_state(state: FieldState, direction_hint: bool) -> Self {
        match state {
            FieldState::Enabled(SortDirection::Ascending) => Self {
                disabled: false,
                up: true,
                down: false,
            },
            FieldState::Enabled(SortDirection::Descending) => Self {
                disabled: false,
                up: false,
                down: true,
            },
            FieldState::Disabled => Self {
                disabled: true,
                up: direction_hint,
                down: false,
            },
        }
    }
}

/// Renders field states onto icon class lists.
///
/// Every marker class is written on each render, so stale modifiers left by
/// server markup or a previous state never survive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconProjection {
    classes: IconClassConfig,
    direction_hint: bool,
}

impl Default for IconProjection {
    fn default() -> Self {
        Self::new(IconClassConfig::default(), true)
    }
}

impl IconProjection {
    pub fn new(classes: IconClassConfig, direction_hint: bool) -> Self {
        Self {
            classes,
            direction_hint,
        }
    }

    pub fn from_config(config: &SortWidgetConfig) -> Self {
        Self::new(config.classes.clone(), config.disabled_direction_hint)
    }

    pub fn classes(&self) -> &IconClassConfig {
        &self.classes
    }

    pub fn markers(&self, state: FieldState) -> IconMarkers {
        IconMarkers::for_state(state, self.direction_hint)
    }

    pub fn paint<I: SortIconSurface + ?Sized>(
        &self,
        icon: &mut I,
        state: FieldState,
    ) -> Result<(), SurfaceError> {
        let markers = self.markers(state);
        icon.set_class(&self.classes.base, true)?;
        icon.set_class(&self.classes.disabled, markers.disabled)?;
        // Clear before set so up/down never coexist mid-render.
        if markers.up {
            icon.set_class(&self.classes.down, false)?;
            icon.set_class(&self.classes.up, true)?;
        } else {
            icon.set_class(&self.classes.up, false)?;
            icon.set_class(&self.classes.down, markers.down)?;
        }
        Ok(())
    }

    /// Markers currently shown by `icon`.
    pub fn read<I: SortIconSurface + ?Sized>(&self, icon: &I) -> IconMarkers {
        IconMarkers {
            disabled: icon.has_class(&self.classes.disabled),
            up: icon.has_class(&self.classes.up),
            down: icon.has_class(&self.classes.down),
        }
    }
}
