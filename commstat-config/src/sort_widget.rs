use crate::error::ConfigLoadError;
use commstat_model::SortKey;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Class names that make up a sort icon's look.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct IconClassConfig {
    /// Present on every sort icon; also used to locate the icon inside its
    /// range widget.
    pub base: String,
    pub disabled: String,
    pub up: String,
    pub down: String,
}

impl IconClassConfig {
    /// BEM modifiers `--disabled`, `--up` and `--down` of `base`.
    pub fn bem(base: &str) -> Self {
        Self {
            base: base.to_string(),
            disabled: format!("{base}--disabled"),
            up: format!("{base}--up"),
            down: format!("{base}--down"),
        }
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        let named = [
            ("classes.base", &self.base),
            ("classes.disabled", &self.disabled),
            ("classes.up", &self.up),
            ("classes.down", &self.down),
        ];
        let mut seen = HashSet::new();
        for (name, class) in named {
            if class.trim().is_empty() {
                return Err(ConfigLoadError::EmptyValue(name));
            }
            if !seen.insert(class.as_str()) {
                return Err(ConfigLoadError::DuplicateClass(class.clone()));
            }
        }
        Ok(())
    }
}

impl Default for IconClassConfig {
    fn default() -> Self {
        Self::bem("filter__sorting-icon")
    }
}

/// Where the icon of one sortable field lives in the page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FieldWidgetConfig {
    /// Sort field id as it appears in the `sort_by` select.
    pub field: String,
    /// Id of the range widget whose first base-class child is the icon.
    pub widget_id: String,
}

impl FieldWidgetConfig {
    pub fn new(field: &str, widget_id: &str) -> Self {
        Self {
            field: field.to_string(),
            widget_id: widget_id.to_string(),
        }
    }
}

/// Binding between the sort control and one listing page's markup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SortWidgetConfig {
    /// `name` of the filter `<form>`.
    pub form_name: String,
    /// `name` of the `<select>` carrying the sort field.
    pub select_name: String,
    /// `name` of the descending-order checkbox.
    pub inverse_name: String,
    pub classes: IconClassConfig,
    /// Keep the `up` marker on disabled icons, previewing the direction a
    /// click would activate. The server-rendered page does this.
    pub disabled_direction_hint: bool,
    pub fields: Vec<FieldWidgetConfig>,
}

/// Standard element names and classes with no fields; page layouts come
/// from [`SortWidgetConfig::community_list`] and
/// [`SortWidgetConfig::post_list`].
impl Default for SortWidgetConfig {
    fn default() -> Self {
        Self::with_fields(Vec::new())
    }
}

impl SortWidgetConfig {
    fn with_fields(fields: Vec<FieldWidgetConfig>) -> Self {
        Self {
            form_name: "filter".to_string(),
            select_name: "sort_by".to_string(),
            inverse_name: "inverse".to_string(),
            classes: IconClassConfig::default(),
            disabled_direction_hint: true,
            fields,
        }
    }

    pub fn community_list() -> Self {
        Self::with_fields(vec![
            FieldWidgetConfig::new("followers", "followers-range-widget"),
            FieldWidgetConfig::new("views_per_post", "views-range-widget"),
            FieldWidgetConfig::new("likes_per_view", "likes-range-widget"),
        ])
    }

    pub fn post_list() -> Self {
        Self::with_fields(vec![
            FieldWidgetConfig::new("published_at", "date-range-widget"),
            FieldWidgetConfig::new("views", "views-range-widget"),
            FieldWidgetConfig::new("likes_per_view", "likes-range-widget"),
        ])
    }

    /// Takes `fallback`'s fields when this layout declares none, so a
    /// partial override only has to name what it changes.
    pub fn with_default_fields(mut self, fallback: &SortWidgetConfig) -> Self {
        if self.fields.is_empty() {
            self.fields = fallback.fields.clone();
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.form_name.trim().is_empty() {
            return Err(ConfigLoadError::EmptyValue("form_name"));
        }
        if self.select_name.trim().is_empty() {
            return Err(ConfigLoadError::EmptyValue("select_name"));
        }
        if self.inverse_name.trim().is_empty() {
            return Err(ConfigLoadError::EmptyValue("inverse_name"));
        }
        self.classes.validate()?;

        if self.fields.is_empty() {
            return Err(ConfigLoadError::NoFields);
        }
        let mut seen = HashSet::new();
        for widget in &self.fields {
            if !seen.insert(widget.field.as_str()) {
                return Err(ConfigLoadError::DuplicateField(
                    widget.field.clone(),
                ));
            }
            if widget.widget_id.trim().is_empty() {
                return Err(ConfigLoadError::EmptyWidgetId {
                    field: widget.field.clone(),
                });
            }
        }
        Ok(())
    }

    /// Validates the layout and types every field id as `K`, paired with
    /// its widget id.
    pub fn resolve<K: SortKey>(
        &self,
    ) -> Result<Vec<(K, &str)>, ConfigLoadError> {
        self.validate()?;
        let mut resolved = Vec::with_capacity(self.fields.len());
        for widget in &self.fields {
            let key = K::parse(&widget.field)?;
            resolved.push((key, widget.widget_id.as_str()));
        }
        Ok(resolved)
    }
}
