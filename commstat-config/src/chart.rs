use crate::error::ConfigLoadError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Granularity of the chart's time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Hour,
    #[default]
    Day,
    Week,
    Month,
}

impl TimeUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Labels of the metric history chart on detail pages.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HistoryChartConfig {
    pub title: String,
    /// Dataset label; hidden while the legend is hidden.
    pub dataset_label: String,
    pub time_unit: TimeUnit,
    pub show_legend: bool,
}

impl Default for HistoryChartConfig {
    fn default() -> Self {
        Self {
            title: "Followers".to_string(),
            dataset_label: "followers".to_string(),
            time_unit: TimeUnit::Day,
            show_legend: false,
        }
    }
}

impl HistoryChartConfig {
    /// Labels from a page-supplied JSON object; missing keys keep their
    /// defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigLoadError> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|err| ConfigLoadError::InvalidJson(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.dataset_label.trim().is_empty() {
            return Err(ConfigLoadError::EmptyValue("dataset_label"));
        }
        Ok(())
    }
}
