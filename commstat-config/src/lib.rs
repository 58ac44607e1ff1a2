//! Shared configuration for the commstat listing pages.
//!
//! This crate owns the element names, icon class names and per-field widget
//! ids the sort control binds to, plus the labels of the follower-history
//! chart. Built-in defaults match the markup the server renders; overrides
//! load from TOML or JSON files, inline JSON, or a `data-sort-config`
//! attribute in the browser.

pub mod chart;
pub mod error;
pub mod loader;
pub mod sort_widget;

pub use chart::{HistoryChartConfig, TimeUnit};
pub use error::ConfigLoadError;
pub use loader::{CommstatConfig, ConfigSource};
pub use sort_widget::{FieldWidgetConfig, IconClassConfig, SortWidgetConfig};
