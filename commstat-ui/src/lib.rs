//! Client-side behaviour of the commstat listing and detail pages.
//!
//! The listing pages show one sort icon per sortable column. Clicking an icon
//! makes its field the single sort key or flips its direction; the hidden
//! filter form is kept in step so the next submission reloads the page in the
//! chosen order. The detail pages plot a metric's history with a line chart.
//!
//! Everything here is platform independent except [`web`], which binds the
//! control and the chart to a live document when built with the `web`
//! feature.

pub mod chart;
pub mod error;
pub mod logging;
pub mod query;
pub mod sort_control;

#[cfg(feature = "web")]
pub mod web;

pub use chart::{ChartSpec, history_chart, history_chart_json, parse_history};
pub use error::{Result, SortControlError};
pub use query::{read_sort_query, write_sort_query};
pub use sort_control::{
    IconMarkers, IconProjection, SortControl, SortMessage, SortStates,
    next_state,
};
