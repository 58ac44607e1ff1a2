//! Browser entry points.
//!
//! Pages load the wasm bundle and call one exported function: the listing
//! pages mount their sort control, detail pages hand their history samples to
//! the chart library.

pub mod chart;
pub mod console;
pub mod dom;
pub mod error;
pub mod mount;

pub use dom::{DomFilterForm, DomSortIcon};
pub use error::WebError;

use commstat_config::{HistoryChartConfig, SortWidgetConfig};
use commstat_model::{CommunitySortField, PostSortField};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    crate::logging::init();
}

/// Wires the sort icons of the community list.
#[wasm_bindgen]
pub fn mount_community_sorting() -> Result<(), JsValue> {
    mount::mount_sort_control::<CommunitySortField>(
        SortWidgetConfig::community_list(),
    )
    .map(|_| ())
    .map_err(report)
}

/// Wires the sort icons of the post list.
#[wasm_bindgen]
pub fn mount_post_sorting() -> Result<(), JsValue> {
    mount::mount_sort_control::<PostSortField>(SortWidgetConfig::post_list())
        .map(|_| ())
        .map_err(report)
}

/// Draws the metric history on the `<canvas>` with id `canvas_id` from a JSON
/// array of `{x, y}` samples. `config_json` optionally overrides the chart
/// labels, e.g. `{"title": "Views", "dataset_label": "views"}`.
#[wasm_bindgen]
pub fn render_history_chart(
    canvas_id: &str,
    points_json: &str,
    config_json: Option<String>,
) -> Result<(), JsValue> {
    let config = match config_json.as_deref() {
        Some(raw) => HistoryChartConfig::from_json(raw)
            .map_err(|err| report(err.into()))?,
        None => HistoryChartConfig::default(),
    };
    chart::render(canvas_id, points_json, &config)
        .map(|_| ())
        .map_err(report)
}

fn report(err: WebError) -> JsValue {
    log::error!("{err}");
    JsValue::from(err)
}
