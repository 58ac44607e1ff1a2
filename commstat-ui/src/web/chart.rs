use super::error::WebError;
use crate::chart::{history_chart_json, parse_history};
use commstat_config::HistoryChartConfig;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlCanvasElement;

/// Hands the history samples in `points_json` to the page's global `Chart`
/// constructor and returns the chart instance.
pub fn render(
    canvas_id: &str,
    points_json: &str,
    config: &HistoryChartConfig,
) -> Result<JsValue, WebError> {
    let series = parse_history(points_json)?;
    let options = js_sys::JSON::parse(&history_chart_json(config, &series)?)
        .map_err(WebError::js)?;

    let canvas = super::dom::document()?
        .get_element_by_id(canvas_id)
        .ok_or_else(|| WebError::MissingElement(format!("#{canvas_id}")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| WebError::WrongElementType(format!("#{canvas_id}")))?;
    let context = canvas
        .get_context("2d")
        .map_err(WebError::js)?
        .ok_or_else(|| WebError::Js("canvas has no 2d context".to_string()))?;

    let constructor =
        js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("Chart"))
            .map_err(WebError::js)?
            .dyn_into::<js_sys::Function>()
            .map_err(|_| WebError::MissingElement("global Chart".to_string()))?;

    let chart = js_sys::Reflect::construct(
        &constructor,
        &js_sys::Array::of2(&context, &options),
    )
    .map_err(WebError::js)?;

    log::debug!(
        "history chart drawn on #{canvas_id}: {} points, latest {:?}, change {:?}",
        series.len(),
        series.latest().map(|point| point.value),
        series.change()
    );
    Ok(chart)
}
