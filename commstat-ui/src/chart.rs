//! Configuration object for the metric history chart on detail pages.
//!
//! Produces the options the chart library takes for a single line series on
//! a time axis. Drawing is left to the library.

use commstat_config::HistoryChartConfig;
use commstat_model::{HistoryPoint, HistorySeries};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData<'a>,
    pub options: ChartOptions<'a>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData<'a> {
    pub datasets: Vec<Dataset<'a>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset<'a> {
    pub label: &'a str,
    pub data: &'a [HistoryPoint],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions<'a> {
    pub legend: Toggle,
    pub title: Title<'a>,
    pub scales: Scales,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Toggle {
    pub display: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Title<'a> {
    pub display: bool,
    pub text: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scales {
    #[serde(rename = "xAxes")]
    pub x_axes: Vec<TimeAxis>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeAxis {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub time: TimeScale,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeScale {
    pub unit: &'static str,
}

/// Line chart of `series` labelled per `config`.
pub fn history_chart<'a>(
    config: &'a HistoryChartConfig,
    series: &'a HistorySeries,
) -> ChartSpec<'a> {
    ChartSpec {
        kind: "line",
        data: ChartData {
            datasets: vec![Dataset {
                label: &config.dataset_label,
                data: series.points(),
            }],
        },
        options: ChartOptions {
            legend: Toggle {
                display: config.show_legend,
            },
            title: Title {
                display: !config.title.is_empty(),
                text: &config.title,
            },
            scales: Scales {
                x_axes: vec![TimeAxis {
                    kind: "time",
                    time: TimeScale {
                        unit: config.time_unit.as_str(),
                    },
                }],
            },
        },
    }
}

/// Parses the `[{x, y}, ...]` samples a detail page embeds.
pub fn parse_history(json: &str) -> serde_json::Result<HistorySeries> {
    serde_json::from_str(json)
}

pub fn history_chart_json(
    config: &HistoryChartConfig,
    series: &HistorySeries,
) -> serde_json::Result<String> {
    serde_json::to_string(&history_chart(config, series))
}
