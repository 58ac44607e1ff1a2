use crate::error::{ModelError, Result};
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One sample of a community metric, serialized in the `{x, y}` shape the
/// chart library expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HistoryPoint {
    #[cfg_attr(feature = "serde", serde(rename = "x"))]
    pub checked_at: DateTime<Utc>,
    #[cfg_attr(feature = "serde", serde(rename = "y"))]
    pub value: i64,
}

impl HistoryPoint {
    pub fn new(checked_at: DateTime<Utc>, value: i64) -> Self {
        Self { checked_at, value }
    }

    pub fn from_unix(seconds: i64, value: i64) -> Result<Self> {
        let checked_at = DateTime::<Utc>::from_timestamp(seconds, 0)
            .ok_or_else(|| {
                ModelError::InvalidHistoryPoint(format!(
                    "timestamp {seconds} out of range"
                ))
            })?;
        Ok(Self { checked_at, value })
    }
}

/// Time-ordered samples of a single metric.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(into = "Vec<HistoryPoint>", from = "Vec<HistoryPoint>")
)]
pub struct HistorySeries {
    points: Vec<HistoryPoint>,
}

impl HistorySeries {
    /// Builds a series, ordering samples by timestamp. Samples sharing a
    /// timestamp keep their input order.
    pub fn new(mut points: Vec<HistoryPoint>) -> Self {
        points.sort_by_key(|point| point.checked_at);
        Self { points }
    }

    pub fn points(&self) -> &[HistoryPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn latest(&self) -> Option<&HistoryPoint> {
        self.points.last()
    }

    /// Difference between the newest and oldest sample; `None` when empty
    /// or when the difference does not fit an `i64`.
    pub fn change(&self) -> Option<i64> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        last.value.checked_sub(first.value)
    }
}

impl From<Vec<HistoryPoint>> for HistorySeries {
    fn from(points: Vec<HistoryPoint>) -> Self {
        Self::new(points)
    }
}

impl From<HistorySeries> for Vec<HistoryPoint> {
    fn from(series: HistorySeries) -> Self {
        series.points
    }
}

impl FromIterator<HistoryPoint> for HistorySeries {
    fn from_iter<T: IntoIterator<Item = HistoryPoint>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_is_ordered_by_timestamp() {
        let series: HistorySeries = [
            HistoryPoint::from_unix(200, 15).unwrap(),
            HistoryPoint::from_unix(100, 10).unwrap(),
            HistoryPoint::from_unix(300, 12).unwrap(),
        ]
        .into_iter()
        .collect();

        let values: Vec<i64> =
            series.points().iter().map(|point| point.value).collect();
        assert_eq!(values, vec![10, 15, 12]);
        assert_eq!(series.latest().map(|p| p.value), Some(12));
        assert_eq!(series.change(), Some(2));
    }

    #[test]
    fn empty_series_has_no_change() {
        let series = HistorySeries::default();
        assert!(series.is_empty());
        assert_eq!(series.change(), None);
    }

    #[test]
    fn change_reports_overflow_as_none() {
        let series = HistorySeries::new(vec![
            HistoryPoint::from_unix(100, i64::MIN).unwrap(),
            HistoryPoint::from_unix(200, i64::MAX).unwrap(),
        ]);
        assert_eq!(series.change(), None);
        assert_eq!(series.latest().map(|p| p.value), Some(i64::MAX));
    }

    #[test]
    fn out_of_range_timestamp_is_rejected() {
        assert!(matches!(
            HistoryPoint::from_unix(i64::MAX, 1),
            Err(ModelError::InvalidHistoryPoint(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn point_serializes_as_xy() {
        let point = HistoryPoint::from_unix(0, 42).unwrap();
        let value = serde_json::to_value(point).unwrap();
        assert_eq!(value["y"], 42);
        assert_eq!(value["x"], "1970-01-01T00:00:00Z");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialized_series_is_time_ordered() {
        let series: HistorySeries = serde_json::from_str(
            r#"[{"x": "2024-03-02T00:00:00Z", "y": 20},
                {"x": "2024-03-01T00:00:00Z", "y": 10}]"#,
        )
        .unwrap();

        let values: Vec<i64> =
            series.points().iter().map(|point| point.value).collect();
        assert_eq!(values, vec![10, 20]);

        let json = serde_json::to_value(&series).unwrap();
        assert_eq!(json[0]["y"], 10);
    }
}
