use crate::models::Series;
use serde::{Deserialize, Serialize};

/// Headline numbers for a dashboard metric panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeriesSummary {
    /// Finite observations counted into the statistics.
    pub count: usize,
    pub total: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    /// Most recent finite observation in series order.
    pub latest: Option<f64>,
}

/// Compute summary statistics over a metric series. Non-finite values are
/// skipped rather than poisoning the aggregates.
pub fn series_summary(series: &Series) -> SeriesSummary {
    let mut vals: Vec<f64> = series
        .values()
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .collect();
    vals.sort_by(|a, b| a.partial_cmp(b).expect("finite values compare"));

    let count = vals.len();
    let total: f64 = vals.iter().sum();
    let min = vals.first().copied();
    let max = vals.last().copied();
    let mean = if count > 0 {
        Some(total / count as f64)
    } else {
        None
    };
    let median = if count == 0 {
        None
    } else if count % 2 == 1 {
        Some(vals[count / 2])
    } else {
        Some((vals[count / 2 - 1] + vals[count / 2]) / 2.0)
    };
    let latest = series
        .values()
        .iter()
        .rev()
        .copied()
        .find(|v| v.is_finite());

    SeriesSummary {
        count,
        total,
        min,
        max,
        mean,
        median,
        latest,
    }
}

/// Percentage change from `previous` to `current` — the number behind the
/// trend badges on the portfolio cards. `None` when there is no usable base
/// period to compare against.
pub fn trend_pct(previous: f64, current: f64) -> Option<f64> {
    if previous == 0.0 || !previous.is_finite() || !current.is_finite() {
        return None;
    }
    Some((current - previous) / previous * 100.0)
}
