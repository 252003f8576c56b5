use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when assembling or projecting a metric series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeriesError {
    /// Values and labels must pair up index-for-index.
    #[error("series has {values} values but {labels} labels")]
    LengthMismatch { values: usize, labels: usize },
    /// Line projection spaces points by `len - 1`, so one point is not enough.
    #[error("line projection needs at least 2 points, got {0}")]
    TooFewPoints(usize),
}

/// Ordered numeric values paired index-for-index with display labels.
///
/// One series backs one chart: monthly active clients, weekly disbursed
/// credits, and so on. Construction enforces the pairing; the accessors keep
/// it intact afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    values: Vec<f64>,
    labels: Vec<String>,
}

impl Series {
    /// Build a series, rejecting mismatched value/label counts.
    pub fn new(values: Vec<f64>, labels: Vec<String>) -> Result<Self, SeriesError> {
        if values.len() != labels.len() {
            return Err(SeriesError::LengthMismatch {
                values: values.len(),
                labels: labels.len(),
            });
        }
        Ok(Self { values, labels })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Largest finite value in the series, if any.
    pub fn max_value(&self) -> Option<f64> {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .reduce(f64::max)
    }
}
