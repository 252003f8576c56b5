//! Chart geometry: project a labeled numeric series into renderable
//! coordinates.
//!
//! - Bar charts: per-element fraction of the series maximum
//! - Line charts: evenly spaced points, straight connecting segments, a
//!   fixed set of horizontal gridlines, and a callout on the final point
//! - All-zero series produce defined flat output instead of NaN artifacts
//!
//! Both entry points are deterministic and side-effect-free; the rendering
//! shell turns the returned coordinates into pixels.

pub mod types;

// Re-export types for public API
pub use types::{
    ANNOTATION_OFFSET, Annotation, BarSlot, GRIDLINE_COUNT, LineGeometry, Point, Segment, Viewport,
};

use crate::models::{Series, SeriesError};

/// Scale every element against the series maximum for a categorical bar
/// chart. The tallest element maps to exactly `1.0`.
///
/// A series whose maximum is zero or negative (e.g. all zeros) yields `0.0`
/// for every bar; the division is never performed against a degenerate
/// maximum.
pub fn compute_bar_geometry(series: &Series) -> Vec<BarSlot> {
    let max = series.max_value().unwrap_or(0.0);
    series
        .values()
        .iter()
        .zip(series.labels())
        .map(|(&value, label)| {
            let fraction = if max > 0.0 { value / max } else { 0.0 };
            BarSlot {
                label: label.clone(),
                fraction,
            }
        })
        .collect()
}

/// Project a series into line-chart coordinates inside `viewport`.
///
/// Points are spaced evenly across the full width (first at `x = 0`, last at
/// `x = width`) and scaled vertically to the series maximum, leaving
/// `top_margin` of headroom. Consecutive points are joined by straight
/// segments; no smoothing. Gridlines are independent of the data. The final
/// point carries a callout with its value and label, offset upward so it
/// does not sit on the line.
///
/// ### Errors
/// `SeriesError::TooFewPoints` when the series has fewer than two points
/// (horizontal spacing divides by `len - 1`).
pub fn compute_line_geometry(
    series: &Series,
    viewport: &Viewport,
) -> Result<LineGeometry, SeriesError> {
    let n = series.len();
    if n < 2 {
        return Err(SeriesError::TooFewPoints(n));
    }

    let max = series.max_value().unwrap_or(0.0);
    let span = viewport.height - viewport.top_margin;

    let points: Vec<Point> = series
        .values()
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let scaled = if max > 0.0 { value / max } else { 0.0 };
            Point {
                // Multiply before dividing so the last point lands on the
                // right edge exactly.
                x: i as f64 * viewport.width / (n - 1) as f64,
                y: viewport.height - scaled * span,
            }
        })
        .collect();

    let segments = points
        .windows(2)
        .map(|pair| Segment {
            from: pair[0],
            to: pair[1],
        })
        .collect();

    let gridlines = (0..GRIDLINE_COUNT)
        .map(|i| viewport.height * i as f64 / (GRIDLINE_COUNT - 1) as f64)
        .collect();

    let last = n - 1;
    let annotation = Some(Annotation {
        x: points[last].x,
        y: points[last].y - ANNOTATION_OFFSET,
        value: series.values()[last],
        label: series.labels()[last].clone(),
    });

    Ok(LineGeometry {
        points,
        segments,
        gridlines,
        annotation,
    })
}
