//! Public types and constants for the geometry module.

use serde::{Deserialize, Serialize};

/// The fixed drawing coordinate space geometry is projected into.
///
/// `top_margin` is headroom kept free above the tallest point so the
/// highlighted-point callout has somewhere to sit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub top_margin: f64,
}

impl Default for Viewport {
    /// The dashboard's line-chart canvas: 700×200 with 20 units of headroom.
    fn default() -> Self {
        Self {
            width: 700.0,
            height: 200.0,
            top_margin: 20.0,
        }
    }
}

/// Horizontal gridlines drawn behind a line chart, evenly spanning `[0, H]`.
pub const GRIDLINE_COUNT: usize = 5;

/// Vertical gap between the highlighted point and its callout box.
pub const ANNOTATION_OFFSET: f64 = 35.0;

/// One bar of a categorical bar chart: the label under the bar and the bar's
/// height as a fraction of the tallest bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSlot {
    pub label: String,
    pub fraction: f64,
}

/// A point in viewport coordinates (y grows downward, SVG-style).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A straight segment between two consecutive chart points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Callout attached to the highlighted point, carrying its literal value and
/// label. `x`/`y` anchor the box just above the point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub value: f64,
    pub label: String,
}

/// Renderable description of a line chart: the plotted points, the straight
/// segments connecting them in order, gridline y-positions, and the callout
/// on the final point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineGeometry {
    pub points: Vec<Point>,
    pub segments: Vec<Segment>,
    pub gridlines: Vec<f64>,
    pub annotation: Option<Annotation>,
}
