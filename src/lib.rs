//! novapanel
//!
//! Computation core of the Novacapital admin dashboard. The rendering shell
//! stays thin: everything that actually computes — chart geometry, form
//! validation, peso formatting, portfolio statistics, the credit simulator —
//! lives here as plain deterministic functions the shell calls per render.
//!
//! ### Features
//! - Bar and line chart geometry from labeled numeric series
//! - Document/email/phone checks for the Colombian onboarding forms
//! - Whole-peso currency formatting with `es-CO` digit grouping
//! - Navigation shell state transitions (active section, expand flags)
//! - Summary statistics, trend percentages, and loan installment math
//! - CSV/JSON export of metric series
//!
//! ### Example
//! ```
//! use novapanel::geometry::{self, Viewport};
//! use novapanel::samples;
//!
//! let series = samples::disbursed_credits();
//! let line = geometry::compute_line_geometry(&series, &Viewport::default())?;
//! assert_eq!(line.points.len(), series.len());
//! # Ok::<(), novapanel::SeriesError>(())
//! ```

pub mod credit;
pub mod currency;
pub mod geometry;
pub mod models;
pub mod nav;
pub mod notify;
pub mod samples;
pub mod stats;
pub mod storage;
pub mod validate;

pub use models::{Series, SeriesError};
pub use nav::MenuState;
pub use notify::{NotificationSink, Severity};
