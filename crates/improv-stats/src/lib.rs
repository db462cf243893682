//! improv-stats - Distribution statistics for box and violin charts
//!
//! The numeric core behind box-and-whisker and violin plots:
//!
//! - **Quartiles**: R type 7, Tukey hinges, and the NumPy interpolation
//!   variants, plus caller-supplied estimators
//! - **Box statistics**: five-number summary, IQR whiskers snapped to real
//!   observations, outliers
//! - **Violin statistics**: Gaussian KDE with Silverman bandwidth over an
//!   evenly spaced grid
//!
//! # Design Philosophy
//!
//! Everything here is a pure function from `(sample, options)` to an
//! immutable record. The rendering layer owns caching, scales, and
//! drawing; this crate owns the numbers. Records serialize with serde so
//! they can cross process or FFI boundaries to whatever does the drawing.

pub mod boxplot;
pub mod kde;
pub mod options;
pub mod quantile;
pub mod sample;
pub mod summary;
pub mod violin;
pub mod whisker;

pub use boxplot::*;
pub use kde::*;
pub use options::*;
pub use quantile::*;
pub use sample::*;
pub use summary::*;
pub use violin::*;
pub use whisker::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
