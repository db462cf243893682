//! Whisker bounds and outlier detection
//!
//! Whiskers extend from the quartile box by a multiple of the IQR (Tukey's
//! rule, 1.5 by default), clamped to the observed extremes. When the sample
//! is available the bounds also snap inward to the nearest real
//! observation so a whisker always ends on a data point. Values beyond the
//! whiskers are outliers.

use serde::{Deserialize, Serialize};

use crate::summary::FiveNumberSummary;

/// Lower and upper whisker positions
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WhiskerBounds {
    /// Lower whisker end
    pub whisker_min: f64,
    /// Upper whisker end
    pub whisker_max: f64,
}

/// Compute whisker bounds for a summary
///
/// A non-positive or non-finite `coef` collapses the whiskers onto the
/// sample extremes, which disables outlier detection by construction. A
/// summary alone cannot snap to observations, so host-precomputed records
/// keep the exact fence positions; pass the sorted sample to snap.
pub fn whiskers(summary: &FiveNumberSummary, sorted: Option<&[f64]>, coef: f64) -> WhiskerBounds {
    let (mut whisker_min, mut whisker_max) = if coef.is_finite() && coef > 0.0 {
        let iqr = summary.iqr();
        (
            summary.min.max(summary.q1 - coef * iqr),
            summary.max.min(summary.q3 + coef * iqr),
        )
    } else {
        (summary.min, summary.max)
    };

    if let Some(values) = sorted {
        // Walk inward from each end to the first observation inside the fences
        for &v in values {
            if v >= whisker_min {
                whisker_min = v;
                break;
            }
        }
        for &v in values.iter().rev() {
            if v <= whisker_max {
                whisker_max = v;
                break;
            }
        }
    }

    WhiskerBounds {
        whisker_min,
        whisker_max,
    }
}

/// Values strictly outside the whisker range, in ascending order
pub fn outliers(sorted: &[f64], bounds: WhiskerBounds) -> Vec<f64> {
    sorted
        .iter()
        .copied()
        .filter(|&v| v < bounds.whisker_min || v > bounds.whisker_max)
        .collect()
}
