//! Five-number summaries
//!
//! The five-number summary (minimum, quartiles, maximum) is the skeleton
//! every box and violin record is built on. The arithmetic mean rides along
//! because chart hosts commonly draw it as an extra marker.

use serde::{Deserialize, Serialize};

use crate::quantile::QuantileMethod;

/// Five number summary statistics, plus the mean
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FiveNumberSummary {
    /// Minimum value
    pub min: f64,
    /// First quartile
    pub q1: f64,
    /// Median
    pub median: f64,
    /// Third quartile
    pub q3: f64,
    /// Maximum value
    pub max: f64,
    /// Arithmetic mean; absent on host-supplied summaries that omit it
    pub mean: Option<f64>,
}

impl FiveNumberSummary {
    /// Compute the summary of a cleaned, ascending sample
    ///
    /// An empty slice yields the NaN sentinel instead of a panic, so
    /// degenerate dataset entries flow through a chart as "no box".
    pub fn from_sorted(sorted: &[f64], method: QuantileMethod) -> Self {
        if sorted.is_empty() {
            return Self::nan();
        }

        let quartiles = method.quartiles(sorted);
        let mean = sorted.iter().sum::<f64>() / sorted.len() as f64;

        Self {
            min: sorted[0],
            q1: quartiles.q1,
            median: quartiles.median,
            q3: quartiles.q3,
            max: sorted[sorted.len() - 1],
            mean: Some(mean),
        }
    }

    /// Sentinel summary with every statistic NaN
    pub fn nan() -> Self {
        Self {
            min: f64::NAN,
            q1: f64::NAN,
            median: f64::NAN,
            q3: f64::NAN,
            max: f64::NAN,
            mean: None,
        }
    }

    /// Get the interquartile range
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Get the range (max - min)
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}
