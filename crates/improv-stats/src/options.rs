//! Chart statistics options
//!
//! One options record covers both chart kinds and travels by value into
//! every facade call, so there is no ambient configuration state and no
//! merge step inside the numeric core.

use serde::{Deserialize, Serialize};

use crate::quantile::QuantileMethod;

/// Tunables for box and violin statistics
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsOptions {
    /// Quartile convention
    pub quantiles: QuantileMethod,
    /// Whisker length as a multiple of the IQR; a value `<= 0` collapses
    /// the whiskers onto the extremes and disables outlier detection
    pub coef: f64,
    /// Number of points on the violin density curve
    pub points: usize,
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self {
            quantiles: QuantileMethod::Type7,
            coef: 1.5,
            points: 100,
        }
    }
}

impl StatsOptions {
    /// Set the quartile convention
    pub fn with_quantiles(mut self, quantiles: QuantileMethod) -> Self {
        self.quantiles = quantiles;
        self
    }

    /// Set the whisker coefficient
    pub fn with_coef(mut self, coef: f64) -> Self {
        self.coef = coef;
        self
    }

    /// Set the violin curve resolution
    pub fn with_points(mut self, points: usize) -> Self {
        self.points = points;
        self
    }
}

/// Statistic a scale reads as the lower data limit
///
/// Selecting `Q1` or `WhiskerMin` lets a chart ignore extreme outliers when
/// fitting its axis range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MinStat {
    Min,
    Q1,
    WhiskerMin,
}

impl Default for MinStat {
    fn default() -> Self {
        Self::Min
    }
}

/// Statistic a scale reads as the upper data limit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MaxStat {
    Max,
    Q3,
    WhiskerMax,
}

impl Default for MaxStat {
    fn default() -> Self {
        Self::Max
    }
}
