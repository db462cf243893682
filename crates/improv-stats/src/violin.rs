//! Violin plot statistics
//!
//! A violin is a five-number summary plus a kernel density curve sampled on
//! an evenly spaced grid across the data range. The curve is what gets
//! mirrored into the violin outline; `max_estimate` saves renderers a pass
//! when scaling the width.

use serde::{Deserialize, Serialize};

use crate::kde::{kde, KdePoint};
use crate::options::{MaxStat, MinStat, StatsOptions};
use crate::sample::valid_sorted;
use crate::summary::FiveNumberSummary;

/// Complete statistics behind one rendered violin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViolinStats {
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
    /// Arithmetic mean
    pub mean: Option<f64>,
    /// Density curve, ascending in `v`, spanning the data range
    pub coords: Vec<KdePoint>,
    /// Largest density estimate on the curve
    pub max_estimate: f64,
    /// Kept for renderer symmetry with box plots; violins encode their
    /// tails in the curve, so computed records leave this empty
    pub outliers: Vec<f64>,
    /// The cleaned ascending sample the statistics came from
    pub items: Vec<f64>,
}

impl ViolinStats {
    /// The five-number summary part of this record
    pub fn summary(&self) -> FiveNumberSummary {
        FiveNumberSummary {
            min: self.min,
            q1: self.q1,
            median: self.median,
            q3: self.q3,
            max: self.max,
            mean: self.mean,
        }
    }

    /// Statistic used as the lower data limit when fitting a scale;
    /// violins carry no whiskers, so that choice falls back to the minimum
    pub fn limit_min(&self, stat: MinStat) -> f64 {
        match stat {
            MinStat::Min | MinStat::WhiskerMin => self.min,
            MinStat::Q1 => self.q1,
        }
    }

    /// Statistic used as the upper data limit when fitting a scale
    pub fn limit_max(&self, stat: MaxStat) -> f64 {
        match stat {
            MaxStat::Max | MaxStat::WhiskerMax => self.max,
            MaxStat::Q3 => self.q3,
        }
    }
}

/// Evenly spaced evaluation grid over `[min, max]`, endpoints included
///
/// The last point is pinned to `max` so the curve always closes on the
/// range even when the spacing cannot divide it exactly. A zero range or a
/// single requested point degenerates to one value, zero points to none.
/// Each point is a convex combination of the extremes, so a range wider
/// than `f64::MAX` still yields finite grid values.
fn sample_grid(min: f64, max: f64, points: usize) -> Vec<f64> {
    if points == 0 {
        return Vec::new();
    }
    if points == 1 || max == min {
        return vec![min];
    }

    // min + i * step would go NaN once max - min overflows to infinity
    let last = (points - 1) as f64;
    let mut grid: Vec<f64> = (0..points)
        .map(|i| {
            let t = i as f64 / last;
            min * (1.0 - t) + max * t
        })
        .collect();
    grid[points - 1] = max;
    grid
}

/// Compute violin statistics from a raw sample
///
/// Non-finite entries are dropped and the rest sorted on a copy. Returns
/// `None` when no usable values remain: there is no density curve over
/// zero observations.
pub fn violin_stats(values: &[f64], options: StatsOptions) -> Option<ViolinStats> {
    from_items(valid_sorted(values), options)
}

/// Compute violin statistics from an already cleaned, ascending sample
///
/// Skips the filter/sort pass of [`violin_stats`] so one sorted sample can
/// feed both a box and a violin.
pub fn violin_stats_sorted(sorted: &[f64], options: StatsOptions) -> Option<ViolinStats> {
    from_items(sorted.to_vec(), options)
}

fn from_items(items: Vec<f64>, options: StatsOptions) -> Option<ViolinStats> {
    if items.is_empty() {
        return None;
    }

    let summary = FiveNumberSummary::from_sorted(&items, options.quantiles);
    let grid = sample_grid(summary.min, summary.max, options.points);
    let coords = kde(&items, &grid, options.quantiles);
    let max_estimate = coords
        .iter()
        .fold(f64::NEG_INFINITY, |acc, p| acc.max(p.estimate));

    Some(ViolinStats {
        min: summary.min,
        q1: summary.q1,
        median: summary.median,
        q3: summary.q3,
        max: summary.max,
        mean: summary.mean,
        coords,
        max_estimate,
        outliers: Vec::new(),
        items,
    })
}

/// One dataset entry as handed over by the rendering layer
#[derive(Debug, Clone, Copy)]
pub enum ViolinInput<'a> {
    /// No usable value at this index
    Missing,
    /// Raw observations, unsorted, NaN and infinities tolerated
    Sample(&'a [f64]),
    /// A record computed earlier, e.g. pulled from the host's cache
    Precomputed(&'a ViolinStats),
}

/// Normalize one dataset entry into violin statistics
///
/// Precomputed records pass through unchanged; re-deriving the curve would
/// throw away whatever the host cached.
pub fn as_violin_stats(input: ViolinInput<'_>, options: StatsOptions) -> Option<ViolinStats> {
    match input {
        ViolinInput::Missing => None,
        ViolinInput::Sample(values) => violin_stats(values, options),
        ViolinInput::Precomputed(stats) => Some(stats.clone()),
    }
}
