//! Box plot statistics
//!
//! Everything a box-and-whisker renderer needs for one dataset entry: the
//! five-number summary, whisker positions snapped to real observations,
//! outliers, and the cleaned sample itself (hosts draw it for jitter or
//! item overlays).

use serde::{Deserialize, Serialize};

use crate::options::{MaxStat, MinStat, StatsOptions};
use crate::sample::valid_sorted;
use crate::summary::FiveNumberSummary;
use crate::whisker::{outliers, whiskers};

/// Complete statistics behind one rendered box
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxplotStats {
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
    /// Lower whisker end
    pub whisker_min: f64,
    /// Upper whisker end
    pub whisker_max: f64,
    /// Values strictly outside the whisker range
    pub outliers: Vec<f64>,
    /// The cleaned ascending sample the statistics came from
    pub items: Vec<f64>,
}

impl BoxplotStats {
    /// Sentinel for a dataset entry with no usable values
    fn empty() -> Self {
        Self {
            min: f64::NAN,
            q1: f64::NAN,
            median: f64::NAN,
            q3: f64::NAN,
            max: f64::NAN,
            mean: None,
            whisker_min: f64::NAN,
            whisker_max: f64::NAN,
            outliers: Vec::new(),
            items: Vec::new(),
        }
    }

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

    /// Get the interquartile range
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Statistic used as the lower data limit when fitting a scale
    pub fn limit_min(&self, stat: MinStat) -> f64 {
        match stat {
            MinStat::Min => self.min,
            MinStat::Q1 => self.q1,
            MinStat::WhiskerMin => self.whisker_min,
        }
    }

    /// Statistic used as the upper data limit when fitting a scale
    pub fn limit_max(&self, stat: MaxStat) -> f64 {
        match stat {
            MaxStat::Max => self.max,
            MaxStat::Q3 => self.q3,
            MaxStat::WhiskerMax => self.whisker_max,
        }
    }
}

/// Compute box statistics from a raw sample
///
/// Non-finite entries are dropped and the rest sorted on a copy. An input
/// with no usable values produces the NaN sentinel record rather than an
/// error, so sparse datasets render as gaps instead of crashing the chart.
pub fn boxplot_stats(values: &[f64], options: StatsOptions) -> BoxplotStats {
    from_items(valid_sorted(values), options)
}

/// Compute box statistics from an already cleaned, ascending sample
///
/// Skips the filter/sort pass of [`boxplot_stats`] so one sorted sample can
/// feed both a box and a violin.
pub fn boxplot_stats_sorted(sorted: &[f64], options: StatsOptions) -> BoxplotStats {
    from_items(sorted.to_vec(), options)
}

fn from_items(items: Vec<f64>, options: StatsOptions) -> BoxplotStats {
    if items.is_empty() {
        return BoxplotStats::empty();
    }

    let summary = FiveNumberSummary::from_sorted(&items, options.quantiles);
    let bounds = whiskers(&summary, Some(&items), options.coef);
    let outliers = outliers(&items, bounds);

    BoxplotStats {
        min: summary.min,
        q1: summary.q1,
        median: summary.median,
        q3: summary.q3,
        max: summary.max,
        mean: summary.mean,
        whisker_min: bounds.whisker_min,
        whisker_max: bounds.whisker_max,
        outliers,
        items,
    }
}

/// Box statistics supplied by the host instead of raw observations
///
/// Whisker bounds, outliers, and items are all optional;
/// [`as_boxplot_stats`] completes whatever is missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrecomputedSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    #[serde(default)]
    pub mean: Option<f64>,
    #[serde(default)]
    pub whisker_min: Option<f64>,
    #[serde(default)]
    pub whisker_max: Option<f64>,
    #[serde(default)]
    pub outliers: Vec<f64>,
    #[serde(default)]
    pub items: Vec<f64>,
}

/// One dataset entry as handed over by the rendering layer
///
/// The rendering layer resolves whatever its host gave it (nulls, raw
/// arrays, cached records) into one of these variants up front; the
/// facade never inspects value shapes at runtime.
#[derive(Debug, Clone, Copy)]
pub enum BoxplotInput<'a> {
    /// No usable value at this index
    Missing,
    /// Raw observations, unsorted, NaN and infinities tolerated
    Sample(&'a [f64]),
    /// A summary computed elsewhere
    Precomputed(&'a PrecomputedSummary),
}

/// Normalize one dataset entry into box statistics
///
/// `Missing` maps to `None`, a gap rather than an error. A sample is
/// computed in full. A precomputed summary is trusted: existing whisker
/// bounds pass through untouched, missing ones are attached, snapped
/// against a sorted copy of the items when any are present.
pub fn as_boxplot_stats(input: BoxplotInput<'_>, options: StatsOptions) -> Option<BoxplotStats> {
    match input {
        BoxplotInput::Missing => None,
        BoxplotInput::Sample(values) => Some(boxplot_stats(values, options)),
        BoxplotInput::Precomputed(summary) => Some(complete_summary(summary, options)),
    }
}

/// Fill in the whiskers and outliers a host-supplied summary lacks
fn complete_summary(pre: &PrecomputedSummary, options: StatsOptions) -> BoxplotStats {
    if let (Some(whisker_min), Some(whisker_max)) = (pre.whisker_min, pre.whisker_max) {
        return BoxplotStats {
            min: pre.min,
            q1: pre.q1,
            median: pre.median,
            q3: pre.q3,
            max: pre.max,
            mean: pre.mean,
            whisker_min,
            whisker_max,
            outliers: pre.outliers.clone(),
            items: pre.items.clone(),
        };
    }

    let summary = FiveNumberSummary {
        min: pre.min,
        q1: pre.q1,
        median: pre.median,
        q3: pre.q3,
        max: pre.max,
        mean: pre.mean,
    };
    let items = if pre.items.is_empty() {
        None
    } else {
        Some(valid_sorted(&pre.items))
    };
    let bounds = whiskers(&summary, items.as_deref(), options.coef);
    // With observations at hand the outlier list can be rebuilt to match
    // the attached whiskers; without them the host's list is all there is
    let outliers = match &items {
        Some(sorted) => outliers(sorted, bounds),
        None => pre.outliers.clone(),
    };

    BoxplotStats {
        min: pre.min,
        q1: pre.q1,
        median: pre.median,
        q3: pre.q3,
        max: pre.max,
        mean: pre.mean,
        whisker_min: bounds.whisker_min,
        whisker_max: bounds.whisker_max,
        outliers,
        items: items.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantile::QuantileMethod;

    #[test]
    fn test_boxplot_basic() {
        let data: Vec<f64> = (1..=9).map(|x| x as f64).collect();
        let stats = boxplot_stats(&data, StatsOptions::default());

        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.q1, 3.0);
        assert_eq!(stats.median, 5.0);
        assert_eq!(stats.q3, 7.0);
        assert_eq!(stats.max, 9.0);
        assert_eq!(stats.mean, Some(5.0));
        // Fences exceed the data range, so the whiskers sit on the extremes
        assert_eq!(stats.whisker_min, 1.0);
        assert_eq!(stats.whisker_max, 9.0);
        assert!(stats.outliers.is_empty());
        assert_eq!(stats.items, data);
    }

    #[test]
    fn test_boxplot_detects_outlier() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
        let stats = boxplot_stats(&data, StatsOptions::default());

        assert_eq!(stats.q1, 2.25);
        assert_eq!(stats.median, 3.5);
        assert_eq!(stats.q3, 4.75);
        // Upper fence is 8.5; the whisker snaps down to the observation 5
        assert_eq!(stats.whisker_min, 1.0);
        assert_eq!(stats.whisker_max, 5.0);
        assert_eq!(stats.outliers, vec![100.0]);
    }

    #[test]
    fn test_boxplot_filters_and_sorts() {
        let data = vec![3.0, f64::NAN, 1.0, f64::INFINITY, 2.0];
        let stats = boxplot_stats(&data, StatsOptions::default());
        assert_eq!(stats.items, vec![1.0, 2.0, 3.0]);
        assert_eq!(stats.median, 2.0);
    }

    #[test]
    fn test_boxplot_empty_is_sentinel() {
        for data in [&[][..], &[f64::NAN][..]] {
            let stats = boxplot_stats(data, StatsOptions::default());
            assert!(stats.min.is_nan());
            assert!(stats.median.is_nan());
            assert!(stats.max.is_nan());
            assert!(stats.whisker_min.is_nan());
            assert!(stats.whisker_max.is_nan());
            assert!(stats.mean.is_none());
            assert!(stats.outliers.is_empty());
            assert!(stats.items.is_empty());
        }
    }

    #[test]
    fn test_boxplot_sorted_matches_raw() {
        let raw = vec![5.0, 1.0, 4.0, 2.0, 3.0];
        let sorted = valid_sorted(&raw);
        let a = boxplot_stats(&raw, StatsOptions::default());
        let b = boxplot_stats_sorted(&sorted, StatsOptions::default());
        assert_eq!(a.median, b.median);
        assert_eq!(a.whisker_min, b.whisker_min);
        assert_eq!(a.items, b.items);
    }

    #[test]
    fn test_facade_missing_is_none() {
        assert!(as_boxplot_stats(BoxplotInput::Missing, StatsOptions::default()).is_none());
    }

    #[test]
    fn test_facade_sample_computes() {
        let data = vec![1.0, 2.0, 3.0];
        let stats = as_boxplot_stats(BoxplotInput::Sample(&data), StatsOptions::default()).unwrap();
        assert_eq!(stats.median, 2.0);
    }

    #[test]
    fn test_facade_precomputed_passthrough() {
        let pre = PrecomputedSummary {
            min: 0.0,
            q1: 2.0,
            median: 3.0,
            q3: 4.0,
            max: 10.0,
            mean: Some(3.2),
            whisker_min: Some(1.0),
            whisker_max: Some(6.0),
            outliers: vec![0.0, 10.0],
            items: vec![],
        };
        let stats =
            as_boxplot_stats(BoxplotInput::Precomputed(&pre), StatsOptions::default()).unwrap();
        assert_eq!(stats.whisker_min, 1.0);
        assert_eq!(stats.whisker_max, 6.0);
        assert_eq!(stats.outliers, vec![0.0, 10.0]);
        assert_eq!(stats.mean, Some(3.2));
    }

    #[test]
    fn test_facade_attaches_whiskers_without_items() {
        let pre = PrecomputedSummary {
            min: 0.0,
            q1: 4.0,
            median: 5.0,
            q3: 6.0,
            max: 10.0,
            mean: None,
            whisker_min: None,
            whisker_max: None,
            outliers: vec![42.0],
            items: vec![],
        };
        let stats =
            as_boxplot_stats(BoxplotInput::Precomputed(&pre), StatsOptions::default()).unwrap();
        // IQR = 2: exact fences, nothing to snap against
        assert_eq!(stats.whisker_min, 1.0);
        assert_eq!(stats.whisker_max, 9.0);
        assert_eq!(stats.outliers, vec![42.0]);
        assert!(stats.items.is_empty());
    }

    #[test]
    fn test_facade_attaches_whiskers_with_items() {
        let pre = PrecomputedSummary {
            min: 0.0,
            q1: 4.0,
            median: 5.0,
            q3: 6.0,
            max: 10.0,
            mean: None,
            whisker_min: None,
            whisker_max: None,
            outliers: vec![],
            items: vec![10.0, 0.0, 5.0, 2.0, 8.0],
        };
        let stats =
            as_boxplot_stats(BoxplotInput::Precomputed(&pre), StatsOptions::default()).unwrap();
        // Fences at 1 and 9 snap inward to the observations 2 and 8
        assert_eq!(stats.whisker_min, 2.0);
        assert_eq!(stats.whisker_max, 8.0);
        assert_eq!(stats.outliers, vec![0.0, 10.0]);
        assert_eq!(stats.items, vec![0.0, 2.0, 5.0, 8.0, 10.0]);
    }

    #[test]
    fn test_limit_selectors() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
        let stats = boxplot_stats(&data, StatsOptions::default());
        assert_eq!(stats.limit_min(MinStat::Min), 1.0);
        assert_eq!(stats.limit_min(MinStat::Q1), 2.25);
        assert_eq!(stats.limit_min(MinStat::WhiskerMin), 1.0);
        assert_eq!(stats.limit_max(MaxStat::Max), 100.0);
        assert_eq!(stats.limit_max(MaxStat::Q3), 4.75);
        assert_eq!(stats.limit_max(MaxStat::WhiskerMax), 5.0);
    }

    #[test]
    fn test_summary_view_matches_record() {
        let options = StatsOptions::default();
        let stats = boxplot_stats(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0], options);
        let summary = stats.summary();

        assert_eq!(summary.min, stats.min);
        assert_eq!(summary.q1, stats.q1);
        assert_eq!(summary.median, stats.median);
        assert_eq!(summary.q3, stats.q3);
        assert_eq!(summary.max, stats.max);
        assert_eq!(summary.mean, stats.mean);
        assert_eq!(stats.iqr(), summary.iqr());

        // Re-deriving the whiskers from the view reproduces the record
        let bounds = whiskers(&summary, Some(&stats.items), options.coef);
        assert_eq!(bounds.whisker_min, stats.whisker_min);
        assert_eq!(bounds.whisker_max, stats.whisker_max);
    }

    #[test]
    fn test_hinges_option() {
        let data = vec![0.0, 25.0, 51.0, 75.0, 99.0];
        let options = StatsOptions::default().with_quantiles(QuantileMethod::Hinges);
        let stats = boxplot_stats(&data, options);
        assert_eq!(stats.q1, 25.0);
        assert_eq!(stats.median, 51.0);
        assert_eq!(stats.q3, 75.0);
    }

    #[test]
    fn test_serde_round_trip() {
        let stats = boxplot_stats(&[1.0, 2.0, 3.0, 4.0], StatsOptions::default());
        let json = serde_json::to_string(&stats).unwrap();
        let back: BoxplotStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back.median, stats.median);
        assert_eq!(back.items, stats.items);
    }
}
