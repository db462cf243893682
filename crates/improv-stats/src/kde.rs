//! Gaussian kernel density estimation
//!
//! Violin outlines come from a classic fixed-bandwidth KDE with a standard
//! Gaussian kernel. The bandwidth follows Silverman's rule of thumb in the
//! form R uses (`bw.nrd`), driven by the same quantile convention as the
//! rest of the chart so box and violin agree on the IQR.

use serde::{Deserialize, Serialize};

use crate::quantile::QuantileMethod;

/// One evaluated point of a density curve
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct KdePoint {
    /// Position on the data axis
    pub v: f64,
    /// Density estimate at `v`
    pub estimate: f64,
}

/// Bandwidth floor for degenerate samples (all values equal, or n = 1)
const MIN_BANDWIDTH: f64 = f64::EPSILON;

/// Standard Gaussian kernel
fn gaussian(u: f64) -> f64 {
    (-0.5 * u * u).exp() / (2.0 * std::f64::consts::PI).sqrt()
}

/// Unbiased sample variance via Welford's incremental update
///
/// NaN for an empty sample, 0 for a single observation.
fn sample_variance(values: &[f64]) -> f64 {
    let mut count = 0usize;
    let mut mean = 0.0;
    let mut m2 = 0.0;
    for &x in values {
        count += 1;
        let delta = x - mean;
        mean += delta / count as f64;
        m2 += delta * (x - mean);
    }
    match count {
        0 => f64::NAN,
        1 => 0.0,
        _ => m2 / (count - 1) as f64,
    }
}

/// Silverman's rule-of-thumb bandwidth (R `bw.nrd`)
///
/// `1.06 * min(sd, iqr / 1.34) * n^(-1/5)` over a non-empty, sorted
/// sample. Zero for a constant sample; [`kde`] floors that before use.
pub fn silverman_bandwidth(sample: &[f64], method: QuantileMethod) -> f64 {
    let quartiles = method.quartiles(sample);
    let h = (quartiles.q3 - quartiles.q1) / 1.34;
    let sd = sample_variance(sample).sqrt();
    1.06 * sd.min(h) * (sample.len() as f64).powf(-0.2)
}

/// Evaluate the density of `sample` at each of `points`
///
/// The sample must be non-empty, cleaned, and ascending; the evaluation
/// grid is the caller's to choose and comes back in its given order. The
/// bandwidth always derives from the sample, never from the grid.
pub fn kde(sample: &[f64], points: &[f64], method: QuantileMethod) -> Vec<KdePoint> {
    let bandwidth = silverman_bandwidth(sample, method);
    let bandwidth = if bandwidth.is_finite() && bandwidth > 0.0 {
        bandwidth
    } else {
        MIN_BANDWIDTH
    };

    let norm = 1.0 / (bandwidth * sample.len() as f64);
    points
        .iter()
        .map(|&v| {
            let sum: f64 = sample.iter().map(|&s| gaussian((v - s) / bandwidth)).sum();
            KdePoint {
                v,
                estimate: norm * sum,
            }
        })
        .collect()
}
