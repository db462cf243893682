//! Quartile estimators
//!
//! There is no single definition of a quartile; R alone documents nine
//! types, and a chart's numbers are expected to match whichever convention
//! the surrounding ecosystem uses. This module implements the conventions
//! common in plotting libraries:
//!
//! - **Type 7**: the R/Julia default, linear interpolation (also NumPy's
//!   `linear` mode)
//! - **Hinges**: Tukey hinges as computed by R's `fivenum`
//! - **Lower/Higher/Nearest/Midpoint**: the remaining NumPy `percentile`
//!   interpolation modes
//!
//! All estimators operate on a non-empty, finite, ascending sample (see
//! [`crate::sample::valid_sorted`]) and report the three quartiles a box or
//! violin needs.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// The three quartiles of a sample
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Quartiles {
    /// First quartile (25th percentile)
    pub q1: f64,
    /// Median (50th percentile)
    pub median: f64,
    /// Third quartile (75th percentile)
    pub q3: f64,
}

/// Signature shared by all quartile estimators
///
/// The slice is non-empty, finite, and sorted ascending.
pub type QuantileFn = fn(&[f64]) -> Quartiles;

/// Interpolation-based estimators share this skeleton: locate the
/// fractional 0-based index `q * (n - 1)` and resolve it with the given
/// rule. An exact integer index short-circuits to that order statistic.
fn quantiles_interpolate(sorted: &[f64], interpolate: fn(f64, f64, f64) -> f64) -> Quartiles {
    assert!(
        !sorted.is_empty(),
        "quartiles are undefined for an empty sample"
    );
    let n1 = (sorted.len() - 1) as f64;
    let at = |q: f64| {
        let index = q * n1;
        let lo = index.floor() as usize;
        let h = index - lo as f64;
        if h == 0.0 {
            sorted[lo]
        } else {
            interpolate(sorted[lo], sorted[lo + 1], h)
        }
    };
    Quartiles {
        q1: at(0.25),
        median: at(0.5),
        q3: at(0.75),
    }
}

/// R type 7: linear interpolation between the order statistics around the
/// 1-based position `1 + q(n - 1)`
pub fn quantiles_type7(sorted: &[f64]) -> Quartiles {
    quantiles_interpolate(sorted, |lo, hi, h| lo + h * (hi - lo))
}

/// Tukey hinges as computed by R's `fivenum`
///
/// Hinges sit `floor((n + 3) / 2) / 2` in from each end (1-based) and are
/// midpoints of the neighboring order statistics when that position is
/// fractional. For small samples this differs noticeably from type 7.
pub fn quantiles_fivenum(sorted: &[f64]) -> Quartiles {
    assert!(
        !sorted.is_empty(),
        "quartiles are undefined for an empty sample"
    );
    let n = sorted.len() as f64;
    let n4 = (((n + 3.0) / 2.0).floor()) / 2.0;
    let at = |d: f64| 0.5 * (sorted[d.floor() as usize - 1] + sorted[d.ceil() as usize - 1]);
    Quartiles {
        q1: at(n4),
        median: at((n + 1.0) / 2.0),
        q3: at(n + 1.0 - n4),
    }
}

/// NumPy `linear` interpolation, identical to type 7
pub fn quantiles_linear(sorted: &[f64]) -> Quartiles {
    quantiles_interpolate(sorted, |lo, hi, h| lo + h * (hi - lo))
}

/// NumPy `lower`: always the lower neighbor
pub fn quantiles_lower(sorted: &[f64]) -> Quartiles {
    quantiles_interpolate(sorted, |lo, _hi, _h| lo)
}

/// NumPy `higher`: always the upper neighbor
pub fn quantiles_higher(sorted: &[f64]) -> Quartiles {
    quantiles_interpolate(sorted, |_lo, hi, _h| hi)
}

/// NumPy `nearest`: whichever neighbor is closer, upward on a tie
pub fn quantiles_nearest(sorted: &[f64]) -> Quartiles {
    quantiles_interpolate(sorted, |lo, hi, h| if h < 0.5 { lo } else { hi })
}

/// NumPy `midpoint`: mean of the two neighbors
pub fn quantiles_midpoint(sorted: &[f64]) -> Quartiles {
    quantiles_interpolate(sorted, |lo, hi, _h| 0.5 * (lo + hi))
}

/// Quartile convention used across a chart
///
/// Dispatches to one of the estimator functions in this module, or to a
/// caller-supplied one. Custom estimators receive exactly the same cleaned
/// input as the built-ins and are never special-cased.
#[derive(Clone, Copy, Debug)]
pub enum QuantileMethod {
    /// R type 7 linear interpolation, the default
    Type7,
    /// Tukey hinges (R `fivenum`)
    Hinges,
    /// NumPy linear interpolation (alias of type 7)
    Linear,
    /// NumPy lower neighbor
    Lower,
    /// NumPy higher neighbor
    Higher,
    /// NumPy nearest neighbor
    Nearest,
    /// NumPy neighbor midpoint
    Midpoint,
    /// Caller-supplied estimator
    Custom(QuantileFn),
}

impl QuantileMethod {
    /// Resolve the estimator function implementing this method
    pub fn estimator(&self) -> QuantileFn {
        match self {
            Self::Type7 => quantiles_type7,
            Self::Hinges => quantiles_fivenum,
            Self::Linear => quantiles_linear,
            Self::Lower => quantiles_lower,
            Self::Higher => quantiles_higher,
            Self::Nearest => quantiles_nearest,
            Self::Midpoint => quantiles_midpoint,
            Self::Custom(f) => *f,
        }
    }

    /// Estimate the quartiles of a sorted sample
    pub fn quartiles(&self, sorted: &[f64]) -> Quartiles {
        (self.estimator())(sorted)
    }

    /// Canonical configuration name, `None` for custom estimators
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Self::Type7 => Some("type7"),
            Self::Hinges => Some("hinges"),
            Self::Linear => Some("linear"),
            Self::Lower => Some("lower"),
            Self::Higher => Some("higher"),
            Self::Nearest => Some("nearest"),
            Self::Midpoint => Some("midpoint"),
            Self::Custom(_) => None,
        }
    }
}

/// Named methods compare by variant. `Custom` compares the function
/// address, so two custom methods are equal only when they carry the same
/// pointer, regardless of what the functions compute.
impl PartialEq for QuantileMethod {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Custom(a), Self::Custom(b)) => std::ptr::fn_addr_eq(*a, *b),
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

impl Eq for QuantileMethod {}

impl Default for QuantileMethod {
    fn default() -> Self {
        Self::Type7
    }
}

impl fmt::Display for QuantileMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or("custom"))
    }
}

/// Error returned when a quantile method name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown quantile method '{0}' (expected 7, quantiles, type7, hinges, fivenum, linear, lower, higher, nearest or midpoint)")]
pub struct UnknownQuantileMethod(pub String);

impl FromStr for QuantileMethod {
    type Err = UnknownQuantileMethod;

    /// Parse a method name, accepting the aliases used in chart configs
    /// (`"7"` and `"quantiles"` both mean type 7, `"fivenum"` means hinges)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "7" | "quantiles" | "type7" => Ok(Self::Type7),
            "hinges" | "fivenum" => Ok(Self::Hinges),
            "linear" => Ok(Self::Linear),
            "lower" => Ok(Self::Lower),
            "higher" => Ok(Self::Higher),
            "nearest" => Ok(Self::Nearest),
            "midpoint" => Ok(Self::Midpoint),
            _ => Err(UnknownQuantileMethod(s.to_string())),
        }
    }
}

impl Serialize for QuantileMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.name() {
            Some(name) => serializer.serialize_str(name),
            None => Err(serde::ser::Error::custom(
                "custom quantile estimators have no serialized form",
            )),
        }
    }
}

impl<'de> Deserialize<'de> for QuantileMethod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MethodVisitor;

        impl<'de> Visitor<'de> for MethodVisitor {
            type Value = QuantileMethod;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a quantile method name or the number 7")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                value.parse().map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                QuantileMethod::from_str(&value.to_string()).map_err(E::custom)
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                QuantileMethod::from_str(&value.to_string()).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(MethodVisitor)
    }
}
