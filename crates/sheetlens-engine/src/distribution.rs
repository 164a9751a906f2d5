//! Distribution summaries for numeric columns.
//!
//! Covers the central moments (mean, median, mode, population variance and
//! deviation, skewness, excess kurtosis), nearest-rank quartiles and a fixed
//! 10-bin histogram. Skewness needs at least 3 values and kurtosis at least
//! 4; below that the statistic is `None` rather than an error.

use serde::{Deserialize, Serialize};
use sheetlens_core::Table;

use crate::classify::{numeric_values, ColumnKind, ColumnProfile};
use crate::stats::{mean, median_sorted, population_std_dev, population_variance};

/// Histogram resolution: equal-width bins spanning `[min, max]`.
pub const HISTOGRAM_BINS: usize = 10;

/// Nearest-rank quartiles (no interpolation).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quartiles {
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub label: String,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DistributionSummary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub skewness: Option<f64>,
    pub kurtosis: Option<f64>,
    pub quartiles: Quartiles,
    pub histogram: Vec<HistogramBin>,
}

/// Summarize every numeric column with at least one value.
pub fn distributions(table: &Table, columns: &[ColumnProfile]) -> Vec<DistributionSummary> {
    columns
        .iter()
        .enumerate()
        .filter(|(_, p)| p.kind == ColumnKind::Numeric)
        .filter_map(|(col, p)| {
            DistributionSummary::from_values(&p.header, &numeric_values(table, col))
        })
        .collect()
}

impl DistributionSummary {
    /// Summarize one series; `None` when it is empty.
    pub fn from_values(column: &str, values: &[f64]) -> Option<DistributionSummary> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let n = values.len();
        let m = mean(values);
        let sd = population_std_dev(values);

        Some(DistributionSummary {
            column: column.to_string(),
            count: n,
            mean: m,
            median: median_sorted(&sorted),
            mode: mode_of_sorted(&sorted),
            variance: population_variance(values),
            std_dev: sd,
            skewness: skewness(values, m, sd),
            kurtosis: kurtosis(values, m, sd),
            quartiles: quartiles_of_sorted(&sorted),
            histogram: histogram_of_sorted(&sorted),
        })
    }
}

/// First value of the longest run in the ascending sort, so frequency ties
/// resolve to the smallest value.
fn mode_of_sorted(sorted: &[f64]) -> f64 {
    let mut best = sorted[0];
    let mut best_len = 0usize;
    let mut i = 0;
    while i < sorted.len() {
        let mut j = i + 1;
        while j < sorted.len() && sorted[j] == sorted[i] {
            j += 1;
        }
        if j - i > best_len {
            best_len = j - i;
            best = sorted[i];
        }
        i = j;
    }
    best
}

/// Adjusted Fisher-Pearson coefficient; defined for n >= 3.
/// A degenerate series (zero deviation) is reported as 0.
fn skewness(values: &[f64], mean: f64, std_dev: f64) -> Option<f64> {
    let n = values.len();
    if n < 3 {
        return None;
    }
    if std_dev == 0.0 {
        return Some(0.0);
    }
    let nf = n as f64;
    let sum: f64 = values
        .iter()
        .map(|v| {
            let z = (v - mean) / std_dev;
            z * z * z
        })
        .sum();
    Some(nf / ((nf - 1.0) * (nf - 2.0)) * sum)
}

/// Sample excess kurtosis; defined for n >= 4.
/// A degenerate series (zero deviation) is reported as 0.
fn kurtosis(values: &[f64], mean: f64, std_dev: f64) -> Option<f64> {
    let n = values.len();
    if n < 4 {
        return None;
    }
    if std_dev == 0.0 {
        return Some(0.0);
    }
    let nf = n as f64;
    let sum: f64 = values
        .iter()
        .map(|v| {
            let z = (v - mean) / std_dev;
            z * z * z * z
        })
        .sum();
    let lead = nf * (nf + 1.0) / ((nf - 1.0) * (nf - 2.0) * (nf - 3.0));
    let correction = 3.0 * (nf - 1.0) * (nf - 1.0) / ((nf - 2.0) * (nf - 3.0));
    Some(lead * sum - correction)
}

/// Nearest-rank percentiles: `sorted[floor(n * p)]`, capped at the last index.
fn quartiles_of_sorted(sorted: &[f64]) -> Quartiles {
    let n = sorted.len();
    let rank = |p: f64| {
        let index = ((n as f64 * p) as usize).min(n - 1);
        sorted[index]
    };
    Quartiles {
        q1: rank(0.25),
        q2: rank(0.5),
        q3: rank(0.75),
    }
}

/// Equal-width histogram over `[min, max]`. Bins are half-open except the
/// last, which includes the maximum, so the counts always sum to n. A
/// constant series collapses into the first bin.
fn histogram_of_sorted(sorted: &[f64]) -> Vec<HistogramBin> {
    let min = sorted[0];
    let max = sorted[sorted.len() - 1];
    let width = (max - min) / HISTOGRAM_BINS as f64;

    let mut counts = [0usize; HISTOGRAM_BINS];
    for &v in sorted {
        let index = if width == 0.0 {
            0
        } else {
            (((v - min) / width) as usize).min(HISTOGRAM_BINS - 1)
        };
        counts[index] += 1;
    }

    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let start = min + width * i as f64;
            let end = min + width * (i + 1) as f64;
            HistogramBin {
                label: format!("{:.1}-{:.1}", start, end),
                count,
            }
        })
        .collect()
}
