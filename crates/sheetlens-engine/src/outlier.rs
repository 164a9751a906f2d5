//! Z-score outlier detection over numeric columns.
//!
//! Scores use the population mean and standard deviation. A constant column
//! has no outliers by definition (its deviation is zero, so every z-score is
//! treated as 0); columns with nothing flagged are left out of the result.

use serde::{Deserialize, Serialize};
use sheetlens_core::Table;

use crate::classify::{numeric_values_with_rows, ColumnKind, ColumnProfile};
use crate::stats::{mean, population_std_dev};

/// Values at least this many deviations from the mean are flagged.
pub const Z_SCORE_THRESHOLD: f64 = 2.0;

/// One flagged value. `row` is the table row (1-indexed; row 0 is the header).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Outlier {
    pub row: usize,
    pub value: f64,
    pub z_score: f64,
}

/// Flagged values of one column, sorted by z-score descending.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutlierReport {
    pub column: String,
    pub mean: f64,
    pub std_dev: f64,
    pub outliers: Vec<Outlier>,
}

/// Scan every numeric column; columns with no outliers are omitted.
pub fn detect_outliers(table: &Table, columns: &[ColumnProfile]) -> Vec<OutlierReport> {
    let mut reports = Vec::new();
    for (col, profile) in columns.iter().enumerate() {
        if profile.kind != ColumnKind::Numeric {
            continue;
        }
        let pairs = numeric_values_with_rows(table, col);
        let values: Vec<f64> = pairs.iter().map(|(_, v)| *v).collect();
        let m = mean(&values);
        let sd = population_std_dev(&values);
        if sd == 0.0 {
            continue;
        }

        let mut outliers: Vec<Outlier> = pairs
            .iter()
            .filter_map(|&(row, value)| {
                let z_score = (value - m).abs() / sd;
                (z_score >= Z_SCORE_THRESHOLD).then_some(Outlier {
                    row,
                    value,
                    z_score,
                })
            })
            .collect();
        if outliers.is_empty() {
            continue;
        }
        outliers.sort_by(|a, b| b.z_score.total_cmp(&a.z_score));

        reports.push(OutlierReport {
            column: profile.header.clone(),
            mean: m,
            std_dev: sd,
            outliers,
        });
    }
    reports
}
