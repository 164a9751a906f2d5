//! Least-squares trend detection per numeric column.
//!
//! Values regress against their 0-indexed position in the column (among the
//! numeric values, so gaps do not stretch the x axis). Columns with fewer
//! than [`MIN_TREND_POINTS`] numeric values are skipped.

use serde::{Deserialize, Serialize};
use sheetlens_core::Table;

use crate::classify::{numeric_values, ColumnKind, ColumnProfile};
use crate::stats::mean;

/// Minimum numeric values a column needs before a trend is fitted.
pub const MIN_TREND_POINTS: usize = 3;
/// Number of forecast points extrapolated past the last value.
pub const FORECAST_STEPS: usize = 5;
/// Fits with R² below this are reported volatile regardless of slope.
pub const VOLATILE_R_SQUARED: f64 = 0.3;
/// Slopes with magnitude below this count as flat.
pub const STABLE_SLOPE: f64 = 0.1;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendKind {
    Increasing,
    Decreasing,
    Stable,
    Volatile,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    pub column: String,
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    pub trend: TrendKind,
    pub forecast: Vec<f64>,
}

/// Fit a trend for every numeric column with enough data.
pub fn column_trends(table: &Table, columns: &[ColumnProfile]) -> Vec<TrendAnalysis> {
    let mut trends = Vec::new();
    for (col, profile) in columns.iter().enumerate() {
        if profile.kind != ColumnKind::Numeric {
            continue;
        }
        let values = numeric_values(table, col);
        if let Some(analysis) = fit_trend(&profile.header, &values) {
            trends.push(analysis);
        }
    }
    trends
}

/// Fit a single series; `None` when it is too short.
pub fn fit_trend(column: &str, values: &[f64]) -> Option<TrendAnalysis> {
    if values.len() < MIN_TREND_POINTS {
        return None;
    }

    let n = values.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;
    for (i, &y) in values.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }

    let denom = n * sum_x2 - sum_x * sum_x;
    let slope = if denom == 0.0 {
        0.0
    } else {
        (n * sum_xy - sum_x * sum_y) / denom
    };
    let intercept = (sum_y - slope * sum_x) / n;

    let mean_y = mean(values);
    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for (i, &y) in values.iter().enumerate() {
        let predicted = slope * i as f64 + intercept;
        ss_res += (y - predicted) * (y - predicted);
        ss_tot += (y - mean_y) * (y - mean_y);
    }
    let r_squared = if ss_tot == 0.0 {
        0.0
    } else {
        (1.0 - ss_res / ss_tot).clamp(0.0, 1.0)
    };

    let trend = if r_squared < VOLATILE_R_SQUARED {
        TrendKind::Volatile
    } else if slope.abs() < STABLE_SLOPE {
        TrendKind::Stable
    } else if slope > 0.0 {
        TrendKind::Increasing
    } else {
        TrendKind::Decreasing
    };

    let last = *values.last()?;
    let forecast = (1..=FORECAST_STEPS)
        .map(|k| last + slope * k as f64)
        .collect();

    Some(TrendAnalysis {
        column: column.to_string(),
        slope,
        intercept,
        r_squared,
        trend,
        forecast,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::summarize;
    use sheetlens_core::CellValue;

    fn column_table(header: &str, values: &[CellValue]) -> Table {
        let mut rows = vec![vec![CellValue::Text(header.to_string())]];
        for v in values {
            rows.push(vec![v.clone()]);
        }
        Table::from_rows(rows)
    }

    #[test]
    fn test_perfect_line() {
        let t = fit_trend("v", &[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert!((t.slope - 1.0).abs() < 1e-12);
        // x runs over 0-indexed positions, so the line through
        // (0,1)..(4,5) is y = x + 1.
        assert!((t.intercept - 1.0).abs() < 1e-12);
        assert!((t.r_squared - 1.0).abs() < 1e-12);
        assert_eq!(t.trend, TrendKind::Increasing);
        assert_eq!(t.forecast, vec![6.0, 7.0, 8.0, 9.0, 10.0]);
    }

    #[test]
    fn test_decreasing_line() {
        let t = fit_trend("v", &[10.0, 8.0, 6.0, 4.0]).unwrap();
        assert!((t.slope + 2.0).abs() < 1e-12);
        // Intercept is the fitted value at position 0, i.e. the first point.
        assert!((t.intercept - 10.0).abs() < 1e-12);
        assert_eq!(t.trend, TrendKind::Decreasing);
        assert_eq!(t.forecast, vec![2.0, 0.0, -2.0, -4.0, -6.0]);
    }

    #[test]
    fn test_near_flat_slope_is_stable() {
        // Slope 0.05: well-fitted but flat.
        let values: Vec<f64> = (0..10).map(|i| 5.0 + 0.05 * i as f64).collect();
        let t = fit_trend("v", &values).unwrap();
        assert!(t.r_squared > 0.99);
        assert_eq!(t.trend, TrendKind::Stable);
    }

    #[test]
    fn test_noise_is_volatile() {
        let t = fit_trend("v", &[5.0, -3.0, 8.0, -6.0, 2.0, -1.0, 7.0, -5.0]).unwrap();
        assert!(t.r_squared < VOLATILE_R_SQUARED);
        assert_eq!(t.trend, TrendKind::Volatile);
    }

    #[test]
    fn test_constant_series_has_zero_r_squared() {
        // SS_tot = 0 resolves to R² = 0, which reads as volatile.
        let t = fit_trend("v", &[4.0, 4.0, 4.0, 4.0]).unwrap();
        assert_eq!(t.slope, 0.0);
        assert_eq!(t.r_squared, 0.0);
        assert_eq!(t.trend, TrendKind::Volatile);
        assert_eq!(t.forecast, vec![4.0; 5]);
    }

    #[test]
    fn test_short_series_skipped() {
        assert!(fit_trend("v", &[1.0, 2.0]).is_none());
        assert!(fit_trend("v", &[]).is_none());
    }

    #[test]
    fn test_positions_ignore_gaps() {
        // The numeric values sit on rows 1, 3, 5 but regress on x = 0, 1, 2.
        let table = column_table(
            "v",
            &[
                CellValue::Number(1.0),
                CellValue::Empty,
                CellValue::Number(2.0),
                CellValue::Empty,
                CellValue::Number(3.0),
            ],
        );
        let summary = summarize(&table);
        let trends = column_trends(&table, &summary.columns);
        assert_eq!(trends.len(), 1);
        assert!((trends[0].slope - 1.0).abs() < 1e-12);
        assert_eq!(trends[0].forecast, vec![4.0, 5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn test_text_columns_not_fitted() {
        let table = column_table(
            "names",
            &[
                CellValue::Text("a".to_string()),
                CellValue::Text("b".to_string()),
                CellValue::Text("c".to_string()),
            ],
        );
        let summary = summarize(&table);
        assert!(column_trends(&table, &summary.columns).is_empty());
    }
}
