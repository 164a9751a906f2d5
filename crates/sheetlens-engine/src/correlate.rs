//! Pearson correlation across numeric columns.
//!
//! Pairs of columns correlate over the rows where both sides read as numbers
//! (pairwise deletion). Degenerate pairs (no shared rows, or no variance on
//! either side) correlate at 0 rather than `NaN`, and the diagonal is pinned
//! to exactly 1.

use serde::{Deserialize, Serialize};
use sheetlens_core::Table;

use crate::classify::{finite_number, ColumnKind, ColumnProfile};
use crate::stats::mean;

/// Symmetric correlation matrix over the table's numeric columns.
///
/// `columns[i]` names the column behind row/column `i` of `matrix`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Correlate every pair of numeric columns.
///
/// `columns` is the classified profile list for `table`, in column order.
pub fn correlation_matrix(table: &Table, columns: &[ColumnProfile]) -> CorrelationMatrix {
    let numeric: Vec<(usize, &str)> = columns
        .iter()
        .enumerate()
        .filter(|(_, p)| p.kind == ColumnKind::Numeric)
        .map(|(i, p)| (i, p.header.as_str()))
        .collect();

    let n = numeric.len();
    let mut matrix = vec![vec![0.0; n]; n];
    for i in 0..n {
        matrix[i][i] = 1.0;
        for j in (i + 1)..n {
            let r = pairwise_pearson(table, numeric[i].0, numeric[j].0);
            matrix[i][j] = r;
            matrix[j][i] = r;
        }
    }

    CorrelationMatrix {
        columns: numeric.iter().map(|(_, h)| h.to_string()).collect(),
        matrix,
    }
}

fn pairwise_pearson(table: &Table, a: usize, b: usize) -> f64 {
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for row in table.data_rows() {
        let (Some(x), Some(y)) = (finite_number(&row[a]), finite_number(&row[b])) else {
            continue;
        };
        xs.push(x);
        ys.push(y);
    }
    pearson(&xs, &ys)
}

/// Pearson r of two equal-length samples, clamped to `[-1, 1]`.
/// Empty samples or zero variance on either side yield 0.
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len().min(ys.len());
    if n == 0 {
        return 0.0;
    }
    let mx = mean(&xs[..n]);
    let my = mean(&ys[..n]);

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for k in 0..n {
        let dx = xs[k] - mx;
        let dy = ys[k] - my;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return 0.0;
    }
    (cov / (var_x * var_y).sqrt()).clamp(-1.0, 1.0)
}
