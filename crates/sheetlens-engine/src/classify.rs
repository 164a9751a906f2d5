//! Column classification and the table summary.
//!
//! Every column gets exactly one [`ColumnKind`], decided over its data cells
//! (the header row never votes): numeric when at least 70% of the non-missing
//! values read as numbers, else date when at least 70% read as dates, else
//! text. Numeric strings count toward numeric and never toward date, so a
//! column of `"42"`s cannot drift into the date bucket. Non-finite numerics
//! (`"NaN"`, `"inf"`) are treated as text.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sheetlens_core::{CellValue, Table};

/// Share of non-missing values that must parse for a column to take a kind.
pub const KIND_COVERAGE: f64 = 0.7;

/// Date formats accepted by the classifier: ISO, slash-separated, US-style,
/// plus the T- and space-separated datetime spellings of the ISO form.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Numeric,
    Date,
    Text,
}

/// Per-column classification result. Derived on each analysis, never stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub header: String,
    pub kind: ColumnKind,
    pub missing_count: usize,
    pub unique_count: usize,
}

/// Table-level summary: dimensions plus the classified column partition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataSummary {
    pub total_rows: usize,
    pub total_columns: usize,
    pub numeric_columns: Vec<String>,
    pub text_columns: Vec<String>,
    pub date_columns: Vec<String>,
    pub columns: Vec<ColumnProfile>,
}

/// A numeric reading of a cell, rejecting `NaN` and infinities.
pub(crate) fn finite_number(value: &CellValue) -> Option<f64> {
    value.as_number().filter(|n| n.is_finite())
}

/// All numeric values of a column's data cells, in row order.
pub(crate) fn numeric_values(table: &Table, col: usize) -> Vec<f64> {
    table.data_column(col).filter_map(finite_number).collect()
}

/// Numeric values of a column paired with their table row (1-indexed; the
/// header row is row 0).
pub(crate) fn numeric_values_with_rows(table: &Table, col: usize) -> Vec<(usize, f64)> {
    table
        .data_column(col)
        .enumerate()
        .filter_map(|(i, value)| finite_number(value).map(|n| (i + 1, n)))
        .collect()
}

/// True when the value reads as a calendar date or datetime.
pub fn is_date_like(value: &CellValue) -> bool {
    let CellValue::Text(s) = value else {
        return false;
    };
    let s = s.trim();
    if s.is_empty() || s.parse::<f64>().is_ok() {
        return false;
    }
    DATE_FORMATS
        .iter()
        .any(|fmt| NaiveDate::parse_from_str(s, fmt).is_ok())
        || DATETIME_FORMATS
            .iter()
            .any(|fmt| NaiveDateTime::parse_from_str(s, fmt).is_ok())
}

fn profile_column(table: &Table, col: usize) -> ColumnProfile {
    let header = table.headers()[col].clone();
    let total = table.data_row_count();

    let mut non_empty = 0usize;
    let mut numeric = 0usize;
    let mut dates = 0usize;
    let mut seen = HashSet::new();
    for value in table.data_column(col) {
        let Some(key) = value.unique_key() else {
            continue;
        };
        non_empty += 1;
        seen.insert(key);
        if finite_number(value).is_some() {
            numeric += 1;
        } else if is_date_like(value) {
            dates += 1;
        }
    }

    let coverage = KIND_COVERAGE * non_empty as f64;
    let kind = if non_empty == 0 {
        ColumnKind::Text
    } else if numeric as f64 >= coverage {
        ColumnKind::Numeric
    } else if dates as f64 >= coverage {
        ColumnKind::Date
    } else {
        ColumnKind::Text
    };

    ColumnProfile {
        header,
        kind,
        missing_count: total - non_empty,
        unique_count: seen.len(),
    }
}

/// Classify every column and assemble the table summary.
pub fn summarize(table: &Table) -> DataSummary {
    let columns: Vec<ColumnProfile> = (0..table.column_count())
        .map(|col| profile_column(table, col))
        .collect();

    let mut numeric_columns = Vec::new();
    let mut text_columns = Vec::new();
    let mut date_columns = Vec::new();
    for profile in &columns {
        let bucket = match profile.kind {
            ColumnKind::Numeric => &mut numeric_columns,
            ColumnKind::Text => &mut text_columns,
            ColumnKind::Date => &mut date_columns,
        };
        bucket.push(profile.header.clone());
    }

    DataSummary {
        total_rows: table.data_row_count(),
        total_columns: table.column_count(),
        numeric_columns,
        text_columns,
        date_columns,
        columns,
    }
}
