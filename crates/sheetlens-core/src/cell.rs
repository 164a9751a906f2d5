//! Cell data structures for the sheet grid.
//!
//! This module provides the core data types for representing cells:
//! - [`CellValue`] - A stored scalar (empty, number, text, or boolean)
//! - [`Cell`] - A cell holding a value and, optionally, the formula it came from
//! - [`Grid`] - Thread-safe sparse storage for cells (backed by `DashMap`)
//!
//! Values are never coerced implicitly; [`CellValue::as_number`] is the single
//! place a textual value may be read as a number, and callers get an `Option`.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::cell_ref::CellRef;

/// A scalar value stored in a cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
}

/// Hashable identity of a non-missing value, used for unique counting.
/// Numbers are keyed by their exact bit pattern.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub enum ValueKey<'a> {
    Number(u64),
    Text(&'a str),
    Bool(bool),
}

impl CellValue {
    /// True for cells that count as missing: `Empty` and the empty string.
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Read the value as a number, if it is one.
    ///
    /// Numbers pass through; text parses when it is a numeric string
    /// (so `"42"` and `" 3.5 "` count, `"abc"` does not). Booleans and
    /// empty cells are never numbers.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    /// Display string for the value: blank for empty cells, `TRUE`/`FALSE`
    /// for booleans, plain formatting otherwise.
    pub fn to_display_string(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Text(s) => s.clone(),
            CellValue::Bool(true) => "TRUE".to_string(),
            CellValue::Bool(false) => "FALSE".to_string(),
        }
    }

    /// Identity for unique counting; `None` when the value is missing.
    pub fn unique_key(&self) -> Option<ValueKey<'_>> {
        if self.is_empty() {
            return None;
        }
        match self {
            CellValue::Number(n) => Some(ValueKey::Number(n.to_bits())),
            CellValue::Text(s) => Some(ValueKey::Text(s)),
            CellValue::Bool(b) => Some(ValueKey::Bool(*b)),
            CellValue::Empty => None,
        }
    }
}

/// A cell in the sheet grid.
///
/// Formula cells keep their source (without the leading `=`); their value is
/// resolved when a [`Table`](crate::table::Table) snapshot is built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub value: CellValue,
    pub formula: Option<String>,
}

impl Cell {
    pub fn new_empty() -> Cell {
        Cell {
            value: CellValue::Empty,
            formula: None,
        }
    }

    pub fn new_text(text: &str) -> Cell {
        Cell {
            value: CellValue::Text(text.to_string()),
            formula: None,
        }
    }

    pub fn new_number(n: f64) -> Cell {
        Cell {
            value: CellValue::Number(n),
            formula: None,
        }
    }

    pub fn new_bool(b: bool) -> Cell {
        Cell {
            value: CellValue::Bool(b),
            formula: None,
        }
    }

    /// Create a new formula cell. The source is stored without the '='; the
    /// value stays empty until an evaluator resolves it.
    pub fn new_formula(source: &str) -> Cell {
        Cell {
            value: CellValue::Empty,
            formula: Some(source.to_string()),
        }
    }

    pub fn is_formula(&self) -> bool {
        self.formula.is_some()
    }

    /// Parse user input and create the appropriate cell.
    /// - Empty string or whitespace -> empty cell
    /// - Starts with '=' -> formula (without the '=')
    /// - Quoted string -> text (without quotes)
    /// - Valid number -> number
    /// - Otherwise -> text
    pub fn from_input(input: &str) -> Cell {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Cell::new_empty();
        }

        if let Some(formula) = trimmed.strip_prefix('=') {
            return Cell::new_formula(formula);
        }

        if trimmed.starts_with('"') && trimmed.ends_with('"') && trimmed.len() >= 2 {
            let text = &trimmed[1..trimmed.len() - 1];
            return Cell::new_text(text);
        }

        if let Ok(n) = trimmed.parse::<f64>() {
            return Cell::new_number(n);
        }

        Cell::new_text(trimmed)
    }

    /// Get a display string for the cell content (for editing).
    pub fn to_input_string(&self) -> String {
        match &self.formula {
            Some(source) => format!("={}", source),
            None => self.value.to_display_string(),
        }
    }
}

/// Thread-safe sparse grid storage.
pub type Grid = DashMap<CellRef, Cell>;
