//! Dense table snapshots of the sparse grid.
//!
//! Analysis never reads the grid directly: [`Table::from_grid`] materializes
//! a rectangular, fully-owned snapshot sized by the furthest occupied cell,
//! resolving formulas through the supplied evaluator. Row 0 of the snapshot
//! is the header row; a blank header cell is named `Column N`.

use crate::cell::{CellValue, Grid};
use crate::cell_ref::CellRef;
use crate::eval::FormulaEvaluator;

/// A rectangular snapshot of a grid.
///
/// Rows are rectangular by construction and row 0 is the header row, so a
/// table with `n` rows has `n - 1` data rows. Mutating the source grid after
/// the snapshot was taken does not change the table.
#[derive(Clone, Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<CellValue>>,
    warnings: Vec<String>,
}

impl Table {
    /// The empty table: no rows, no columns, no headers.
    pub fn empty() -> Table {
        Table {
            headers: Vec::new(),
            rows: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Materialize a dense snapshot of `grid`.
    ///
    /// Dimensions come from the furthest occupied cell; unoccupied positions
    /// become [`CellValue::Empty`]. Formula cells are resolved through
    /// `evaluator`; when evaluation fails the cell keeps the formula text in
    /// its input form (`=...`) and a warning is recorded on the table.
    pub fn from_grid(grid: &Grid, evaluator: &dyn FormulaEvaluator) -> Table {
        let mut max_row = 0usize;
        let mut max_col = 0usize;
        for entry in grid.iter() {
            max_row = max_row.max(entry.key().row);
            max_col = max_col.max(entry.key().col);
        }
        if max_row == 0 || max_col == 0 {
            return Table::empty();
        }

        let lookup = |r: CellRef| grid.get(&r).map(|entry| entry.value().value.clone());

        let mut rows = vec![vec![CellValue::Empty; max_col]; max_row];
        let mut warnings = Vec::new();
        for row in 1..=max_row {
            for col in 1..=max_col {
                let cell_ref = CellRef::new(col, row);
                // Clone out of the map so no shard guard is held during evaluation.
                let Some(cell) = grid.get(&cell_ref).map(|entry| entry.value().clone()) else {
                    continue;
                };
                let value = match &cell.formula {
                    Some(source) => match evaluator.evaluate(source, &lookup) {
                        Ok(value) => value,
                        Err(err) => {
                            warnings.push(format!("formula at {} not evaluated: {}", cell_ref, err));
                            CellValue::Text(format!("={}", source))
                        }
                    },
                    None => cell.value,
                };
                rows[row - 1][col - 1] = value;
            }
        }

        let headers = header_names(&rows);
        Table {
            headers,
            rows,
            warnings,
        }
    }

    /// Build a table directly from rows (row 0 being the header row).
    /// Ragged rows are padded with empty cells to the widest row.
    pub fn from_rows(mut rows: Vec<Vec<CellValue>>) -> Table {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if width == 0 {
            return Table::empty();
        }
        for row in &mut rows {
            row.resize(width, CellValue::Empty);
        }
        let headers = header_names(&rows);
        Table {
            headers,
            rows,
            warnings: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows including the header row.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows (the header row excluded).
    pub fn data_row_count(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Position of the first column whose header equals `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// The value at (row, col), 0-indexed with row 0 the header row.
    pub fn get(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row)?.get(col)
    }

    /// The data cells of one column, top to bottom (header excluded).
    pub fn data_column(&self, col: usize) -> impl Iterator<Item = &CellValue> + '_ {
        self.rows.iter().skip(1).filter_map(move |row| row.get(col))
    }

    /// The data rows, in order (header excluded).
    pub fn data_rows(&self) -> impl Iterator<Item = &[CellValue]> + '_ {
        self.rows.iter().skip(1).map(Vec::as_slice)
    }

    /// Warnings recorded while the snapshot was built (formula fallbacks).
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

fn header_names(rows: &[Vec<CellValue>]) -> Vec<String> {
    let Some(header_row) = rows.first() else {
        return Vec::new();
    };
    header_row
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let name = value.to_display_string();
            if name.is_empty() {
                format!("Column {}", i + 1)
            } else {
                name
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::eval::{CellLookup, EvalError, NullEvaluator};

    fn grid_from(cells: &[(&str, &str)]) -> Grid {
        let grid = Grid::new();
        for (name, input) in cells {
            let cell_ref = CellRef::parse(name).unwrap();
            grid.insert(cell_ref, Cell::from_input(input));
        }
        grid
    }

    #[test]
    fn test_empty_grid_is_empty_table() {
        let grid = Grid::new();
        let table = Table::from_grid(&grid, &NullEvaluator);
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
        assert_eq!(table.data_row_count(), 0);
        assert!(table.headers().is_empty());
    }

    #[test]
    fn test_dimensions_follow_furthest_cell() {
        let grid = grid_from(&[("A1", "x"), ("C4", "9")]);
        let table = Table::from_grid(&grid, &NullEvaluator);
        assert_eq!(table.row_count(), 4);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.data_row_count(), 3);
        assert_eq!(table.get(3, 2), Some(&CellValue::Number(9.0)));
        assert_eq!(table.get(1, 0), Some(&CellValue::Empty));
    }

    #[test]
    fn test_header_row_and_placeholders() {
        let grid = grid_from(&[("A1", "name"), ("C1", "score"), ("A2", "ada"), ("C2", "10")]);
        let table = Table::from_grid(&grid, &NullEvaluator);
        assert_eq!(table.headers(), &["name", "Column 2", "score"]);
        assert_eq!(table.column_index("score"), Some(2));
        assert_eq!(table.column_index("missing"), None);
    }

    #[test]
    fn test_headers_all_placeholder_when_first_row_vacant() {
        let grid = grid_from(&[("A3", "1"), ("B3", "2")]);
        let table = Table::from_grid(&grid, &NullEvaluator);
        assert_eq!(table.headers(), &["Column 1", "Column 2"]);
    }

    #[test]
    fn test_formula_resolved_by_evaluator() {
        fn doubler(formula: &str, lookup: CellLookup<'_>) -> Result<CellValue, EvalError> {
            let target = CellRef::parse(formula).ok_or(EvalError::Unsupported)?;
            let value = lookup(target).ok_or_else(|| EvalError::Failed("empty ref".into()))?;
            let n = value.as_number().ok_or_else(|| EvalError::Failed("not a number".into()))?;
            Ok(CellValue::Number(n * 2.0))
        }

        let grid = grid_from(&[("A1", "v"), ("A2", "21"), ("A3", "=A2")]);
        let table = Table::from_grid(&grid, &doubler);
        assert_eq!(table.get(2, 0), Some(&CellValue::Number(42.0)));
        assert!(table.warnings().is_empty());
    }

    #[test]
    fn test_formula_failure_falls_back_to_source() {
        let grid = grid_from(&[("A1", "v"), ("A2", "=SUM(B1:B9)")]);
        let table = Table::from_grid(&grid, &NullEvaluator);
        assert_eq!(
            table.get(1, 0),
            Some(&CellValue::Text("=SUM(B1:B9)".to_string()))
        );
        assert_eq!(table.warnings().len(), 1);
        assert!(table.warnings()[0].contains("A2"));
    }

    #[test]
    fn test_snapshot_is_independent_of_grid() {
        let grid = grid_from(&[("A1", "h"), ("A2", "1")]);
        let table = Table::from_grid(&grid, &NullEvaluator);
        grid.insert(CellRef::parse("A2").unwrap(), Cell::new_number(99.0));
        grid.insert(CellRef::parse("B5").unwrap(), Cell::new_text("late"));
        assert_eq!(table.get(1, 0), Some(&CellValue::Number(1.0)));
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 1);
    }

    #[test]
    fn test_from_rows_pads_ragged_rows() {
        let table = Table::from_rows(vec![
            vec![
                CellValue::Text("a".to_string()),
                CellValue::Text("b".to_string()),
            ],
            vec![CellValue::Number(1.0)],
        ]);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.get(1, 1), Some(&CellValue::Empty));
    }

    #[test]
    fn test_from_rows_empty() {
        assert!(Table::from_rows(Vec::new()).is_empty());
        assert!(Table::from_rows(vec![Vec::new(), Vec::new()]).is_empty());
    }

    #[test]
    fn test_data_column_skips_header() {
        let table = Table::from_rows(vec![
            vec![CellValue::Text("n".to_string())],
            vec![CellValue::Number(1.0)],
            vec![CellValue::Number(2.0)],
        ]);
        let column: Vec<_> = table.data_column(0).cloned().collect();
        assert_eq!(column, vec![CellValue::Number(1.0), CellValue::Number(2.0)]);
    }
}
