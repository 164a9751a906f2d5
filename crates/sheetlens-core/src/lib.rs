//! sheetlens-core - sheet data model: cells, references, snapshots.

pub mod cell;
pub mod cell_ref;
pub mod eval;
pub mod table;

pub use cell::{Cell, CellValue, Grid, ValueKey};
pub use cell_ref::{column_letters, parse_column_letters, CellRef};
pub use eval::{CellLookup, EvalError, FormulaEvaluator, NullEvaluator};
pub use table::Table;
