//! Formula evaluation seam.
//!
//! The grid stores formula sources but never evaluates them itself; a
//! [`FormulaEvaluator`] supplied by the embedder resolves them while a
//! [`Table`](crate::table::Table) snapshot is built. Evaluation failure is
//! not fatal: the snapshot falls back to the raw formula text and records
//! a warning.

use thiserror::Error;

use crate::cell::CellValue;
use crate::cell_ref::CellRef;

/// Resolves cell references against the grid a formula belongs to.
/// Returns the stored (unevaluated) value of the referenced cell.
pub type CellLookup<'a> = &'a dyn Fn(CellRef) -> Option<CellValue>;

#[derive(Error, Clone, Debug, PartialEq)]
pub enum EvalError {
    #[error("no formula evaluator installed")]
    Unsupported,

    #[error("formula evaluation failed: {0}")]
    Failed(String),
}

/// An external formula engine.
///
/// Implementations see only the formula source (without the leading '=')
/// and a lookup for other cells' stored values; they hold no grid state.
pub trait FormulaEvaluator {
    fn evaluate(&self, formula: &str, lookup: CellLookup<'_>) -> Result<CellValue, EvalError>;
}

/// Evaluator for embedders without a formula engine: every formula is
/// rejected, so snapshots keep the raw formula text.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullEvaluator;

impl FormulaEvaluator for NullEvaluator {
    fn evaluate(&self, _formula: &str, _lookup: CellLookup<'_>) -> Result<CellValue, EvalError> {
        Err(EvalError::Unsupported)
    }
}

/// Plain functions and closures with the right signature act as evaluators,
/// which keeps test stubs and small embedders free of wrapper types.
impl<F> FormulaEvaluator for F
where
    F: for<'a> Fn(&str, CellLookup<'a>) -> Result<CellValue, EvalError>,
{
    fn evaluate(&self, formula: &str, lookup: CellLookup<'_>) -> Result<CellValue, EvalError> {
        self(formula, lookup)
    }
}
