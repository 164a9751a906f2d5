//! Tabular analytics for sparse spreadsheet grids.
//!
//! Feed a sparse [`Grid`] of cells through [`Table::from_grid`] and hand the
//! snapshot to [`analyze`]: every column is classified, numeric columns get
//! summary statistics, correlations, trends with a short forecast, outlier
//! reports and distribution summaries. [`build_chart`] prepares render-ready
//! chart data from the same snapshot.

pub use sheetlens_core::{
    column_letters, parse_column_letters, Cell, CellLookup, CellRef, CellValue, EvalError,
    FormulaEvaluator, Grid, NullEvaluator, Table, ValueKey,
};
pub use sheetlens_engine::{
    analyze, build_chart, column_trends, correlation_matrix, detect_outliers, distributions,
    is_date_like, summarize, AnalyticsError, ChartConfig, ChartKind, ChartPoint, ChartSpec,
    ColumnKind, ColumnProfile, CorrelationMatrix, DataAnalytics, DataSummary,
    DistributionSummary, HistogramBin, Outlier, OutlierReport, Quartiles, Result, TrendAnalysis,
    TrendKind,
};
