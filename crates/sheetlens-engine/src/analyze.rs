//! Whole-table analysis.

use serde::{Deserialize, Serialize};
use sheetlens_core::Table;

use crate::classify::{self, DataSummary};
use crate::correlate::{self, CorrelationMatrix};
use crate::distribution::{self, DistributionSummary};
use crate::outlier::{self, OutlierReport};
use crate::trend::{self, TrendAnalysis};

/// Everything the engine knows about one table snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataAnalytics {
    pub summary: DataSummary,
    pub correlations: CorrelationMatrix,
    pub trends: Vec<TrendAnalysis>,
    pub outliers: Vec<OutlierReport>,
    pub distributions: Vec<DistributionSummary>,
}

/// Run every analysis pass over the table.
///
/// Classification runs once and feeds the numeric passes; the passes do not
/// depend on each other. Degenerate tables produce empty component lists,
/// never an error.
pub fn analyze(table: &Table) -> DataAnalytics {
    let summary = classify::summarize(table);
    let correlations = correlate::correlation_matrix(table, &summary.columns);
    let trends = trend::column_trends(table, &summary.columns);
    let outliers = outlier::detect_outliers(table, &summary.columns);
    let distributions = distribution::distributions(table, &summary.columns);
    DataAnalytics {
        summary,
        correlations,
        trends,
        outliers,
        distributions,
    }
}
