//! sheetlens-engine - analytics passes over table snapshots.
//!
//! Each pass is a free function over a [`Table`](sheetlens_core::Table) and
//! the classified column profiles; [`analyze`] composes them into one
//! [`DataAnalytics`] aggregate.

pub mod analyze;
pub mod chart;
pub mod classify;
pub mod correlate;
pub mod distribution;
pub mod error;
pub mod outlier;
pub mod stats;
pub mod trend;

pub use analyze::{analyze, DataAnalytics};
pub use chart::{build_chart, ChartConfig, ChartKind, ChartPoint, ChartSpec};
pub use classify::{is_date_like, summarize, ColumnKind, ColumnProfile, DataSummary};
pub use correlate::{correlation_matrix, pearson, CorrelationMatrix};
pub use distribution::{distributions, DistributionSummary, HistogramBin, Quartiles};
pub use error::{AnalyticsError, Result};
pub use outlier::{detect_outliers, Outlier, OutlierReport};
pub use trend::{column_trends, fit_trend, TrendAnalysis, TrendKind};
