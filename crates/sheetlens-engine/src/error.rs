//! Error types for the analytics engine.
//!
//! The engine is deliberately permissive: malformed or thin data shrinks the
//! output (columns are skipped, lists come back empty) rather than failing.
//! The only hard error is a caller naming a column that does not exist.

use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq)]
pub enum AnalyticsError {
    #[error("column not found: {name}")]
    ColumnNotFound { name: String },
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;
