//! Chart data preparation.
//!
//! [`build_chart`] pairs two named columns into render-ready points for an
//! external charting frontend. Rows where either side is missing are dropped;
//! naming a column that does not exist is the one hard error in the engine.

use serde::{Deserialize, Serialize};
use sheetlens_core::{CellValue, Table};

use crate::error::{AnalyticsError, Result};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
    Scatter,
    Histogram,
    Heatmap,
}

impl ChartKind {
    pub fn as_tag(self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
            ChartKind::Scatter => "scatter",
            ChartKind::Histogram => "histogram",
            ChartKind::Heatmap => "heatmap",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "line" => Some(ChartKind::Line),
            "bar" => Some(ChartKind::Bar),
            "pie" => Some(ChartKind::Pie),
            "scatter" => Some(ChartKind::Scatter),
            "histogram" => Some(ChartKind::Histogram),
            "heatmap" => Some(ChartKind::Heatmap),
            _ => None,
        }
    }
}

/// What the caller asks for: a kind, two axis columns, an optional title.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub x_axis: String,
    pub y_axis: String,
    pub title: Option<String>,
}

/// One paired data point. Values keep their cell type so the frontend can
/// format categories and numbers differently.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: CellValue,
    pub y: CellValue,
}

/// Render-ready chart data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub title: String,
    pub x_axis: String,
    pub y_axis: String,
    pub data: Vec<ChartPoint>,
}

/// Pair the two axis columns into chart points.
///
/// Axis names match headers by first occurrence. Rows where either side is
/// missing are dropped. Without an explicit title the chart is titled
/// `"{y} vs {x}"`.
pub fn build_chart(table: &Table, spec: &ChartSpec) -> Result<ChartConfig> {
    let x_col = table
        .column_index(&spec.x_axis)
        .ok_or_else(|| AnalyticsError::ColumnNotFound {
            name: spec.x_axis.clone(),
        })?;
    let y_col = table
        .column_index(&spec.y_axis)
        .ok_or_else(|| AnalyticsError::ColumnNotFound {
            name: spec.y_axis.clone(),
        })?;

    let data = table
        .data_rows()
        .filter_map(|row| {
            let x = &row[x_col];
            let y = &row[y_col];
            if x.is_empty() || y.is_empty() {
                return None;
            }
            Some(ChartPoint {
                x: x.clone(),
                y: y.clone(),
            })
        })
        .collect();

    let title = spec
        .title
        .clone()
        .unwrap_or_else(|| format!("{} vs {}", spec.y_axis, spec.x_axis));

    Ok(ChartConfig {
        kind: spec.kind,
        title,
        x_axis: spec.x_axis.clone(),
        y_axis: spec.y_axis.clone(),
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn sales_table() -> Table {
        Table::from_rows(vec![
            vec![text("month"), text("sales")],
            vec![text("jan"), CellValue::Number(120.0)],
            vec![text("feb"), CellValue::Empty],
            vec![text("mar"), CellValue::Number(90.0)],
            vec![CellValue::Empty, CellValue::Number(70.0)],
        ])
    }

    #[test]
    fn test_unknown_axis_is_an_error() {
        let spec = ChartSpec {
            kind: ChartKind::Line,
            x_axis: "month".to_string(),
            y_axis: "profit".to_string(),
            title: None,
        };
        let err = build_chart(&sales_table(), &spec).unwrap_err();
        assert_eq!(
            err,
            AnalyticsError::ColumnNotFound {
                name: "profit".to_string()
            }
        );
    }

    #[test]
    fn test_pairs_with_missing_sides_dropped() {
        let spec = ChartSpec {
            kind: ChartKind::Bar,
            x_axis: "month".to_string(),
            y_axis: "sales".to_string(),
            title: None,
        };
        let chart = build_chart(&sales_table(), &spec).unwrap();
        assert_eq!(chart.data.len(), 2);
        assert_eq!(
            chart.data[0],
            ChartPoint {
                x: text("jan"),
                y: CellValue::Number(120.0)
            }
        );
        assert_eq!(
            chart.data[1],
            ChartPoint {
                x: text("mar"),
                y: CellValue::Number(90.0)
            }
        );
    }

    #[test]
    fn test_default_title() {
        let spec = ChartSpec {
            kind: ChartKind::Scatter,
            x_axis: "month".to_string(),
            y_axis: "sales".to_string(),
            title: None,
        };
        let chart = build_chart(&sales_table(), &spec).unwrap();
        assert_eq!(chart.title, "sales vs month");
    }

    #[test]
    fn test_explicit_title_kept() {
        let spec = ChartSpec {
            kind: ChartKind::Pie,
            x_axis: "month".to_string(),
            y_axis: "sales".to_string(),
            title: Some("Quarterly sales".to_string()),
        };
        let chart = build_chart(&sales_table(), &spec).unwrap();
        assert_eq!(chart.title, "Quarterly sales");
        assert_eq!(chart.kind, ChartKind::Pie);
    }

    #[test]
    fn test_kind_tags_round_trip() {
        for kind in [
            ChartKind::Line,
            ChartKind::Bar,
            ChartKind::Pie,
            ChartKind::Scatter,
            ChartKind::Histogram,
            ChartKind::Heatmap,
        ] {
            assert_eq!(ChartKind::from_tag(kind.as_tag()), Some(kind));
        }
        assert_eq!(ChartKind::from_tag("sunburst"), None);
    }

    #[test]
    fn test_same_column_on_both_axes() {
        let spec = ChartSpec {
            kind: ChartKind::Line,
            x_axis: "sales".to_string(),
            y_axis: "sales".to_string(),
            title: None,
        };
        let chart = build_chart(&sales_table(), &spec).unwrap();
        assert_eq!(chart.data.len(), 3);
        assert_eq!(chart.title, "sales vs sales");
    }
}
