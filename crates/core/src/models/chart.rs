use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Mark used to draw a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Bar,
    /// `points` overlays a marker on every data point
    Line { points: bool },
    /// Pie / arc chart
    Arc,
}

/// How a column is interpreted by the charting collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    Quantitative,
    Nominal,
    Temporal,
}

/// Sort applied to a categorical axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisSort {
    /// Descending by the value plotted on the x channel
    DescendingByX,
    Ascending,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub domain: Option<(f64, f64)>,
    /// `Some(false)` lets the axis start away from zero
    pub zero: Option<bool>,
}

/// A column bound to a visual channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRole {
    pub field: String,
    pub field_type: FieldType,
    pub sort: Option<AxisSort>,
    pub scale: Option<Scale>,
}

impl FieldRole {
    pub fn new(field: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            field: field.into(),
            field_type,
            sort: None,
            scale: None,
        }
    }

    pub fn quantitative(field: impl Into<String>) -> Self {
        Self::new(field, FieldType::Quantitative)
    }

    pub fn nominal(field: impl Into<String>) -> Self {
        Self::new(field, FieldType::Nominal)
    }

    pub fn temporal(field: impl Into<String>) -> Self {
        Self::new(field, FieldType::Temporal)
    }

    #[must_use]
    pub fn with_sort(mut self, sort: AxisSort) -> Self {
        self.sort = Some(sort);
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = Some(scale);
        self
    }
}

/// Column-role mapping for one chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Encoding {
    pub x: Option<FieldRole>,
    pub y: Option<FieldRole>,
    pub color: Option<FieldRole>,
    pub theta: Option<FieldRole>,
    pub tooltip: Vec<FieldRole>,
}

/// A single table cell.
///
/// Serialized untagged as a bare JSON value. Dates and text share the JSON
/// string form, so cells are write-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Date(NaiveDate),
    Integer(i64),
    Number(f64),
    Text(String),
}

/// A prepared table: column names plus rows in column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DataTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl DataTable {
    pub fn new(columns: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<CellValue>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Index of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// All values of one column, top to bottom.
    pub fn column(&self, name: &str) -> Option<Vec<&CellValue>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().filter_map(|row| row.get(idx)).collect())
    }
}

/// Everything the charting collaborator needs to draw one chart.
///
/// The core fills in all numbers; the collaborator only draws them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: Option<String>,
    pub kind: ChartKind,
    pub height: u32,
    pub encoding: Encoding,
    pub data: DataTable,
}

/// A chart slot on the page: either a chart or an informational notice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ChartPanel {
    Chart(ChartSpec),
    NoData { message: String },
}

impl ChartPanel {
    pub fn is_no_data(&self) -> bool {
        matches!(self, ChartPanel::NoData { .. })
    }

    pub fn spec(&self) -> Option<&ChartSpec> {
        match self {
            ChartPanel::Chart(spec) => Some(spec),
            ChartPanel::NoData { .. } => None,
        }
    }
}
