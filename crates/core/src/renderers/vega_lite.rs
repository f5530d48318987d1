use serde_json::{json, Map, Value};

use crate::errors::CoreError;
use crate::models::chart::{AxisSort, ChartKind, ChartSpec, FieldRole, FieldType};

use super::traits::ChartRenderer;

const SCHEMA_URL: &str = "https://vega.github.io/schema/vega-lite/v5.json";

/// Renders chart specs as Vega-Lite v5 JSON documents.
///
/// Data is inlined as `data.values`, one object per table row.
#[derive(Debug, Clone, Default)]
pub struct VegaLiteRenderer;

impl VegaLiteRenderer {
    pub fn new() -> Self {
        Self
    }

    fn mark(kind: ChartKind) -> Value {
        match kind {
            ChartKind::Bar => json!("bar"),
            ChartKind::Line { points: false } => json!("line"),
            ChartKind::Line { points: true } => json!({ "type": "line", "point": true }),
            ChartKind::Arc => json!("arc"),
        }
    }

    fn field_type(field_type: FieldType) -> &'static str {
        match field_type {
            FieldType::Quantitative => "quantitative",
            FieldType::Nominal => "nominal",
            FieldType::Temporal => "temporal",
        }
    }

    fn channel(role: &FieldRole) -> Value {
        let mut channel = Map::new();
        channel.insert("field".into(), json!(role.field));
        channel.insert("type".into(), json!(Self::field_type(role.field_type)));

        if let Some(sort) = &role.sort {
            let sort = match sort {
                AxisSort::DescendingByX => "-x",
                AxisSort::Ascending => "ascending",
            };
            channel.insert("sort".into(), json!(sort));
        }

        if let Some(scale) = &role.scale {
            let mut s = Map::new();
            if let Some((lo, hi)) = scale.domain {
                s.insert("domain".into(), json!([lo, hi]));
            }
            if let Some(zero) = scale.zero {
                s.insert("zero".into(), json!(zero));
            }
            channel.insert("scale".into(), Value::Object(s));
        }

        Value::Object(channel)
    }

    /// Every field the encoding references must be a column of the table.
    fn check_fields(&self, spec: &ChartSpec) -> Result<(), CoreError> {
        let enc = &spec.encoding;
        let roles = [&enc.x, &enc.y, &enc.color, &enc.theta]
            .into_iter()
            .flatten()
            .chain(enc.tooltip.iter());

        for role in roles {
            if spec.data.column_index(&role.field).is_none() {
                return Err(CoreError::RenderError {
                    renderer: self.name().to_string(),
                    message: format!("encoded field '{}' is not a data column", role.field),
                });
            }
        }
        Ok(())
    }

    fn values(spec: &ChartSpec) -> Result<Value, CoreError> {
        let mut rows = Vec::with_capacity(spec.data.len());
        for row in &spec.data.rows {
            let mut obj = Map::new();
            for (col, cell) in spec.data.columns.iter().zip(row) {
                let value = serde_json::to_value(cell).map_err(|e| {
                    CoreError::Serialization(format!("Failed to serialize cell '{col}': {e}"))
                })?;
                obj.insert(col.clone(), value);
            }
            rows.push(Value::Object(obj));
        }
        Ok(Value::Array(rows))
    }
}

impl ChartRenderer for VegaLiteRenderer {
    type Output = Value;

    fn name(&self) -> &str {
        "VegaLite"
    }

    fn render(&self, spec: &ChartSpec) -> Result<Value, CoreError> {
        self.check_fields(spec)?;

        let mut encoding = Map::new();
        let channels = [
            ("x", &spec.encoding.x),
            ("y", &spec.encoding.y),
            ("color", &spec.encoding.color),
            ("theta", &spec.encoding.theta),
        ];
        for (name, role) in channels {
            if let Some(role) = role {
                encoding.insert(name.into(), Self::channel(role));
            }
        }
        if !spec.encoding.tooltip.is_empty() {
            let tooltip: Vec<Value> = spec.encoding.tooltip.iter().map(Self::channel).collect();
            encoding.insert("tooltip".into(), Value::Array(tooltip));
        }

        let mut doc = Map::new();
        doc.insert("$schema".into(), json!(SCHEMA_URL));
        if let Some(title) = &spec.title {
            doc.insert("title".into(), json!(title));
        }
        doc.insert("mark".into(), Self::mark(spec.kind));
        doc.insert("height".into(), json!(spec.height));
        doc.insert("width".into(), json!("container"));
        doc.insert("data".into(), json!({ "values": Self::values(spec)? }));
        doc.insert("encoding".into(), Value::Object(encoding));

        Ok(Value::Object(doc))
    }
}
