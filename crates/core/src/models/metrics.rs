use serde::{Deserialize, Serialize};

/// Headline KPIs of the filtered view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    /// Sum of `total_amount`
    pub total_revenue: f64,

    /// Number of transactions
    pub order_count: usize,

    /// Mean `total_amount`; `None` when there are no orders
    pub average_order_value: Option<f64>,
}

/// KPI values formatted for display, e.g. `"R 12,345"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricCards {
    pub total_revenue: String,
    pub total_orders: String,
    pub average_order_value: String,
}
