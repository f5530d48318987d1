use crate::models::metrics::{MetricCards, SummaryMetrics};
use crate::models::sale::SalesRecord;
use crate::models::settings::DashboardSettings;

/// Computes the headline KPIs of a filtered view.
pub struct MetricsService;

impl MetricsService {
    pub fn new() -> Self {
        Self
    }

    /// Total revenue, order count and average order value.
    ///
    /// An empty view has zero revenue, zero orders and no average.
    pub fn summarize(&self, view: &[&SalesRecord]) -> SummaryMetrics {
        let total_revenue: f64 = view.iter().map(|r| r.total_amount).sum();
        let order_count = view.len();
        let average_order_value = if order_count > 0 {
            Some(total_revenue / order_count as f64)
        } else {
            None
        };

        SummaryMetrics {
            total_revenue,
            order_count,
            average_order_value,
        }
    }

    /// Format KPIs for the metric cards, e.g. `"R 12,345"`.
    pub fn cards(&self, metrics: &SummaryMetrics, settings: &DashboardSettings) -> MetricCards {
        let symbol = &settings.currency_symbol;
        MetricCards {
            total_revenue: format_money(symbol, metrics.total_revenue),
            total_orders: metrics.order_count.to_string(),
            average_order_value: match metrics.average_order_value {
                Some(avg) => format_money(symbol, avg),
                None => settings.missing_value_placeholder.clone(),
            },
        }
    }
}

impl Default for MetricsService {
    fn default() -> Self {
        Self::new()
    }
}

/// `"{symbol} {amount}"`, rounded to whole units with thousands separators.
/// Halves round to even, so `2.5` shows as `2`.
pub fn format_money(symbol: &str, amount: f64) -> String {
    let rounded = amount.round_ties_even();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{symbol} {sign}{}", group_thousands(rounded.abs() as u64))
}

/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
