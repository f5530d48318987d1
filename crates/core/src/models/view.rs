use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::chart::ChartPanel;
use super::filter::TimeWindow;
use super::metrics::{MetricCards, SummaryMetrics};
use super::sale::SalesRecord;

/// Choices offered by the filter controls, derived from the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlOptions {
    pub time_windows: Vec<TimeWindow>,
    /// Sorted alphabetically
    pub categories: Vec<String>,
    /// Sorted alphabetically
    pub genders: Vec<String>,
    /// Slider bounds: the dataset's true min/max quantity
    pub quantity_bounds: Option<(u32, u32)>,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
}

/// Everything one interaction puts on screen.
///
/// Built fresh by `SalesDashboard::render` for every selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub controls: ControlOptions,
    pub trend: ChartPanel,
    pub metrics: SummaryMetrics,
    pub metric_cards: MetricCards,
    pub sales_by_category: ChartPanel,
    pub sales_by_gender: ChartPanel,
    pub sales_over_time: ChartPanel,
    /// The filtered view, in dataset order
    pub table: Vec<SalesRecord>,
}

impl DashboardView {
    /// Chart panels in page order.
    pub fn panels(&self) -> [(&'static str, &ChartPanel); 4] {
        [
            ("trend", &self.trend),
            ("sales_by_category", &self.sales_by_category),
            ("sales_by_gender", &self.sales_by_gender),
            ("sales_over_time", &self.sales_over_time),
        ]
    }
}

/// A chart panel after it went through a renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedPanel<T> {
    Rendered(T),
    NoData { message: String },
}

/// Output of a renderer for every panel of a view, keyed by panel name.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCharts<T> {
    pub panels: Vec<(&'static str, RenderedPanel<T>)>,
}

impl<T> RenderedCharts<T> {
    pub fn get(&self, name: &str) -> Option<&RenderedPanel<T>> {
        self.panels.iter().find(|(n, _)| *n == name).map(|(_, p)| p)
    }
}
