pub mod errors;
pub mod loader;
pub mod models;
pub mod renderers;
pub mod services;

#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

use loader::manager::DatasetLoader;
use models::{
    aggregation::Grouping,
    chart::{ChartPanel, ChartSpec},
    dataset::SalesDataset,
    filter::{FilterSelection, TimeWindow},
    metrics::SummaryMetrics,
    profile::{ContactAcknowledgment, ContactSubmission, ProfilePage, SkillRating},
    sale::SalesRecord,
    settings::DashboardSettings,
    view::{ControlOptions, DashboardView, RenderedCharts, RenderedPanel},
};
use renderers::traits::ChartRenderer;
use services::{
    aggregation_service::AggregationService, chart_service::ChartService,
    filter_service::FilterService, metrics_service::MetricsService,
    profile_service::ProfileService,
};

use errors::CoreError;

/// Main entry point for the retail sales dashboard.
///
/// Owns the loaded dataset read-only for the whole session. Every control
/// change calls `render` afresh; nothing carries over between calls.
#[must_use]
pub struct SalesDashboard {
    dataset: SalesDataset,
    settings: DashboardSettings,
    filter_service: FilterService,
    aggregation_service: AggregationService,
    metrics_service: MetricsService,
    chart_service: ChartService,
}

impl std::fmt::Debug for SalesDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SalesDashboard")
            .field("records", &self.dataset.len())
            .field("categories", &self.dataset.categories())
            .field("genders", &self.dataset.genders())
            .field("settings", &self.settings)
            .finish()
    }
}

impl SalesDashboard {
    /// Wrap an already-loaded dataset with default settings.
    pub fn new(dataset: SalesDataset) -> Self {
        Self::with_settings(dataset, DashboardSettings::default())
    }

    pub fn with_settings(dataset: SalesDataset, settings: DashboardSettings) -> Self {
        Self {
            dataset,
            settings,
            filter_service: FilterService::new(),
            aggregation_service: AggregationService::new(),
            metrics_service: MetricsService::new(),
            chart_service: ChartService::new(),
        }
    }

    /// Load the sales CSV from raw bytes.
    pub fn load_from_bytes(data: &[u8]) -> Result<Self, CoreError> {
        Ok(Self::new(DatasetLoader::load_from_bytes(data)?))
    }

    /// Load the sales CSV from disk (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        Ok(Self::new(DatasetLoader::load_from_file(path)?))
    }

    // ── Accessors ───────────────────────────────────────────────────

    #[must_use]
    pub fn dataset(&self) -> &SalesDataset {
        &self.dataset
    }

    #[must_use]
    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    /// Replace the display settings. The dataset is untouched.
    pub fn set_settings(&mut self, settings: DashboardSettings) {
        self.settings = settings;
    }

    // ── Controls ────────────────────────────────────────────────────

    /// Options offered by the filter controls.
    #[must_use]
    pub fn control_options(&self) -> ControlOptions {
        ControlOptions {
            time_windows: TimeWindow::ALL.to_vec(),
            categories: self.dataset.sorted_categories(),
            genders: self.dataset.sorted_genders(),
            quantity_bounds: self.dataset.quantity_bounds(),
            date_range: self.dataset.min_date().zip(self.dataset.max_date()),
        }
    }

    /// The control state before the user touches anything.
    #[must_use]
    pub fn default_selection(&self) -> FilterSelection {
        FilterSelection::defaults_for(&self.dataset)
    }

    // ── Pipeline stages ─────────────────────────────────────────────

    /// Records passing every predicate of `selection`, in dataset order.
    #[must_use]
    pub fn filtered_view(&self, selection: &FilterSelection) -> Vec<&SalesRecord> {
        self.filter_service.apply(&self.dataset, selection)
    }

    /// KPIs for a selection.
    #[must_use]
    pub fn summary_metrics(&self, selection: &FilterSelection) -> SummaryMetrics {
        self.metrics_service.summarize(&self.filtered_view(selection))
    }

    // ── Render ──────────────────────────────────────────────────────

    /// Compute everything one interaction shows: filter once, then branch
    /// into the independent aggregations, charts and KPIs.
    #[must_use]
    pub fn render(&self, selection: &FilterSelection) -> DashboardView {
        let view = self.filter_service.apply(&self.dataset, selection);

        let trend_view = self
            .filter_service
            .trend_subset(&view, &selection.trend_categories);
        let trend = if trend_view.is_empty() {
            ChartPanel::NoData {
                message: self.settings.no_data_message.clone(),
            }
        } else {
            let series = self.aggregation_service.trend_series(
                &trend_view,
                selection.split_by_gender,
                &self.settings.series_separator,
            );
            self.chart_service
                .trend_chart(&series, selection.split_by_gender, &self.settings)
        };

        let metrics = self.metrics_service.summarize(&view);
        let metric_cards = self.metrics_service.cards(&metrics, &self.settings);

        let by_category = self.aggregation_service.aggregate(&view, Grouping::Category);
        let by_gender = self.aggregation_service.aggregate(&view, Grouping::Gender);
        let by_date = self.aggregation_service.aggregate(&view, Grouping::Date);

        DashboardView {
            controls: self.control_options(),
            trend,
            metrics,
            metric_cards,
            sales_by_category: self.chart_service.category_chart(&by_category, &self.settings),
            sales_by_gender: self.chart_service.gender_chart(&by_gender, &self.settings),
            sales_over_time: self.chart_service.daily_chart(&by_date, &self.settings),
            table: view.into_iter().cloned().collect(),
        }
    }

    /// Render a selection straight to JSON for a frontend.
    pub fn render_json(&self, selection: &FilterSelection) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.render(selection))
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize view: {e}")))
    }

    /// Hand every chart panel of a view to a renderer.
    /// "No data" panels are passed through untouched.
    pub fn render_charts<R: ChartRenderer>(
        &self,
        view: &DashboardView,
        renderer: &R,
    ) -> Result<RenderedCharts<R::Output>, CoreError> {
        let mut panels = Vec::with_capacity(4);
        for (name, panel) in view.panels() {
            let rendered = match panel {
                ChartPanel::Chart(spec) => RenderedPanel::Rendered(renderer.render(spec)?),
                ChartPanel::NoData { message } => RenderedPanel::NoData {
                    message: message.clone(),
                },
            };
            panels.push((name, rendered));
        }
        log::debug!("rendered {} panels with {}", panels.len(), renderer.name());
        Ok(RenderedCharts { panels })
    }
}

/// Entry point for the research portfolio page.
#[must_use]
#[derive(Default)]
pub struct ResearchPortfolio {
    page: ProfilePage,
    settings: DashboardSettings,
    profile_service: ProfileService,
}

impl ResearchPortfolio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: DashboardSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Static page content.
    #[must_use]
    pub fn page(&self) -> &ProfilePage {
        &self.page
    }

    /// Skills, highest level first.
    #[must_use]
    pub fn ranked_skills(&self) -> Vec<SkillRating> {
        self.profile_service.ranked_skills()
    }

    #[must_use]
    pub fn skill_chart(&self) -> ChartSpec {
        self.profile_service.skill_chart(&self.settings)
    }

    pub fn render_skill_chart<R: ChartRenderer>(&self, renderer: &R) -> Result<R::Output, CoreError> {
        renderer.render(&self.skill_chart())
    }

    /// Validate the demo contact form and acknowledge it locally.
    pub fn submit_contact(
        &self,
        submission: &ContactSubmission,
    ) -> Result<ContactAcknowledgment, CoreError> {
        self.profile_service.submit_contact(submission)
    }

    /// Footer line for the current year.
    #[must_use]
    pub fn footer(&self) -> String {
        use chrono::Datelike;
        self.page.footer(chrono::Utc::now().year())
    }
}
