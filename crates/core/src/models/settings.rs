use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Display configuration for the dashboard and portfolio pages.
///
/// Every field has a default, so a partial JSON document is enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Prefix for money values (e.g., "R", "$", "€")
    pub currency_symbol: String,

    /// Joins category and gender into a trend series label
    pub series_separator: String,

    /// Height of the trend chart in pixels
    pub trend_chart_height: u32,

    /// Height of the category/gender/daily breakdown charts
    pub breakdown_chart_height: u32,

    /// Height of the portfolio skill chart
    pub skill_chart_height: u32,

    /// Shown in place of a chart when its data is empty
    pub no_data_message: String,

    /// Shown in place of the average order value when there are no orders
    pub missing_value_placeholder: String,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            currency_symbol: "R".to_string(),
            series_separator: " - ".to_string(),
            trend_chart_height: 400,
            breakdown_chart_height: 300,
            skill_chart_height: 350,
            no_data_message: "No data for the selected filters.".to_string(),
            missing_value_placeholder: "N/A".to_string(),
        }
    }
}

impl DashboardSettings {
    /// Parse settings from JSON; missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings = serde_json::from_str(json)?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize settings: {e}")))
    }
}
