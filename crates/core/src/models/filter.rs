use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::dataset::SalesDataset;
use crate::errors::CoreError;

/// Relative date window, measured back from the dataset's latest date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeWindow {
    /// No date restriction
    #[default]
    All,
    Last7Days,
    LastMonth,
    Last3Months,
    Last6Months,
}

impl TimeWindow {
    /// Every window, in control order.
    pub const ALL: [TimeWindow; 5] = [
        TimeWindow::All,
        TimeWindow::Last7Days,
        TimeWindow::LastMonth,
        TimeWindow::Last3Months,
        TimeWindow::Last6Months,
    ];

    /// Number of days looked back, or `None` for an unrestricted window.
    #[must_use]
    pub fn days(self) -> Option<i64> {
        match self {
            TimeWindow::All => None,
            TimeWindow::Last7Days => Some(7),
            TimeWindow::LastMonth => Some(30),
            TimeWindow::Last3Months => Some(90),
            TimeWindow::Last6Months => Some(180),
        }
    }

    /// Label shown in the time range control.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TimeWindow::All => "All",
            TimeWindow::Last7Days => "Last 7 days",
            TimeWindow::LastMonth => "Last 1 month",
            TimeWindow::Last3Months => "Last 3 months",
            TimeWindow::Last6Months => "Last 6 months",
        }
    }

    /// Parse a control label back into a window.
    pub fn from_label(label: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|w| w.label() == label.trim())
            .ok_or_else(|| {
                log::warn!("unknown time window label '{label}'");
                CoreError::ValidationError(format!("Unknown time window '{label}'"))
            })
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Inclusive quantity bounds chosen on the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityRange {
    pub min: u32,
    pub max: u32,
}

impl QuantityRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Intersect this range with the dataset's true `(min, max)` quantity.
    /// A range disjoint from the bounds comes out inverted and matches nothing.
    #[must_use]
    pub fn clamped_to(self, bounds: (u32, u32)) -> Self {
        let (lo, hi) = bounds;
        Self {
            min: self.min.max(lo),
            max: self.max.min(hi),
        }
    }

    #[must_use]
    pub fn contains(&self, quantity: u32) -> bool {
        self.min <= quantity && quantity <= self.max
    }
}

impl Default for QuantityRange {
    fn default() -> Self {
        Self {
            min: 0,
            max: u32::MAX,
        }
    }
}

/// Everything the user selected on the controls for one interaction.
///
/// Rebuilt from scratch on every control change; it carries no identity.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterSelection {
    pub time_window: TimeWindow,

    /// Accepted product categories. Empty means nothing matches.
    pub categories: BTreeSet<String>,

    /// Accepted genders. Empty means nothing matches.
    pub genders: BTreeSet<String>,

    pub quantity: QuantityRange,

    /// Categories drawn in the trend chart
    pub trend_categories: BTreeSet<String>,

    /// Draw one trend line per (category, gender) pair
    pub split_by_gender: bool,
}

impl FilterSelection {
    /// Initial control state: every category and gender, the full quantity
    /// range, no date restriction, no gender split.
    pub fn defaults_for(dataset: &SalesDataset) -> Self {
        let categories: BTreeSet<String> = dataset.categories().iter().cloned().collect();
        let (min, max) = dataset.quantity_bounds().unwrap_or((0, 0));
        Self {
            time_window: TimeWindow::All,
            trend_categories: categories.clone(),
            categories,
            genders: dataset.genders().iter().cloned().collect(),
            quantity: QuantityRange::new(min, max),
            split_by_gender: false,
        }
    }

    #[must_use]
    pub fn with_time_window(mut self, window: TimeWindow) -> Self {
        self.time_window = window;
        self
    }

    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_genders<I, S>(mut self, genders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genders = genders.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_quantity(mut self, min: u32, max: u32) -> Self {
        self.quantity = QuantityRange::new(min, max);
        self
    }

    #[must_use]
    pub fn with_trend_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.trend_categories = categories.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_split_by_gender(mut self, split: bool) -> Self {
        self.split_by_gender = split;
        self
    }
}
