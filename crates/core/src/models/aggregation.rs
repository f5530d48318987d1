use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which dimensions an aggregation groups by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grouping {
    Category,
    Gender,
    Date,
    DateCategory,
    DateCategoryGender,
}

impl Grouping {
    pub fn uses_date(self) -> bool {
        matches!(
            self,
            Grouping::Date | Grouping::DateCategory | Grouping::DateCategoryGender
        )
    }

    pub fn uses_category(self) -> bool {
        matches!(
            self,
            Grouping::Category | Grouping::DateCategory | Grouping::DateCategoryGender
        )
    }

    pub fn uses_gender(self) -> bool {
        matches!(self, Grouping::Gender | Grouping::DateCategoryGender)
    }
}

/// Group identity. Dimensions not used by the grouping stay `None`.
///
/// Ordering is by date, then category, then gender, which is also the
/// row order of every `AggregationResult`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupKey {
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
    pub gender: Option<String>,
}

/// One group and its summed sales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateRow {
    pub key: GroupKey,
    pub total_amount: f64,
}

/// Grouped-and-summed table feeding one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationResult {
    pub grouping: Grouping,
    pub rows: Vec<AggregateRow>,
}

impl AggregationResult {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Sum of the measure column.
    pub fn total(&self) -> f64 {
        self.rows.iter().map(|r| r.total_amount).sum()
    }

    /// Look up the summed amount for a key, if that group exists.
    pub fn get(&self, key: &GroupKey) -> Option<f64> {
        self.rows
            .binary_search_by(|row| row.key.cmp(key))
            .ok()
            .map(|idx| self.rows[idx].total_amount)
    }
}

/// A single point on a trend line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub sales: f64,
}

/// One labeled line of the trend chart.
///
/// Keyed by category, or by category and gender when the trend is split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    pub label: String,
    pub category: String,
    /// Set only for gender-split series
    pub gender: Option<String>,
    /// Sorted by date
    pub points: Vec<SeriesPoint>,
}

impl TrendSeries {
    pub fn total(&self) -> f64 {
        self.points.iter().map(|p| p.sales).sum()
    }
}
