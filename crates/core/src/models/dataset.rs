use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;

use super::sale::SalesRecord;

/// The loaded sales data. Immutable once built.
///
/// Bounds used by the controls (date range, quantity range, distinct
/// categories and genders) are computed once at construction, so every
/// render reads them without rescanning the rows.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SalesDataset {
    records: Vec<SalesRecord>,
    min_date: Option<NaiveDate>,
    max_date: Option<NaiveDate>,
    min_quantity: Option<u32>,
    max_quantity: Option<u32>,
    /// Distinct categories in first-appearance order
    categories: Vec<String>,
    /// Distinct genders in first-appearance order
    genders: Vec<String>,
}

impl SalesDataset {
    pub fn new(records: Vec<SalesRecord>) -> Self {
        let min_date = records.iter().map(|r| r.date).min();
        let max_date = records.iter().map(|r| r.date).max();
        let min_quantity = records.iter().map(|r| r.quantity).min();
        let max_quantity = records.iter().map(|r| r.quantity).max();
        let categories = distinct_in_order(records.iter().map(|r| r.product_category.as_str()));
        let genders = distinct_in_order(records.iter().map(|r| r.gender.as_str()));

        Self {
            records,
            min_date,
            max_date,
            min_quantity,
            max_quantity,
            categories,
            genders,
        }
    }

    /// All records, in file order.
    #[must_use]
    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Latest transaction date, the reference point for time windows.
    #[must_use]
    pub fn max_date(&self) -> Option<NaiveDate> {
        self.max_date
    }

    #[must_use]
    pub fn min_date(&self) -> Option<NaiveDate> {
        self.min_date
    }

    /// True `(min, max)` quantity over the whole dataset.
    #[must_use]
    pub fn quantity_bounds(&self) -> Option<(u32, u32)> {
        self.min_quantity.zip(self.max_quantity)
    }

    /// Distinct categories in first-appearance order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Distinct genders in first-appearance order.
    #[must_use]
    pub fn genders(&self) -> &[String] {
        &self.genders
    }

    /// Distinct categories, alphabetically (option order for the controls).
    #[must_use]
    pub fn sorted_categories(&self) -> Vec<String> {
        let mut sorted = self.categories.clone();
        sorted.sort();
        sorted
    }

    /// Distinct genders, alphabetically.
    #[must_use]
    pub fn sorted_genders(&self) -> Vec<String> {
        let mut sorted = self.genders.clone();
        sorted.sort();
        sorted
    }

    /// Sum of `total_amount` over every record.
    #[must_use]
    pub fn total_amount(&self) -> f64 {
        self.records.iter().map(|r| r.total_amount).sum()
    }
}

impl From<Vec<SalesRecord>> for SalesDataset {
    fn from(records: Vec<SalesRecord>) -> Self {
        Self::new(records)
    }
}

fn distinct_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}
