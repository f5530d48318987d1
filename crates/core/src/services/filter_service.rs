use chrono::{Duration, NaiveDate};
use std::collections::BTreeSet;

use crate::models::dataset::SalesDataset;
use crate::models::filter::{FilterSelection, QuantityRange};
use crate::models::sale::SalesRecord;

/// Resolved predicates for one selection.
///
/// Built once per render so that every row is tested against plain values
/// (cutoff date, clamped quantity range) rather than re-deriving them.
#[derive(Debug, Clone)]
pub struct FilterPredicates<'a> {
    /// Keep rows on or after this date; `None` means no date restriction
    pub date_cutoff: Option<NaiveDate>,
    pub categories: &'a BTreeSet<String>,
    pub genders: &'a BTreeSet<String>,
    pub quantity: QuantityRange,
}

impl FilterPredicates<'_> {
    pub fn matches_date(&self, record: &SalesRecord) -> bool {
        self.date_cutoff.map_or(true, |cutoff| record.date >= cutoff)
    }

    pub fn matches_category(&self, record: &SalesRecord) -> bool {
        self.categories.contains(&record.product_category)
    }

    pub fn matches_gender(&self, record: &SalesRecord) -> bool {
        self.genders.contains(&record.gender)
    }

    pub fn matches_quantity(&self, record: &SalesRecord) -> bool {
        self.quantity.contains(record.quantity)
    }

    /// All predicates, conjunctively.
    pub fn matches(&self, record: &SalesRecord) -> bool {
        self.matches_date(record)
            && self.matches_category(record)
            && self.matches_gender(record)
            && self.matches_quantity(record)
    }
}

/// Turns a filter selection into the filtered view of a dataset.
///
/// Pure business logic with no I/O. The dataset is only read.
pub struct FilterService;

impl FilterService {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a selection against a dataset.
    ///
    /// The time window counts back from the dataset's latest date, not from
    /// today. The quantity range is clamped to the dataset's true bounds.
    pub fn predicates<'a>(
        &self,
        dataset: &SalesDataset,
        selection: &'a FilterSelection,
    ) -> FilterPredicates<'a> {
        let date_cutoff = selection
            .time_window
            .days()
            .zip(dataset.max_date())
            .map(|(days, max_date)| max_date - Duration::days(days));

        let quantity = match dataset.quantity_bounds() {
            Some(bounds) => selection.quantity.clamped_to(bounds),
            None => selection.quantity,
        };

        FilterPredicates {
            date_cutoff,
            categories: &selection.categories,
            genders: &selection.genders,
            quantity,
        }
    }

    /// Rows of `dataset` passing every predicate of `selection`, in dataset order.
    pub fn apply<'d>(
        &self,
        dataset: &'d SalesDataset,
        selection: &FilterSelection,
    ) -> Vec<&'d SalesRecord> {
        let predicates = self.predicates(dataset, selection);
        let view: Vec<&SalesRecord> = dataset
            .records()
            .iter()
            .filter(|r| predicates.matches(r))
            .collect();

        log::debug!(
            "filter [{}]: {} of {} rows kept",
            selection.time_window,
            view.len(),
            dataset.len()
        );
        view
    }

    /// Further restrict a view to the categories drawn in the trend chart.
    pub fn trend_subset<'d>(
        &self,
        view: &[&'d SalesRecord],
        trend_categories: &BTreeSet<String>,
    ) -> Vec<&'d SalesRecord> {
        view.iter()
            .copied()
            .filter(|r| trend_categories.contains(&r.product_category))
            .collect()
    }
}

impl Default for FilterService {
    fn default() -> Self {
        Self::new()
    }
}
