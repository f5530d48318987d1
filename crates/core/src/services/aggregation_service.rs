use std::collections::BTreeMap;

use crate::models::aggregation::{
    AggregateRow, AggregationResult, GroupKey, Grouping, SeriesPoint, TrendSeries,
};
use crate::models::sale::SalesRecord;

/// Groups a filtered view and sums `total_amount` per group.
///
/// Pure business logic. Grouping keys partition the view, so the sum of any
/// result equals the sum over the view it was computed from.
pub struct AggregationService;

impl AggregationService {
    pub fn new() -> Self {
        Self
    }

    /// Group `view` by `grouping` and sum sales per group.
    ///
    /// Rows come out sorted by key, so the same view always yields the same
    /// result regardless of input order.
    pub fn aggregate(&self, view: &[&SalesRecord], grouping: Grouping) -> AggregationResult {
        let mut totals: BTreeMap<GroupKey, f64> = BTreeMap::new();
        for record in view {
            *totals.entry(Self::key_for(record, grouping)).or_insert(0.0) += record.total_amount;
        }

        log::debug!("aggregate {:?}: {} rows -> {} groups", grouping, view.len(), totals.len());

        AggregationResult {
            grouping,
            rows: totals
                .into_iter()
                .map(|(key, total_amount)| AggregateRow { key, total_amount })
                .collect(),
        }
    }

    /// Build the trend chart's lines.
    ///
    /// Without `split_by_gender` there is one series per category. With it,
    /// every (category, gender) pair is its own series labelled
    /// `"{category}{separator}{gender}"`. Each record lands in exactly one
    /// series. Series are ordered by label.
    pub fn trend_series(
        &self,
        view: &[&SalesRecord],
        split_by_gender: bool,
        separator: &str,
    ) -> Vec<TrendSeries> {
        let grouping = if split_by_gender {
            Grouping::DateCategoryGender
        } else {
            Grouping::DateCategory
        };
        let aggregated = self.aggregate(view, grouping);

        // (category, gender) -> points; rows are date-major so points stay date-sorted
        let mut by_series: BTreeMap<(String, Option<String>), Vec<SeriesPoint>> = BTreeMap::new();
        for row in aggregated.rows {
            let (Some(date), Some(category)) = (row.key.date, row.key.category) else {
                continue;
            };
            by_series
                .entry((category, row.key.gender))
                .or_default()
                .push(SeriesPoint {
                    date,
                    sales: row.total_amount,
                });
        }

        let mut series: Vec<TrendSeries> = by_series
            .into_iter()
            .map(|((category, gender), points)| {
                let label = match &gender {
                    Some(g) => format!("{category}{separator}{g}"),
                    None => category.clone(),
                };
                TrendSeries {
                    label,
                    category,
                    gender,
                    points,
                }
            })
            .collect();
        series.sort_by(|a, b| a.label.cmp(&b.label));
        series
    }

    fn key_for(record: &SalesRecord, grouping: Grouping) -> GroupKey {
        GroupKey {
            date: grouping.uses_date().then_some(record.date),
            category: grouping
                .uses_category()
                .then(|| record.product_category.clone()),
            gender: grouping.uses_gender().then(|| record.gender.clone()),
        }
    }
}

impl Default for AggregationService {
    fn default() -> Self {
        Self::new()
    }
}
