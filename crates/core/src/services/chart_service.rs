use crate::models::aggregation::{AggregationResult, TrendSeries};
use crate::models::chart::{
    AxisSort, CellValue, ChartKind, ChartPanel, ChartSpec, DataTable, Encoding, FieldRole, Scale,
};
use crate::models::profile::SkillRating;
use crate::models::settings::DashboardSettings;

/// Column names shared with the table view.
pub const COL_DATE: &str = "Date";
pub const COL_CATEGORY: &str = "Product_Category";
pub const COL_GENDER: &str = "Gender";
pub const COL_TOTAL: &str = "Total_Amount";
pub const COL_SALES: &str = "Sales";
pub const COL_SERIES: &str = "Series";
pub const COL_SKILL: &str = "Skill";
pub const COL_LEVEL: &str = "Level";

/// Turns aggregation results into chart-ready specs.
///
/// The core computes all the numbers; the charting collaborator only draws.
/// Any empty input becomes `ChartPanel::NoData` instead of a degenerate chart.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Trend lines over time, one color per series.
    ///
    /// Split series are colored by their combined label; unsplit ones by
    /// category. The y axis is not forced to start at zero.
    pub fn trend_chart(
        &self,
        series: &[TrendSeries],
        split_by_gender: bool,
        settings: &DashboardSettings,
    ) -> ChartPanel {
        if series.iter().all(|s| s.points.is_empty()) {
            return self.no_data(settings);
        }

        let color_col = if split_by_gender { COL_SERIES } else { COL_CATEGORY };
        let mut data = DataTable::new(&[COL_DATE, color_col, COL_SALES]);
        for s in series {
            let name = if split_by_gender { &s.label } else { &s.category };
            for point in &s.points {
                data.push_row(vec![
                    CellValue::Date(point.date),
                    CellValue::Text(name.clone()),
                    CellValue::Number(point.sales),
                ]);
            }
        }

        ChartPanel::Chart(ChartSpec {
            title: None,
            kind: ChartKind::Line { points: false },
            height: settings.trend_chart_height,
            encoding: Encoding {
                x: Some(FieldRole::temporal(COL_DATE)),
                y: Some(FieldRole::quantitative(COL_SALES).with_scale(Scale {
                    domain: None,
                    zero: Some(false),
                })),
                color: Some(FieldRole::nominal(color_col)),
                theta: None,
                tooltip: vec![
                    FieldRole::temporal(COL_DATE),
                    FieldRole::nominal(color_col),
                    FieldRole::quantitative(COL_SALES),
                ],
            },
            data,
        })
    }

    /// "Sales by Category" bar chart.
    pub fn category_chart(
        &self,
        result: &AggregationResult,
        settings: &DashboardSettings,
    ) -> ChartPanel {
        if result.is_empty() {
            return self.no_data(settings);
        }

        let mut data = DataTable::new(&[COL_CATEGORY, COL_TOTAL]);
        for row in &result.rows {
            data.push_row(vec![
                CellValue::Text(row.key.category.clone().unwrap_or_default()),
                CellValue::Number(row.total_amount),
            ]);
        }

        ChartPanel::Chart(ChartSpec {
            title: Some("Sales by Category".into()),
            kind: ChartKind::Bar,
            height: settings.breakdown_chart_height,
            encoding: Encoding {
                x: Some(FieldRole::nominal(COL_CATEGORY)),
                y: Some(FieldRole::quantitative(COL_TOTAL)),
                tooltip: vec![
                    FieldRole::nominal(COL_CATEGORY),
                    FieldRole::quantitative(COL_TOTAL),
                ],
                ..Encoding::default()
            },
            data,
        })
    }

    /// "Sales by Gender" arc chart.
    pub fn gender_chart(
        &self,
        result: &AggregationResult,
        settings: &DashboardSettings,
    ) -> ChartPanel {
        if result.is_empty() {
            return self.no_data(settings);
        }

        let mut data = DataTable::new(&[COL_GENDER, COL_TOTAL]);
        for row in &result.rows {
            data.push_row(vec![
                CellValue::Text(row.key.gender.clone().unwrap_or_default()),
                CellValue::Number(row.total_amount),
            ]);
        }

        ChartPanel::Chart(ChartSpec {
            title: Some("Sales by Gender".into()),
            kind: ChartKind::Arc,
            height: settings.breakdown_chart_height,
            encoding: Encoding {
                theta: Some(FieldRole::quantitative(COL_TOTAL)),
                color: Some(FieldRole::nominal(COL_GENDER)),
                tooltip: vec![
                    FieldRole::nominal(COL_GENDER),
                    FieldRole::quantitative(COL_TOTAL),
                ],
                ..Encoding::default()
            },
            data,
        })
    }

    /// "Total Sales Over Time" line chart with point markers.
    pub fn daily_chart(
        &self,
        result: &AggregationResult,
        settings: &DashboardSettings,
    ) -> ChartPanel {
        if result.is_empty() {
            return self.no_data(settings);
        }

        let mut data = DataTable::new(&[COL_DATE, COL_TOTAL]);
        for row in &result.rows {
            let Some(date) = row.key.date else { continue };
            data.push_row(vec![CellValue::Date(date), CellValue::Number(row.total_amount)]);
        }

        ChartPanel::Chart(ChartSpec {
            title: Some("Total Sales Over Time".into()),
            kind: ChartKind::Line { points: true },
            height: settings.breakdown_chart_height,
            encoding: Encoding {
                x: Some(FieldRole::temporal(COL_DATE)),
                y: Some(FieldRole::quantitative(COL_TOTAL)),
                tooltip: vec![
                    FieldRole::temporal(COL_DATE),
                    FieldRole::quantitative(COL_TOTAL),
                ],
                ..Encoding::default()
            },
            data,
        })
    }

    /// Horizontal skill bars on a 0–100 scale, highest first.
    ///
    /// `skills` must already be sorted; the y axis sort repeats the order for
    /// collaborators that re-sort categorical axes.
    pub fn skill_chart(&self, skills: &[SkillRating], settings: &DashboardSettings) -> ChartSpec {
        let mut data = DataTable::new(&[COL_SKILL, COL_LEVEL]);
        for rating in skills {
            data.push_row(vec![
                CellValue::Text(rating.skill.clone()),
                CellValue::Integer(i64::from(rating.level)),
            ]);
        }

        ChartSpec {
            title: None,
            kind: ChartKind::Bar,
            height: settings.skill_chart_height,
            encoding: Encoding {
                x: Some(FieldRole::quantitative(COL_LEVEL).with_scale(Scale {
                    domain: Some((0.0, 100.0)),
                    zero: None,
                })),
                y: Some(FieldRole::nominal(COL_SKILL).with_sort(AxisSort::DescendingByX)),
                tooltip: vec![
                    FieldRole::nominal(COL_SKILL),
                    FieldRole::quantitative(COL_LEVEL),
                ],
                ..Encoding::default()
            },
            data,
        }
    }

    fn no_data(&self, settings: &DashboardSettings) -> ChartPanel {
        ChartPanel::NoData {
            message: settings.no_data_message.clone(),
        }
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
