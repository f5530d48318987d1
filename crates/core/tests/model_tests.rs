// ═══════════════════════════════════════════════════════════════════
// Model Tests — SalesRecord, SalesDataset, TimeWindow, FilterSelection,
// AggregationResult, DataTable, DashboardSettings, ProfilePage
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;

use dashboard_core::errors::CoreError;
use dashboard_core::models::aggregation::{AggregateRow, AggregationResult, GroupKey, Grouping};
use dashboard_core::models::chart::{CellValue, ChartPanel, DataTable};
use dashboard_core::models::dataset::SalesDataset;
use dashboard_core::models::filter::{FilterSelection, QuantityRange, TimeWindow};
use dashboard_core::models::profile::{ProfilePage, ProfileTab, SkillRating};
use dashboard_core::models::sale::{parse_sale_date, SalesRecord};
use dashboard_core::models::settings::DashboardSettings;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ── SalesRecord ─────────────────────────────────────────────────────

mod sales_record {
    use super::*;

    #[test]
    fn new_sets_fields() {
        let r = SalesRecord::new(date(2024, 6, 30), "Beauty", "Female", 3, 150.0);
        assert_eq!(r.product_category, "Beauty");
        assert_eq!(r.gender, "Female");
        assert_eq!(r.quantity, 3);
        assert_eq!(r.total_amount, 150.0);
    }

    #[test]
    fn serializes_with_csv_header_names() {
        let r = SalesRecord::new(date(2024, 6, 30), "Beauty", "Female", 3, 150.0);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["Date"], "2024-06-30");
        assert_eq!(json["Product_Category"], "Beauty");
        assert_eq!(json["Gender"], "Female");
        assert_eq!(json["Quantity"], 3);
        assert_eq!(json["Total_Amount"], 150.0);
    }

    #[test]
    fn json_round_trip() {
        let r = SalesRecord::new(date(2023, 11, 24), "Clothing", "Male", 1, 50.0);
        let json = serde_json::to_string(&r).unwrap();
        let back: SalesRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn parses_plain_and_timestamped_dates() {
        assert_eq!(parse_sale_date("2024-06-30"), Some(date(2024, 6, 30)));
        assert_eq!(parse_sale_date(" 2024-06-30 "), Some(date(2024, 6, 30)));
        assert_eq!(parse_sale_date("2024-06-30 13:45:00"), Some(date(2024, 6, 30)));
        assert_eq!(parse_sale_date("2024-06-30T00:00:00"), Some(date(2024, 6, 30)));
        assert_eq!(parse_sale_date("30/06/2024"), None);
        assert_eq!(parse_sale_date(""), None);
    }
}

// ── SalesDataset ────────────────────────────────────────────────────

mod sales_dataset {
    use super::*;

    fn dataset() -> SalesDataset {
        SalesDataset::new(vec![
            SalesRecord::new(date(2024, 3, 1), "Electronics", "Male", 4, 400.0),
            SalesRecord::new(date(2024, 6, 30), "Beauty", "Female", 1, 30.0),
            SalesRecord::new(date(2024, 1, 10), "Clothing", "Female", 2, 90.0),
            SalesRecord::new(date(2024, 5, 5), "Beauty", "Male", 3, 60.0),
        ])
    }

    #[test]
    fn computes_bounds() {
        let ds = dataset();
        assert_eq!(ds.len(), 4);
        assert!(!ds.is_empty());
        assert_eq!(ds.min_date(), Some(date(2024, 1, 10)));
        assert_eq!(ds.max_date(), Some(date(2024, 6, 30)));
        assert_eq!(ds.quantity_bounds(), Some((1, 4)));
        assert_eq!(ds.total_amount(), 580.0);
    }

    #[test]
    fn distinct_values_keep_first_appearance_order() {
        let ds = dataset();
        assert_eq!(ds.categories(), ["Electronics", "Beauty", "Clothing"]);
        assert_eq!(ds.genders(), ["Male", "Female"]);
    }

    #[test]
    fn sorted_values_for_controls() {
        let ds = dataset();
        assert_eq!(ds.sorted_categories(), vec!["Beauty", "Clothing", "Electronics"]);
        assert_eq!(ds.sorted_genders(), vec!["Female", "Male"]);
    }

    #[test]
    fn records_keep_file_order() {
        let ds = dataset();
        let dates: Vec<NaiveDate> = ds.records().iter().map(|r| r.date).collect();
        assert_eq!(
            dates,
            vec![date(2024, 3, 1), date(2024, 6, 30), date(2024, 1, 10), date(2024, 5, 5)]
        );
    }

    #[test]
    fn empty_dataset_has_no_bounds() {
        let ds = SalesDataset::default();
        assert!(ds.is_empty());
        assert_eq!(ds.max_date(), None);
        assert_eq!(ds.quantity_bounds(), None);
        assert!(ds.categories().is_empty());
    }

    #[test]
    fn from_vec() {
        let ds: SalesDataset =
            vec![SalesRecord::new(date(2024, 1, 1), "A", "M", 1, 1.0)].into();
        assert_eq!(ds.len(), 1);
    }
}

// ── TimeWindow ──────────────────────────────────────────────────────

mod time_window {
    use super::*;

    #[test]
    fn day_counts() {
        assert_eq!(TimeWindow::All.days(), None);
        assert_eq!(TimeWindow::Last7Days.days(), Some(7));
        assert_eq!(TimeWindow::LastMonth.days(), Some(30));
        assert_eq!(TimeWindow::Last3Months.days(), Some(90));
        assert_eq!(TimeWindow::Last6Months.days(), Some(180));
    }

    #[test]
    fn labels_round_trip() {
        for window in TimeWindow::ALL {
            assert_eq!(TimeWindow::from_label(window.label()).unwrap(), window);
        }
        assert_eq!(TimeWindow::Last3Months.to_string(), "Last 3 months");
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = TimeWindow::from_label("Last decade").unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
    }

    #[test]
    fn default_is_all() {
        assert_eq!(TimeWindow::default(), TimeWindow::All);
    }
}

// ── QuantityRange / FilterSelection ─────────────────────────────────

mod filter_selection {
    use super::*;

    #[test]
    fn quantity_range_is_inclusive() {
        let range = QuantityRange::new(2, 4);
        assert!(!range.contains(1));
        assert!(range.contains(2));
        assert!(range.contains(4));
        assert!(!range.contains(5));
    }

    #[test]
    fn quantity_range_clamps_into_bounds() {
        let clamped = QuantityRange::new(0, 99).clamped_to((1, 10));
        assert_eq!(clamped, QuantityRange::new(1, 10));
        let inside = QuantityRange::new(3, 5).clamped_to((1, 10));
        assert_eq!(inside, QuantityRange::new(3, 5));
    }

    #[test]
    fn disjoint_quantity_range_stays_empty_after_clamp() {
        let above = QuantityRange::new(10, 20).clamped_to((1, 5));
        assert_eq!(above, QuantityRange::new(10, 5));
        assert!((0..=30).all(|q| !above.contains(q)));

        let below = QuantityRange::new(0, 0).clamped_to((1, 5));
        assert_eq!(below, QuantityRange::new(1, 0));
        assert!((0..=30).all(|q| !below.contains(q)));
    }

    #[test]
    fn defaults_select_everything() {
        let ds = SalesDataset::new(vec![
            SalesRecord::new(date(2024, 1, 1), "B", "M", 2, 1.0),
            SalesRecord::new(date(2024, 1, 2), "A", "F", 5, 1.0),
        ]);
        let selection = FilterSelection::defaults_for(&ds);
        assert_eq!(selection.time_window, TimeWindow::All);
        assert_eq!(selection.categories.len(), 2);
        assert_eq!(selection.genders.len(), 2);
        assert_eq!(selection.trend_categories, selection.categories);
        assert_eq!(selection.quantity, QuantityRange::new(2, 5));
        assert!(!selection.split_by_gender);
    }

    #[test]
    fn builders_replace_fields() {
        let selection = FilterSelection::default()
            .with_time_window(TimeWindow::Last7Days)
            .with_categories(["A"])
            .with_genders(["F", "M"])
            .with_quantity(1, 3)
            .with_trend_categories(["A", "B"])
            .with_split_by_gender(true);
        assert_eq!(selection.time_window, TimeWindow::Last7Days);
        assert!(selection.categories.contains("A"));
        assert_eq!(selection.genders.len(), 2);
        assert_eq!(selection.quantity, QuantityRange::new(1, 3));
        assert_eq!(selection.trend_categories.len(), 2);
        assert!(selection.split_by_gender);
    }
}

// ── AggregationResult ───────────────────────────────────────────────

mod aggregation_result {
    use super::*;

    fn key(category: &str) -> GroupKey {
        GroupKey {
            date: None,
            category: Some(category.into()),
            gender: None,
        }
    }

    #[test]
    fn total_and_lookup() {
        let result = AggregationResult {
            grouping: Grouping::Category,
            rows: vec![
                AggregateRow { key: key("A"), total_amount: 10.0 },
                AggregateRow { key: key("B"), total_amount: 32.5 },
            ],
        };
        assert_eq!(result.len(), 2);
        assert_eq!(result.total(), 42.5);
        assert_eq!(result.get(&key("B")), Some(32.5));
        assert_eq!(result.get(&key("Z")), None);
    }

    #[test]
    fn grouping_dimensions() {
        assert!(Grouping::DateCategoryGender.uses_date());
        assert!(Grouping::DateCategoryGender.uses_category());
        assert!(Grouping::DateCategoryGender.uses_gender());
        assert!(!Grouping::Category.uses_date());
        assert!(!Grouping::Gender.uses_category());
        assert!(!Grouping::DateCategory.uses_gender());
    }

    #[test]
    fn keys_order_by_date_first() {
        let early = GroupKey {
            date: Some(date(2024, 1, 1)),
            category: Some("Z".into()),
            gender: None,
        };
        let late = GroupKey {
            date: Some(date(2024, 1, 2)),
            category: Some("A".into()),
            gender: None,
        };
        assert!(early < late);
    }
}

// ── DataTable / ChartPanel ──────────────────────────────────────────

mod chart_models {
    use super::*;

    #[test]
    fn data_table_columns() {
        let mut table = DataTable::new(&["Skill", "Level"]);
        assert!(table.is_empty());
        table.push_row(vec![CellValue::Text("Git".into()), CellValue::Integer(75)]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.column_index("Level"), Some(1));
        assert_eq!(table.column("Level").unwrap(), vec![&CellValue::Integer(75)]);
        assert!(table.column("Missing").is_none());
    }

    #[test]
    fn cell_values_serialize_untagged() {
        assert_eq!(serde_json::to_value(CellValue::Integer(3)).unwrap(), 3);
        assert_eq!(serde_json::to_value(CellValue::Text("x".into())).unwrap(), "x");
        assert_eq!(
            serde_json::to_value(CellValue::Date(date(2024, 6, 30))).unwrap(),
            "2024-06-30"
        );
    }

    #[test]
    fn date_like_text_cell_stays_text() {
        let cell = CellValue::Text("2024-06-01".into());
        assert_eq!(serde_json::to_value(&cell).unwrap(), "2024-06-01");
        assert_ne!(cell, CellValue::Date(date(2024, 6, 1)));
    }

    #[test]
    fn no_data_panel_has_no_spec() {
        let panel = ChartPanel::NoData { message: "none".into() };
        assert!(panel.is_no_data());
        assert!(panel.spec().is_none());
    }
}

// ── DashboardSettings ───────────────────────────────────────────────

mod settings {
    use super::*;

    #[test]
    fn defaults() {
        let s = DashboardSettings::default();
        assert_eq!(s.currency_symbol, "R");
        assert_eq!(s.series_separator, " - ");
        assert_eq!(s.trend_chart_height, 400);
        assert_eq!(s.breakdown_chart_height, 300);
        assert_eq!(s.skill_chart_height, 350);
        assert_eq!(s.no_data_message, "No data for the selected filters.");
        assert_eq!(s.missing_value_placeholder, "N/A");
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let s = DashboardSettings::from_json(r#"{ "currency_symbol": "$" }"#).unwrap();
        assert_eq!(s.currency_symbol, "$");
        assert_eq!(s.trend_chart_height, 400);
    }

    #[test]
    fn json_round_trip() {
        let s = DashboardSettings {
            series_separator: "-".into(),
            ..DashboardSettings::default()
        };
        let back = DashboardSettings::from_json(&s.to_json().unwrap()).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn invalid_json_is_deserialization_error() {
        let err = DashboardSettings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }
}

// ── ProfilePage ─────────────────────────────────────────────────────

mod profile {
    use super::*;

    #[test]
    fn default_page_content() {
        let page = ProfilePage::default();
        assert_eq!(page.hero.name, "Comfort Mankele");
        assert_eq!(page.tabs, ProfileTab::ALL.to_vec());
        assert_eq!(page.research_interests.len(), 5);
        assert_eq!(page.projects.len(), 2);
        assert_eq!(page.links.len(), 2);
    }

    #[test]
    fn tab_labels() {
        let labels: Vec<String> = ProfileTab::ALL.iter().map(|t| t.to_string()).collect();
        assert_eq!(
            labels,
            vec!["Home", "Education", "Skills", "Research", "Projects", "Contact"]
        );
    }

    #[test]
    fn footer_uses_given_year() {
        let page = ProfilePage::default();
        assert_eq!(page.footer(2026), "© 2026 Comfort Mankele • Streamlit Portfolio");
    }

    #[test]
    fn skill_level_is_capped() {
        assert_eq!(SkillRating::new("Rust", 120).level, 100);
        assert_eq!(SkillRating::new("Rust", 60).level, 60);
    }
}
