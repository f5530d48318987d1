// ═══════════════════════════════════════════════════════════════════
// Loader Tests — header validation, row parsing, DatasetLoader
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;
use std::io::Write;

use dashboard_core::errors::CoreError;
use dashboard_core::loader::format::{validate_headers, validate_record, REQUIRED_COLUMNS};
use dashboard_core::loader::manager::DatasetLoader;
use dashboard_core::models::sale::SalesRecord;

const SAMPLE_CSV: &str = "\
Transaction_ID,Date,Customer_ID,Gender,Age,Product_Category,Quantity,Price_per_Unit,Total_Amount
1,2023-11-24,CUST001,Male,34,Beauty,3,50,150
2,2023-02-27,CUST002,Female,26,Clothing,2,500,1000
3,2023-01-13,CUST003,Male,50,Electronics,1,30,30
4,2023-05-21,CUST004,Male,37,Clothing,1,500,500
";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
// format
// ═══════════════════════════════════════════════════════════════════

mod format {
    use super::*;

    #[test]
    fn required_columns() {
        assert_eq!(
            REQUIRED_COLUMNS,
            ["Date", "Product_Category", "Gender", "Quantity", "Total_Amount"]
        );
    }

    #[test]
    fn accepts_headers_in_any_order_with_extras() {
        let headers = csv::StringRecord::from(vec![
            "Total_Amount",
            "Extra",
            "Quantity",
            "Gender",
            "Product_Category",
            "Date",
        ]);
        assert!(validate_headers(&headers).is_ok());
    }

    #[test]
    fn reports_every_missing_column() {
        let headers = csv::StringRecord::from(vec!["Date", "Gender", "Quantity"]);
        match validate_headers(&headers) {
            Err(CoreError::InvalidFileFormat(msg)) => {
                assert!(msg.contains("Product_Category"));
                assert!(msg.contains("Total_Amount"));
                assert!(!msg.contains("Gender"));
            }
            other => panic!("expected InvalidFileFormat, got {other:?}"),
        }
    }

    #[test]
    fn rejects_negative_amount() {
        let r = SalesRecord::new(date(2024, 1, 1), "A", "M", 1, -5.0);
        assert!(matches!(
            validate_record(&r, 7),
            Err(CoreError::InvalidRecord { line: 7, .. })
        ));
    }

    #[test]
    fn rejects_non_finite_amount() {
        let r = SalesRecord::new(date(2024, 1, 1), "A", "M", 1, f64::NAN);
        assert!(validate_record(&r, 2).is_err());
    }

    #[test]
    fn rejects_blank_category() {
        let r = SalesRecord::new(date(2024, 1, 1), "", "M", 1, 5.0);
        assert!(validate_record(&r, 2).is_err());
    }

    #[test]
    fn accepts_zero_amount() {
        let r = SalesRecord::new(date(2024, 1, 1), "A", "M", 0, 0.0);
        assert!(validate_record(&r, 2).is_ok());
    }
}

// ═══════════════════════════════════════════════════════════════════
// DatasetLoader
// ═══════════════════════════════════════════════════════════════════

mod dataset_loader {
    use super::*;

    #[test]
    fn loads_sample_and_ignores_extra_columns() {
        let ds = DatasetLoader::load_from_bytes(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(ds.len(), 4);

        let first = &ds.records()[0];
        assert_eq!(first.date, date(2023, 11, 24));
        assert_eq!(first.product_category, "Beauty");
        assert_eq!(first.gender, "Male");
        assert_eq!(first.quantity, 3);
        assert_eq!(first.total_amount, 150.0);

        assert_eq!(ds.max_date(), Some(date(2023, 11, 24)));
        assert_eq!(ds.quantity_bounds(), Some((1, 3)));
        assert_eq!(ds.sorted_categories(), vec!["Beauty", "Clothing", "Electronics"]);
    }

    #[test]
    fn trims_whitespace_and_accepts_timestamps() {
        let csv = "Date,Product_Category,Gender,Quantity,Total_Amount\n\
                   2024-06-30 00:00:00 , Beauty , Female , 2 , 80.5\n";
        let ds = DatasetLoader::load_from_bytes(csv.as_bytes()).unwrap();
        let r = &ds.records()[0];
        assert_eq!(r.date, date(2024, 6, 30));
        assert_eq!(r.product_category, "Beauty");
        assert_eq!(r.gender, "Female");
        assert_eq!(r.total_amount, 80.5);
    }

    #[test]
    fn header_only_file_is_empty_dataset() {
        let csv = "Date,Product_Category,Gender,Quantity,Total_Amount\n";
        let ds = DatasetLoader::load_from_bytes(csv.as_bytes()).unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn empty_input_is_invalid_format() {
        let err = DatasetLoader::load_from_bytes(b"").unwrap_err();
        assert!(matches!(err, CoreError::InvalidFileFormat(_)));
    }

    #[test]
    fn missing_column_is_invalid_format() {
        let csv = "Date,Product_Category,Quantity,Total_Amount\n2024-01-01,A,1,10\n";
        let err = DatasetLoader::load_from_bytes(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidFileFormat(_)));
    }

    #[test]
    fn bad_date_reports_line() {
        let csv = "Date,Product_Category,Gender,Quantity,Total_Amount\n\
                   2024-01-01,A,M,1,10\n\
                   yesterday,A,M,1,10\n";
        match DatasetLoader::load_from_bytes(csv.as_bytes()) {
            Err(CoreError::InvalidRecord { line, message }) => {
                assert_eq!(line, 3);
                assert!(message.contains("yesterday"));
            }
            other => panic!("expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn fractional_quantity_is_rejected() {
        let csv = "Date,Product_Category,Gender,Quantity,Total_Amount\n2024-01-01,A,M,1.5,10\n";
        let err = DatasetLoader::load_from_bytes(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidRecord { line: 2, .. }));
    }

    #[test]
    fn negative_amount_is_rejected() {
        let csv = "Date,Product_Category,Gender,Quantity,Total_Amount\n2024-01-01,A,M,1,-10\n";
        let err = DatasetLoader::load_from_bytes(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidRecord { line: 2, .. }));
    }

    #[test]
    fn ragged_row_is_rejected() {
        let csv = "Date,Product_Category,Gender,Quantity,Total_Amount\n2024-01-01,A,M\n";
        assert!(DatasetLoader::load_from_bytes(csv.as_bytes()).is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_CSV.as_bytes()).unwrap();
        file.flush().unwrap();

        let ds = DatasetLoader::load_from_file(file.path()).unwrap();
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.total_amount(), 1680.0);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DatasetLoader::load_from_file(dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, CoreError::FileIO(_)));
    }
}
