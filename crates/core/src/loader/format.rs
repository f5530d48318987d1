use crate::errors::CoreError;
use crate::models::sale::SalesRecord;

/// Header columns every input file must carry. Other columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "Date",
    "Product_Category",
    "Gender",
    "Quantity",
    "Total_Amount",
];

/// Check that a header row names every required column.
pub fn validate_headers(headers: &csv::StringRecord) -> Result<(), CoreError> {
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::InvalidFileFormat(format!(
            "missing required column(s): {}",
            missing.join(", ")
        )))
    }
}

/// Reject values a sales row can never hold.
pub fn validate_record(record: &SalesRecord, line: u64) -> Result<(), CoreError> {
    if !record.total_amount.is_finite() {
        return Err(CoreError::InvalidRecord {
            line,
            message: format!("Total_Amount '{}' is not a number", record.total_amount),
        });
    }
    if record.total_amount < 0.0 {
        return Err(CoreError::InvalidRecord {
            line,
            message: format!("Total_Amount {} is negative", record.total_amount),
        });
    }
    if record.product_category.is_empty() || record.gender.is_empty() {
        return Err(CoreError::InvalidRecord {
            line,
            message: "Product_Category and Gender must not be empty".into(),
        });
    }
    Ok(())
}
