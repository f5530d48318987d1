use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Accepted textual date layouts in the input file.
/// Date-time values keep only their calendar date.
const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// A single sales transaction: one row of the input file.
///
/// Field names are renamed to the CSV header spelling so the same struct
/// round-trips through the loader and the table view unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Calendar date of the transaction (daily granularity)
    #[serde(rename = "Date", deserialize_with = "deserialize_sale_date")]
    pub date: NaiveDate,

    /// Product category (e.g., "Beauty", "Clothing", "Electronics")
    #[serde(rename = "Product_Category")]
    pub product_category: String,

    /// Customer gender as recorded in the source data
    #[serde(rename = "Gender")]
    pub gender: String,

    /// Number of units in the transaction
    #[serde(rename = "Quantity")]
    pub quantity: u32,

    /// Transaction value in the display currency (never negative)
    #[serde(rename = "Total_Amount")]
    pub total_amount: f64,
}

impl SalesRecord {
    pub fn new(
        date: NaiveDate,
        product_category: impl Into<String>,
        gender: impl Into<String>,
        quantity: u32,
        total_amount: f64,
    ) -> Self {
        Self {
            date,
            product_category: product_category.into(),
            gender: gender.into(),
            quantity,
            total_amount,
        }
    }
}

/// Parse a date cell, accepting a bare date or a date-time.
pub fn parse_sale_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Some(date);
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|dt| dt.date())
}

fn deserialize_sale_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_sale_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date '{raw}'")))
}
