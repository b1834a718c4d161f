use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

// =============================================================================
// Dataset rows
// =============================================================================

/// One validated row of the sales dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub product: String,
    pub city: String,
    pub region: String,
    /// Full name of the sales representative.
    pub rep: String,
    /// Finite, non-negative amount.
    pub sales: f64,
    pub date: NaiveDate,
}

/// The string-valued columns of a [`SalesRecord`] that can be filtered on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalesField {
    Product,
    City,
    Region,
    Rep,
}

impl SalesRecord {
    /// Borrow the value of a string column.
    pub fn field(&self, field: SalesField) -> &str {
        match field {
            SalesField::Product => &self.product,
            SalesField::City => &self.city,
            SalesField::Region => &self.region,
            SalesField::Rep => &self.rep,
        }
    }
}

// =============================================================================
// Answers
// =============================================================================

pub const NO_SALES_FOUND_MESSAGE: &str = "No sales data found for this rep in this city.";
pub const NOT_UNDERSTOOD_MESSAGE: &str = "Sorry, I can't answer that question.";
pub const DATASET_UNAVAILABLE_MESSAGE: &str = "Error: Dataset not loaded.";

/// Date format used when an answer carries a calendar date.
pub const ANSWER_DATE_FORMAT: &str = "%Y-%m-%d";

/// The typed result of answering a question.
///
/// Every variant is a normal value: empty result sets, unrecognized questions
/// and a missing dataset all resolve to an `Answer` rather than an error.
#[derive(Clone, Debug, PartialEq)]
pub enum Answer {
    /// Sum of sales, truncated toward zero.
    Total(i64),
    /// Number of distinct reps.
    Count(u64),
    /// Mean sales rounded to two decimal places.
    Average(f64),
    /// Mean over an empty set. Serialized as the integer `0`.
    AverageUndefined,
    /// Date of the highest sale.
    Date(NaiveDate),
    NoSalesFound,
    NotUnderstood,
    DatasetUnavailable,
}

impl Answer {
    /// The fixed text for message-style answers, `None` for computed values.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Answer::NoSalesFound => Some(NO_SALES_FOUND_MESSAGE),
            Answer::NotUnderstood => Some(NOT_UNDERSTOOD_MESSAGE),
            Answer::DatasetUnavailable => Some(DATASET_UNAVAILABLE_MESSAGE),
            _ => None,
        }
    }
}

impl Serialize for Answer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Answer::Total(total) => serializer.serialize_i64(*total),
            Answer::Count(count) => serializer.serialize_u64(*count),
            Answer::Average(avg) => serializer.serialize_f64(*avg),
            Answer::AverageUndefined => serializer.serialize_i64(0),
            Answer::Date(date) => {
                serializer.collect_str(&date.format(ANSWER_DATE_FORMAT))
            }
            Answer::NoSalesFound | Answer::NotUnderstood | Answer::DatasetUnavailable => {
                serializer.serialize_str(self.message().unwrap_or_default())
            }
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Total(total) => write!(f, "{}", total),
            Answer::Count(count) => write!(f, "{}", count),
            Answer::Average(avg) => write!(f, "{:?}", avg),
            Answer::AverageUndefined => write!(f, "0"),
            Answer::Date(date) => write!(f, "{}", date.format(ANSWER_DATE_FORMAT)),
            other => write!(f, "{}", other.message().unwrap_or_default()),
        }
    }
}
