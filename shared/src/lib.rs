use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A transaction as returned by the `/transactions` endpoint.
///
/// The backend is inconsistent about emitting ids and amounts as JSON numbers
/// or strings depending on its version, so those fields deserialize from
/// either and are carried as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Backend-assigned identifier
    #[serde(rename = "transactionID", deserialize_with = "string_or_number")]
    pub transaction_id: String,
    /// ID of the user this transaction belongs to
    #[serde(rename = "userID", deserialize_with = "string_or_number")]
    pub user_id: String,
    /// Category the transaction is filed under
    #[serde(rename = "categoryID", deserialize_with = "string_or_number")]
    pub category_id: String,
    /// income, expense, or goal contribution
    #[serde(rename = "type", deserialize_with = "transaction_type_tolerant")]
    pub transaction_type: TransactionType,
    /// Monetary amount in the account's currency unit; kept raw and parsed
    /// defensively at computation time
    #[serde(deserialize_with = "string_or_number")]
    pub amount: String,
    /// Calendar date, `YYYY-MM-DD` with an optional `T...` time suffix
    pub date: String,
    /// Free-form display text
    pub description: String,
}

/// Type of transaction for aggregation and rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
    /// Contribution toward a savings goal; excluded from income/expense sums
    Goal,
}

impl TransactionType {
    /// Wire representation used by the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
            TransactionType::Goal => "goal",
        }
    }

    /// Parse from a wire or UI string, tolerating any casing
    pub fn from_string(s: &str) -> Result<Self, TransactionTypeError> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            "goal" => Ok(TransactionType::Goal),
            _ => Err(TransactionTypeError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransactionTypeError {
    Unknown(String),
}

impl fmt::Display for TransactionTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionTypeError::Unknown(s) => write!(f, "Unknown transaction type: {}", s),
        }
    }
}

impl std::error::Error for TransactionTypeError {}

/// A spending category as returned by the `/categories` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "categoryID", deserialize_with = "string_or_number")]
    pub category_id: String,
    pub name: String,
    /// Icon name the app renders next to the category
    pub icon: String,
    pub description: String,
}

/// Body for creating a transaction via POST `/transaction`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    pub description: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub amount: f64,
    #[serde(rename = "categoryID")]
    pub category_id: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

/// Aggregation granularity for the analysis chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    /// Number of buckets the aggregation window spans
    pub fn bucket_count(&self) -> usize {
        match self {
            Period::Daily => 7,
            Period::Weekly => 4,
            Period::Monthly => 6,
        }
    }

    /// Tab label shown in the period selector
    pub fn label(&self) -> &'static str {
        match self {
            Period::Daily => "Daily",
            Period::Weekly => "Weekly",
            Period::Monthly => "Monthly",
        }
    }

    pub fn all() -> [Period; 3] {
        [Period::Daily, Period::Weekly, Period::Monthly]
    }
}

/// Request for an aggregated period report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodReportRequest {
    pub period: Period,
    /// Optional reference date override (`YYYY-MM-DD`) - uses today if not provided
    pub reference_date: Option<String>,
}

impl Default for PeriodReportRequest {
    fn default() -> Self {
        Self {
            period: Period::Daily,
            reference_date: None,
        }
    }
}

/// One time slot of the aggregation window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodBucket {
    /// Axis label: weekday abbreviation, `"W {n}"`, or month abbreviation
    pub label: String,
    /// Sum of income transactions falling in this slot
    pub income_total: f64,
    /// Sum of expense transactions falling in this slot
    pub expense_total: f64,
}

/// Aggregated income/expense series for one period window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodReport {
    pub period: Period,
    pub buckets: Vec<PeriodBucket>,
    pub total_income: f64,
    pub total_expense: f64,
}

/// Whole-list totals split by transaction type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeSummary {
    pub income: f64,
    pub expense: f64,
    pub goal: f64,
}

/// A single bar handed to the chart renderer.
///
/// Buckets map to two of these: the income bar carries the axis label, the
/// expense bar that follows it has an empty label so the pair shares one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBarPoint {
    pub value: f64,
    pub label: String,
    /// Bar fill color as a hex string
    #[serde(rename = "frontColor")]
    pub front_color: String,
}

/// One month's worth of history rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSection {
    /// Section heading, e.g. "April 2024"
    pub title: String,
    pub transactions: Vec<Transaction>,
}

/// A transaction formatted for a list row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedTransaction {
    pub id: String,
    /// Icon name for the row badge
    pub icon: String,
    pub formatted_date: String,
    pub description: String,
    /// Signed display amount, e.g. "+$100.00" or "-$40.00"
    pub formatted_amount: String,
    pub transaction_type: TransactionType,
    pub category_id: String,
    pub raw_amount: String,
    pub raw_date: String,
}

/// A savings goal shown on the progress cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub name: String,
    pub current_amount: f64,
    pub target_amount: f64,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}

fn transaction_type_tolerant<'de, D>(deserializer: D) -> Result<TransactionType, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    TransactionType::from_string(&s).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_deserializes_numeric_ids_and_amount() {
        let payload = serde_json::json!({
            "transactionID": 12,
            "userID": 3,
            "categoryID": 7,
            "type": "income",
            "amount": 250.5,
            "date": "2024-04-30",
            "description": "Salary"
        });

        let transaction: Transaction = serde_json::from_value(payload).unwrap();
        assert_eq!(transaction.transaction_id, "12");
        assert_eq!(transaction.user_id, "3");
        assert_eq!(transaction.category_id, "7");
        assert_eq!(transaction.transaction_type, TransactionType::Income);
        assert_eq!(transaction.amount, "250.5");
    }

    #[test]
    fn test_transaction_deserializes_string_fields() {
        let payload = serde_json::json!({
            "transactionID": "t-1",
            "userID": "u-1",
            "categoryID": "c-1",
            "type": "Expense",
            "amount": "40.00",
            "date": "2024-04-29T10:30:00Z",
            "description": "Groceries"
        });

        let transaction: Transaction = serde_json::from_value(payload).unwrap();
        assert_eq!(transaction.transaction_id, "t-1");
        assert_eq!(transaction.transaction_type, TransactionType::Expense);
        assert_eq!(transaction.amount, "40.00");
    }

    #[test]
    fn test_transaction_rejects_unknown_type() {
        let payload = serde_json::json!({
            "transactionID": 1,
            "userID": 1,
            "categoryID": 1,
            "type": "transfer",
            "amount": "1",
            "date": "2024-01-01",
            "description": ""
        });

        assert!(serde_json::from_value::<Transaction>(payload).is_err());
    }

    #[test]
    fn test_category_deserializes_numeric_id() {
        let payload = serde_json::json!({
            "categoryID": 5,
            "name": "Groceries",
            "icon": "shopping-cart",
            "description": "Food and household"
        });

        let category: Category = serde_json::from_value(payload).unwrap();
        assert_eq!(category.category_id, "5");
        assert_eq!(category.name, "Groceries");
        assert_eq!(category.icon, "shopping-cart");
    }

    #[test]
    fn test_transaction_type_from_string() {
        assert_eq!(
            TransactionType::from_string("income").unwrap(),
            TransactionType::Income
        );
        assert_eq!(
            TransactionType::from_string("Income").unwrap(),
            TransactionType::Income
        );
        assert_eq!(
            TransactionType::from_string(" GOAL ").unwrap(),
            TransactionType::Goal
        );
        assert!(TransactionType::from_string("savings").is_err());
    }

    #[test]
    fn test_period_bucket_counts() {
        assert_eq!(Period::Daily.bucket_count(), 7);
        assert_eq!(Period::Weekly.bucket_count(), 4);
        assert_eq!(Period::Monthly.bucket_count(), 6);
    }

    #[test]
    fn test_period_wire_values() {
        assert_eq!(serde_json::to_string(&Period::Daily).unwrap(), "\"daily\"");
        assert_eq!(
            serde_json::from_str::<Period>("\"monthly\"").unwrap(),
            Period::Monthly
        );
    }

    #[test]
    fn test_create_transaction_request_wire_names() {
        let request = CreateTransactionRequest {
            description: "Bus ticket".to_string(),
            date: "2024-04-30".to_string(),
            amount: 2.75,
            category_id: "4".to_string(),
            transaction_type: TransactionType::Expense,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["categoryID"], "4");
        assert_eq!(value["type"], "expense");
        assert_eq!(value["amount"], 2.75);
    }

    #[test]
    fn test_chart_bar_point_front_color_name() {
        let point = ChartBarPoint {
            value: 10.0,
            label: "Mon".to_string(),
            front_color: "#00D699".to_string(),
        };

        let value = serde_json::to_value(&point).unwrap();
        assert_eq!(value["frontColor"], "#00D699");
    }
}
