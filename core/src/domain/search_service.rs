//! Transaction search logic for the search screen.
//!
//! Filters the loaded ledger by category and transaction type. Both
//! criteria are optional and combine with AND; an empty query returns
//! everything, which is what the screen shows before the user types.

use log::debug;
use shared::{Transaction, TransactionType};

/// Criteria entered on the search screen. Empty or missing fields do not
/// constrain the result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    /// Exact category id to match
    pub category_id: Option<String>,
    /// Transaction type name, matched case-insensitively
    pub transaction_type: Option<String>,
}

/// Service that filters transactions against search criteria
#[derive(Clone)]
pub struct SearchService;

impl SearchService {
    /// Create a new SearchService instance
    pub fn new() -> Self {
        Self
    }

    /// Filter transactions against the query.
    ///
    /// The type criterion is tolerant of casing ("INCOME" finds income
    /// rows) but an unrecognized type name matches nothing rather than
    /// falling back to everything.
    pub fn filter(&self, transactions: &[Transaction], query: &SearchQuery) -> Vec<Transaction> {
        let category_filter = normalized(query.category_id.as_deref());

        let type_filter = match normalized(query.transaction_type.as_deref()) {
            Some(raw) => match TransactionType::from_string(raw) {
                Ok(transaction_type) => Some(transaction_type),
                // No transaction can have an unknown type
                Err(_) => {
                    debug!("🔍 SEARCH: Unknown type filter '{}' matches nothing", raw);
                    return Vec::new();
                }
            },
            None => None,
        };

        transactions
            .iter()
            .filter(|transaction| {
                if let Some(category_id) = category_filter {
                    if transaction.category_id != category_id {
                        return false;
                    }
                }
                if let Some(transaction_type) = type_filter {
                    if transaction.transaction_type != transaction_type {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect()
    }
}

impl Default for SearchService {
    fn default() -> Self {
        Self::new()
    }
}

/// Treat blank input as "no filter"
fn normalized(raw: Option<&str>) -> Option<&str> {
    match raw {
        Some(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed)
            }
        }
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_transaction(
        id: &str,
        category_id: &str,
        transaction_type: TransactionType,
    ) -> Transaction {
        Transaction {
            transaction_id: id.to_string(),
            user_id: "1".to_string(),
            category_id: category_id.to_string(),
            transaction_type,
            amount: "10".to_string(),
            date: "2024-04-30".to_string(),
            description: format!("test {}", id),
        }
    }

    fn sample_transactions() -> Vec<Transaction> {
        vec![
            create_test_transaction("1", "2", TransactionType::Income),
            create_test_transaction("2", "5", TransactionType::Expense),
            create_test_transaction("3", "5", TransactionType::Income),
            create_test_transaction("4", "7", TransactionType::Goal),
        ]
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let service = SearchService::new();
        let transactions = sample_transactions();

        let results = service.filter(&transactions, &SearchQuery::default());

        assert_eq!(results.len(), 4);
    }

    #[test]
    fn test_filter_by_category() {
        let service = SearchService::new();
        let transactions = sample_transactions();

        let query = SearchQuery {
            category_id: Some("5".to_string()),
            transaction_type: None,
        };
        let results = service.filter(&transactions, &query);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].transaction_id, "2");
        assert_eq!(results[1].transaction_id, "3");
    }

    #[test]
    fn test_filter_by_type_is_case_insensitive() {
        let service = SearchService::new();
        let transactions = sample_transactions();

        let query = SearchQuery {
            category_id: None,
            transaction_type: Some("INCOME".to_string()),
        };
        let results = service.filter(&transactions, &query);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].transaction_id, "1");
        assert_eq!(results[1].transaction_id, "3");
    }

    #[test]
    fn test_filters_combine_with_and() {
        let service = SearchService::new();
        let transactions = sample_transactions();

        let query = SearchQuery {
            category_id: Some("5".to_string()),
            transaction_type: Some("income".to_string()),
        };
        let results = service.filter(&transactions, &query);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].transaction_id, "3");
    }

    #[test]
    fn test_unknown_type_matches_nothing() {
        let service = SearchService::new();
        let transactions = sample_transactions();

        let query = SearchQuery {
            category_id: None,
            transaction_type: Some("transfer".to_string()),
        };

        assert!(service.filter(&transactions, &query).is_empty());
    }

    #[test]
    fn test_blank_criteria_are_ignored() {
        let service = SearchService::new();
        let transactions = sample_transactions();

        let query = SearchQuery {
            category_id: Some("  ".to_string()),
            transaction_type: Some("".to_string()),
        };
        let results = service.filter(&transactions, &query);

        assert_eq!(results.len(), 4);
    }
}
