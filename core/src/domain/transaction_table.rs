//! Transaction list display logic for the expense tracker.
//!
//! This module turns raw transactions into the formatted rows the home and
//! history screens render. Unlike the analysis aggregates, nothing here
//! does arithmetic beyond parsing an amount; it is presentation logic kept
//! out of the screens so every list in the app formats the same way.
//!
//! ## Key Responsibilities
//!
//! - **Row Formatting**: Converting raw transactions into display rows
//! - **Amount Formatting**: Signed currency strings, sign taken from the
//!   transaction type rather than the amount itself
//! - **Date Formatting**: Multiple date format options (long, short, ISO)
//! - **Icon Selection**: Mapping transaction types to row badge icons
//! - **Month Grouping**: Sectioning history rows by calendar month
//!
//! ## Core Components
//!
//! - **TransactionTableService**: Main service for list operations
//! - **TransactionTableConfig**: Configuration for display preferences
//! - **FormattedTransaction**: Structured data for row display

use chrono::Datelike;
use log::warn;
use serde::{Deserialize, Serialize};
use shared::{FormattedTransaction, MonthSection, Transaction, TransactionType};

use crate::domain::analysis_service::parse_amount;
use crate::domain::calendar::CalendarService;

/// Configuration for transaction list display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionTableConfig {
    pub show_currency_symbol: bool,
    pub date_format: DateFormat,
}

/// Date formatting options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum DateFormat {
    MonthDayYear, // "April 30, 2024"
    ShortDate,    // "04/30/2024"
    ISO,          // "2024-04-30"
}

impl Default for TransactionTableConfig {
    fn default() -> Self {
        Self {
            show_currency_symbol: true,
            date_format: DateFormat::MonthDayYear,
        }
    }
}

/// Transaction list service that handles row formatting and grouping
#[derive(Clone)]
pub struct TransactionTableService {
    config: TransactionTableConfig,
    calendar: CalendarService,
}

impl TransactionTableService {
    /// Create a new TransactionTableService with default configuration
    pub fn new() -> Self {
        Self::with_config(TransactionTableConfig::default())
    }

    /// Create a new TransactionTableService with custom configuration
    pub fn with_config(config: TransactionTableConfig) -> Self {
        Self {
            config,
            calendar: CalendarService::new(),
        }
    }

    /// Format a list of transactions for display
    pub fn format_transactions_for_table(
        &self,
        transactions: &[Transaction],
    ) -> Vec<FormattedTransaction> {
        transactions
            .iter()
            .map(|transaction| self.format_single_transaction(transaction))
            .collect()
    }

    /// Format a single transaction for display
    pub fn format_single_transaction(&self, transaction: &Transaction) -> FormattedTransaction {
        FormattedTransaction {
            id: transaction.transaction_id.clone(),
            icon: self.icon_name(transaction.transaction_type).to_string(),
            formatted_date: self.format_date(&transaction.date),
            description: transaction.description.clone(),
            formatted_amount: self.format_amount(transaction),
            transaction_type: transaction.transaction_type,
            category_id: transaction.category_id.clone(),
            raw_amount: transaction.amount.clone(),
            raw_date: transaction.date.clone(),
        }
    }

    /// Format a date for display based on configuration
    pub fn format_date(&self, date_str: &str) -> String {
        if let Some(date) = self.calendar.parse_transaction_date(date_str) {
            match self.config.date_format {
                DateFormat::MonthDayYear => format!(
                    "{} {}, {}",
                    self.calendar.month_name(date.month()),
                    date.day(),
                    date.year()
                ),
                DateFormat::ShortDate => {
                    format!("{:02}/{:02}/{}", date.month(), date.day(), date.year())
                }
                DateFormat::ISO => {
                    format!("{}-{:02}-{:02}", date.year(), date.month(), date.day())
                }
            }
        } else {
            // Fallback to original string
            date_str.to_string()
        }
    }

    /// Format a transaction amount as a signed currency string.
    ///
    /// The sign comes from the transaction type, not the stored amount:
    /// income rows read "+$100.00", expense and goal rows "-$40.00".
    pub fn format_amount(&self, transaction: &Transaction) -> String {
        let magnitude = parse_amount(&transaction.amount).abs();
        let currency = if self.config.show_currency_symbol {
            "$"
        } else {
            ""
        };
        let sign = match transaction.transaction_type {
            TransactionType::Income => "+",
            TransactionType::Expense | TransactionType::Goal => "-",
        };
        format!("{}{}{:.2}", sign, currency, magnitude)
    }

    /// Icon name for a transaction row's badge
    pub fn icon_name(&self, transaction_type: TransactionType) -> &'static str {
        match transaction_type {
            TransactionType::Income => "money-bill-wave",
            _ => "shopping-cart",
        }
    }

    /// Group transactions into month sections, newest month first.
    ///
    /// Rows keep their input order within a section. Transactions whose
    /// date cannot be parsed belong to no month and are skipped.
    pub fn group_by_month(&self, transactions: &[Transaction]) -> Vec<MonthSection> {
        let mut sections: Vec<((i32, u32), MonthSection)> = Vec::new();
        for transaction in transactions {
            let date = match self.calendar.parse_transaction_date(&transaction.date) {
                Some(date) => date,
                None => {
                    warn!(
                        "📋 TABLE: Skipping transaction {} with unparseable date '{}'",
                        transaction.transaction_id, transaction.date
                    );
                    continue;
                }
            };

            let key = (date.year(), date.month());
            match sections.iter_mut().find(|(section_key, _)| *section_key == key) {
                Some((_, section)) => section.transactions.push(transaction.clone()),
                None => sections.push((
                    key,
                    MonthSection {
                        title: format!(
                            "{} {}",
                            self.calendar.month_name(date.month()),
                            date.year()
                        ),
                        transactions: vec![transaction.clone()],
                    },
                )),
            }
        }

        sections.sort_by(|a, b| b.0.cmp(&a.0));
        sections.into_iter().map(|(_, section)| section).collect()
    }
}

impl Default for TransactionTableService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_transaction(
        id: &str,
        transaction_type: TransactionType,
        amount: &str,
        date: &str,
    ) -> Transaction {
        Transaction {
            transaction_id: id.to_string(),
            user_id: "1".to_string(),
            category_id: "5".to_string(),
            transaction_type,
            amount: amount.to_string(),
            date: date.to_string(),
            description: format!("test {}", id),
        }
    }

    #[test]
    fn test_default_config() {
        let config = TransactionTableConfig::default();
        assert!(config.show_currency_symbol);
        assert_eq!(config.date_format, DateFormat::MonthDayYear);
    }

    #[test]
    fn test_format_amount_sign_follows_type() {
        let service = TransactionTableService::new();

        let income = create_test_transaction("1", TransactionType::Income, "100", "2024-04-30");
        let expense = create_test_transaction("2", TransactionType::Expense, "40", "2024-04-29");
        let goal = create_test_transaction("3", TransactionType::Goal, "25.5", "2024-04-28");

        assert_eq!(service.format_amount(&income), "+$100.00");
        assert_eq!(service.format_amount(&expense), "-$40.00");
        assert_eq!(service.format_amount(&goal), "-$25.50");
    }

    #[test]
    fn test_format_amount_uses_magnitude() {
        let service = TransactionTableService::new();

        // A negatively stored amount still renders by type
        let income = create_test_transaction("1", TransactionType::Income, "-40", "2024-04-30");
        assert_eq!(service.format_amount(&income), "+$40.00");
    }

    #[test]
    fn test_format_amount_unparseable_renders_zero() {
        let service = TransactionTableService::new();

        let expense = create_test_transaction("1", TransactionType::Expense, "abc", "2024-04-30");
        assert_eq!(service.format_amount(&expense), "-$0.00");

        // "NaN" parses as a float but must not reach the screen
        let glitched = create_test_transaction("2", TransactionType::Expense, "NaN", "2024-04-30");
        assert_eq!(service.format_amount(&glitched), "-$0.00");
    }

    #[test]
    fn test_format_amount_without_currency_symbol() {
        let config = TransactionTableConfig {
            show_currency_symbol: false,
            ..TransactionTableConfig::default()
        };
        let service = TransactionTableService::with_config(config);

        let income = create_test_transaction("1", TransactionType::Income, "100", "2024-04-30");
        assert_eq!(service.format_amount(&income), "+100.00");
    }

    #[test]
    fn test_format_date_variants() {
        let long = TransactionTableService::new();
        assert_eq!(long.format_date("2024-04-30"), "April 30, 2024");
        assert_eq!(
            long.format_date("2024-04-30T10:30:00.000Z"),
            "April 30, 2024"
        );

        let short = TransactionTableService::with_config(TransactionTableConfig {
            date_format: DateFormat::ShortDate,
            ..TransactionTableConfig::default()
        });
        assert_eq!(short.format_date("2024-04-30"), "04/30/2024");

        let iso = TransactionTableService::with_config(TransactionTableConfig {
            date_format: DateFormat::ISO,
            ..TransactionTableConfig::default()
        });
        assert_eq!(iso.format_date("2024-04-30T10:30:00.000Z"), "2024-04-30");
    }

    #[test]
    fn test_format_date_falls_back_to_original() {
        let service = TransactionTableService::new();
        assert_eq!(service.format_date("not-a-date"), "not-a-date");
    }

    #[test]
    fn test_icon_name() {
        let service = TransactionTableService::new();

        assert_eq!(service.icon_name(TransactionType::Income), "money-bill-wave");
        assert_eq!(service.icon_name(TransactionType::Expense), "shopping-cart");
        assert_eq!(service.icon_name(TransactionType::Goal), "shopping-cart");
    }

    #[test]
    fn test_format_single_transaction() {
        let service = TransactionTableService::new();
        let transaction =
            create_test_transaction("42", TransactionType::Income, "100", "2024-04-30");

        let row = service.format_single_transaction(&transaction);

        assert_eq!(row.id, "42");
        assert_eq!(row.icon, "money-bill-wave");
        assert_eq!(row.formatted_date, "April 30, 2024");
        assert_eq!(row.description, "test 42");
        assert_eq!(row.formatted_amount, "+$100.00");
        assert_eq!(row.transaction_type, TransactionType::Income);
        assert_eq!(row.category_id, "5");
        assert_eq!(row.raw_amount, "100");
        assert_eq!(row.raw_date, "2024-04-30");
    }

    #[test]
    fn test_format_transactions_for_table() {
        let service = TransactionTableService::new();
        let transactions = vec![
            create_test_transaction("1", TransactionType::Income, "100", "2024-04-30"),
            create_test_transaction("2", TransactionType::Expense, "40", "2024-04-29"),
        ];

        let rows = service.format_transactions_for_table(&transactions);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].formatted_amount, "+$100.00");
        assert_eq!(rows[1].formatted_amount, "-$40.00");
    }

    #[test]
    fn test_group_by_month_newest_first() {
        let service = TransactionTableService::new();
        let transactions = vec![
            create_test_transaction("1", TransactionType::Expense, "10", "2024-03-05"),
            create_test_transaction("2", TransactionType::Income, "100", "2024-04-01"),
            create_test_transaction("3", TransactionType::Expense, "20", "2024-03-20"),
            create_test_transaction("4", TransactionType::Expense, "5", "2023-12-31"),
        ];

        let sections = service.group_by_month(&transactions);

        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].title, "April 2024");
        assert_eq!(sections[1].title, "March 2024");
        assert_eq!(sections[2].title, "December 2023");

        // Rows keep their input order within a section
        assert_eq!(sections[1].transactions.len(), 2);
        assert_eq!(sections[1].transactions[0].transaction_id, "1");
        assert_eq!(sections[1].transactions[1].transaction_id, "3");
    }

    #[test]
    fn test_group_by_month_skips_unparseable_dates() {
        let service = TransactionTableService::new();
        let transactions = vec![
            create_test_transaction("1", TransactionType::Expense, "10", "bad-date"),
            create_test_transaction("2", TransactionType::Income, "100", "2024-04-01"),
        ];

        let sections = service.group_by_month(&transactions);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].transactions.len(), 1);
        assert_eq!(sections[0].transactions[0].transaction_id, "2");
    }
}
