//! # Domain Module
//!
//! Contains all business logic for the expense tracker's screens.
//!
//! This module encapsulates the calculations and formatting rules the app
//! applies to transaction data after it has been fetched. It operates
//! independently of any specific UI framework or transport mechanism.
//!
//! ## Module Organization
//!
//! - **analysis_service**: Period aggregation and ledger summaries for the
//!   analysis chart
//! - **calendar**: Date parsing, week numbering, and date-range selection
//! - **chart**: Chart-ready bar series construction
//! - **goal_service**: Savings goal progress and validation
//! - **search_service**: Category and type filtering for the search screen
//! - **transaction_table**: Row formatting and month grouping for
//!   transaction lists
//!
//! ## Key Responsibilities
//!
//! - **Period Aggregation**: Bucketing income and expenses by day, week,
//!   or month relative to a reference date
//! - **Defensive Normalization**: Tolerating malformed amounts and dates
//!   without ever failing a whole screen
//! - **Display Formatting**: Producing consistent currency, date, and
//!   section strings for every list in the app
//! - **Goal Tracking**: Measuring savings progress against targets
//!
//! ## Business Rules
//!
//! - Goal transactions fund savings and are excluded from income and
//!   expense totals
//! - An unparseable amount counts as zero; an unparseable date drops the
//!   record from date-based views
//! - Aggregation buckets are always fully populated and run oldest to
//!   newest
//! - The week-number scheme starts weeks on Sunday and is not ISO-8601

pub mod analysis_service;
pub mod calendar;
pub mod chart;
pub mod goal_service;
pub mod search_service;
pub mod transaction_table;

pub use analysis_service::*;
pub use calendar::*;
pub use chart::*;
pub use goal_service::*;
pub use search_service::*;
pub use transaction_table::*;
