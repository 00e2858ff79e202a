//! # Expense Tracker Core
//!
//! Client-side domain services for the expense tracker app. The screens
//! fetch raw transaction data and hand it to these services; everything
//! the user actually sees (chart buckets, formatted rows, progress
//! percentages) is computed here. This crate:
//! - Uses synchronous, pure operations (no async/await)
//! - Never performs network or storage IO
//! - Takes reference dates as inputs so every calculation is reproducible

pub mod domain;
pub mod state;

/// Bundle of all domain services the screens use
pub struct AppServices {
    pub analysis_service: domain::AnalysisService,
    pub calendar_service: domain::CalendarService,
    pub chart_service: domain::ChartService,
    pub goal_service: domain::GoalService,
    pub search_service: domain::SearchService,
    pub table_service: domain::TransactionTableService,
}

impl AppServices {
    /// Create all services with default configuration
    pub fn new() -> Self {
        Self {
            analysis_service: domain::AnalysisService::new(),
            calendar_service: domain::CalendarService::new(),
            chart_service: domain::ChartService::new(),
            goal_service: domain::GoalService::new(),
            search_service: domain::SearchService::new(),
            table_service: domain::TransactionTableService::new(),
        }
    }
}

impl Default for AppServices {
    fn default() -> Self {
        Self::new()
    }
}
