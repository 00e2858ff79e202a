//! # Chart State Module
//!
//! This module manages the analysis screen's chart state: the selected
//! period, the latest report, and load tracking. Report loads are
//! asynchronous and can overlap when the user switches periods quickly;
//! a load token guarantees that only the most recent request lands, no
//! matter what order the responses arrive in.

use shared::{Period, PeriodReport};

/// Chart-specific state for the analysis screen
#[derive(Debug)]
pub struct ChartState {
    /// Currently selected aggregation period
    pub selected_period: Period,

    /// Most recently landed report, if any
    pub report: Option<PeriodReport>,

    /// Whether a report load is currently in flight
    pub is_loading: bool,

    /// Error message if the last load failed
    pub error_message: Option<String>,

    /// Token of the newest load; completions carrying any other token
    /// are stale and discarded
    current_token: u64,
}

impl ChartState {
    /// Create new chart state with default values
    pub fn new() -> Self {
        Self {
            selected_period: Period::Daily, // Default to the 7-day view
            report: None,
            is_loading: false,
            error_message: None,
            current_token: 0,
        }
    }

    /// Start a load for the given period and return its token.
    ///
    /// Starting a new load supersedes every earlier one: their
    /// completions will no longer match the current token.
    pub fn begin_load(&mut self, period: Period) -> u64 {
        self.selected_period = period;
        self.is_loading = true;
        self.error_message = None;
        self.current_token += 1;
        self.current_token
    }

    /// Land a finished report if its token is still current.
    ///
    /// Returns false for stale completions, which leave the state
    /// untouched.
    pub fn complete_load(&mut self, token: u64, report: PeriodReport) -> bool {
        if token != self.current_token {
            return false;
        }
        self.report = Some(report);
        self.is_loading = false;
        self.error_message = None;
        true
    }

    /// Record a failed load if its token is still current.
    ///
    /// Returns false for stale failures, which leave the state untouched.
    pub fn fail_load(&mut self, token: u64, error: String) -> bool {
        if token != self.current_token {
            return false;
        }
        self.error_message = Some(error);
        self.is_loading = false;
        true
    }

    /// Clear report data and reset loading state. Any load still in
    /// flight is superseded and cannot land afterwards.
    pub fn clear_data(&mut self) {
        self.report = None;
        self.is_loading = false;
        self.error_message = None;
        self.current_token += 1;
    }
}

impl Default for ChartState {
    fn default() -> Self {
        Self::new()
    }
}
