//! Calendar domain logic for the expense tracker.
//!
//! This module contains all date-related business logic: parsing the date
//! strings the backend returns, weekday and month naming, the week-number
//! scheme the analysis chart labels use, and date-range selection for the
//! calendar screen. Screens only handle presentation concerns; every date
//! computation lives here.

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate, Weekday};
use log::warn;
use shared::Transaction;

/// Calendar service that handles date parsing, naming, and range selection
#[derive(Clone)]
pub struct CalendarService;

impl CalendarService {
    /// Create a new CalendarService instance
    pub fn new() -> Self {
        Self
    }

    /// Parse a transaction date string to a calendar date.
    ///
    /// Accepts `YYYY-MM-DD` with an optional `T...` time suffix (e.g.
    /// "2024-04-30T10:30:00Z"). Returns `None` for anything malformed or
    /// for impossible dates like February 30th.
    pub fn parse_transaction_date(&self, date_str: &str) -> Option<NaiveDate> {
        if let Some(date_part) = date_str.split('T').next() {
            let parts: Vec<&str> = date_part.split('-').collect();
            if parts.len() == 3 {
                if let (Ok(year), Ok(month), Ok(day)) = (
                    parts[0].parse::<i32>(),
                    parts[1].parse::<u32>(),
                    parts[2].parse::<u32>(),
                ) {
                    return NaiveDate::from_ymd_opt(year, month, day);
                }
            }
        }
        None
    }

    /// Resolve an optional `YYYY-MM-DD` override to a concrete date,
    /// defaulting to today's local date when no override is given
    pub fn resolve_reference_date(&self, reference_date: Option<&str>) -> Result<NaiveDate> {
        match reference_date {
            Some(raw) => self
                .parse_transaction_date(raw)
                .ok_or_else(|| anyhow::anyhow!("Invalid reference date: {}", raw)),
            None => Ok(Local::now().date_naive()),
        }
    }

    /// Get the human-readable name for a month number
    pub fn month_name(&self, month: u32) -> &'static str {
        match month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            12 => "December",
            _ => "Invalid Month",
        }
    }

    /// Three-letter month label for the monthly chart axis
    pub fn month_abbrev(&self, month: u32) -> &'static str {
        match month {
            1 => "Jan",
            2 => "Feb",
            3 => "Mar",
            4 => "Apr",
            5 => "May",
            6 => "Jun",
            7 => "Jul",
            8 => "Aug",
            9 => "Sep",
            10 => "Oct",
            11 => "Nov",
            12 => "Dec",
            _ => "Invalid Month",
        }
    }

    /// Weekday abbreviation for the daily chart axis
    pub fn weekday_abbrev(&self, date: NaiveDate) -> &'static str {
        match date.weekday() {
            Weekday::Sun => "Sun",
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
        }
    }

    /// Week-of-year number used by the weekly chart labels.
    ///
    /// Computed as `ceil((day_of_year + jan1_weekday + 1) / 7)` with a
    /// 0-based day of year and Sunday as weekday 0. This is not ISO-8601;
    /// weeks start on Sunday and week 1 is whatever partial week January 1st
    /// falls in.
    pub fn week_number(&self, date: NaiveDate) -> i32 {
        let day_of_year = date.ordinal0() as i32;
        let jan1_weekday = match NaiveDate::from_ymd_opt(date.year(), 1, 1) {
            Some(jan1) => jan1.weekday().num_days_from_sunday() as i32,
            // Unreachable for any year chrono can represent
            None => 0,
        };
        (day_of_year + jan1_weekday + 1 + 6) / 7
    }

    /// Navigate to the previous month
    pub fn previous_month(&self, current_month: u32, current_year: i32) -> (u32, i32) {
        if current_month == 1 {
            (12, current_year - 1)
        } else {
            (current_month - 1, current_year)
        }
    }

    /// Month/year a number of calendar months before the given month
    pub fn months_back(&self, month: u32, year: i32, offset: u32) -> (u32, i32) {
        let mut result = (month, year);
        for _ in 0..offset {
            result = self.previous_month(result.0, result.1);
        }
        result
    }

    /// Format a date string for human-readable display, e.g. "April 30, 2024".
    /// Falls back to the original string when the date does not parse.
    pub fn format_date_for_display(&self, date_str: &str) -> String {
        if let Some(date) = self.parse_transaction_date(date_str) {
            format!(
                "{} {}, {}",
                self.month_name(date.month()),
                date.day(),
                date.year()
            )
        } else {
            date_str.to_string()
        }
    }

    /// Keep transactions whose date falls inside the range, inclusive on
    /// both ends. Records with unparseable dates are dropped.
    pub fn filter_by_range(
        &self,
        transactions: &[Transaction],
        range: &DateRange,
    ) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|transaction| {
                match self.parse_transaction_date(&transaction.date) {
                    Some(date) => range.contains(date),
                    None => {
                        warn!(
                            "🗓️ CALENDAR: Skipping transaction {} with unparseable date '{}'",
                            transaction.transaction_id, transaction.date
                        );
                        false
                    }
                }
            })
            .cloned()
            .collect()
    }
}

impl Default for CalendarService {
    fn default() -> Self {
        Self::new()
    }
}

/// An inclusive date range picked on the calendar screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Build a range from two picked dates. Picking the earlier date second
    /// still produces a valid range: the endpoints are swapped.
    pub fn new(first: NaiveDate, second: NaiveDate) -> Self {
        if second < first {
            Self {
                start: second,
                end: first,
            }
        } else {
            Self {
                start: first,
                end: second,
            }
        }
    }

    /// Whether the date falls inside the range, endpoints included
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
