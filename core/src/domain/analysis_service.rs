//! Period aggregation for the analysis screen.
//!
//! This module turns a flat transaction list into the bucketed
//! income/expense series the analysis chart renders: the trailing 7 days,
//! the trailing 4 week numbers, or the trailing 6 calendar months relative
//! to a reference date. It also produces the whole-ledger summaries shown
//! under the chart.
//!
//! Aggregation is deliberately forgiving about data quality. Depending on
//! backend version an amount arrives as a JSON number or a string, and a
//! few historical rows hold outright garbage; a bad amount counts as zero
//! and a bad date drops the record, but a report is always produced.

use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate};
use log::{info, warn};
use shared::{
    Period, PeriodBucket, PeriodReport, PeriodReportRequest, Transaction, TransactionType,
    TypeSummary,
};

use crate::domain::calendar::CalendarService;

/// Parse a raw amount string to a number, treating anything malformed
/// as zero.
///
/// Currency symbols, thousands separators, and stray spaces are stripped
/// before parsing ("$1,234.56" is 1234.56). A malformed amount must never
/// take the analysis screen down, so parse failures count as 0.0, and so
/// do the non-finite spellings the float parser would otherwise accept
/// ("NaN", "inf"): a single NaN would poison every total it is summed
/// into.
pub fn parse_amount(raw: &str) -> f64 {
    // Clean the input - remove dollar signs, commas, spaces
    let cleaned = raw.trim().replace("$", "").replace(",", "").replace(" ", "");
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            if !cleaned.is_empty() {
                warn!("📊 ANALYSIS: Treating malformed amount '{}' as zero", raw);
            }
            0.0
        }
    }
}

/// Service that aggregates transactions into period reports
#[derive(Clone)]
pub struct AnalysisService {
    calendar: CalendarService,
}

impl AnalysisService {
    /// Create a new AnalysisService instance
    pub fn new() -> Self {
        Self {
            calendar: CalendarService::new(),
        }
    }

    /// Build a period report from a request, resolving the optional
    /// reference date override (today when absent)
    pub fn report_for_request(
        &self,
        transactions: &[Transaction],
        request: &PeriodReportRequest,
    ) -> Result<PeriodReport> {
        let reference_date = self
            .calendar
            .resolve_reference_date(request.reference_date.as_deref())?;
        info!(
            "📊 ANALYSIS: Building {} report over {} transactions (reference date {})",
            request.period.label(),
            transactions.len(),
            reference_date
        );
        Ok(self.aggregate(transactions, request.period, reference_date))
    }

    /// Aggregate transactions into chronological buckets for the given
    /// period, ending at the reference date.
    ///
    /// Buckets run oldest to newest and are always fully populated (7 for
    /// daily, 4 for weekly, 6 for monthly) even when no transaction
    /// matches. Goal transactions never contribute to the totals, and
    /// transactions outside the window are ignored.
    pub fn aggregate(
        &self,
        transactions: &[Transaction],
        period: Period,
        reference_date: NaiveDate,
    ) -> PeriodReport {
        let entries = self.dated(transactions);
        let buckets = match period {
            Period::Daily => self.daily_buckets(&entries, reference_date),
            Period::Weekly => self.weekly_buckets(&entries, reference_date),
            Period::Monthly => self.monthly_buckets(&entries, reference_date),
        };

        let total_income = buckets.iter().map(|bucket| bucket.income_total).sum();
        let total_expense = buckets.iter().map(|bucket| bucket.expense_total).sum();

        PeriodReport {
            period,
            buckets,
            total_income,
            total_expense,
        }
    }

    /// Sum every transaction in the ledger by type, regardless of date
    pub fn summarize(&self, transactions: &[Transaction]) -> TypeSummary {
        let mut summary = TypeSummary::default();
        for transaction in transactions {
            let amount = parse_amount(&transaction.amount);
            match transaction.transaction_type {
                TransactionType::Income => summary.income += amount,
                TransactionType::Expense => summary.expense += amount,
                TransactionType::Goal => summary.goal += amount,
            }
        }
        summary
    }

    /// Whole-ledger total for one transaction type, formatted with two
    /// decimal places for the summary cards
    pub fn total_for_type(
        &self,
        transactions: &[Transaction],
        transaction_type: TransactionType,
    ) -> String {
        let total: f64 = transactions
            .iter()
            .filter(|transaction| transaction.transaction_type == transaction_type)
            .map(|transaction| parse_amount(&transaction.amount))
            .sum();
        format!("{:.2}", total)
    }

    /// One bucket per trailing day, labeled with the weekday abbreviation
    fn daily_buckets(
        &self,
        entries: &[(&Transaction, NaiveDate)],
        reference_date: NaiveDate,
    ) -> Vec<PeriodBucket> {
        let mut buckets = Vec::with_capacity(7);
        for offset in (0..7).rev() {
            let day = reference_date - Duration::days(offset);
            let (income_total, expense_total) = bucket_totals(entries, |date| date == day);
            buckets.push(PeriodBucket {
                label: self.calendar.weekday_abbrev(day).to_string(),
                income_total,
                expense_total,
            });
        }
        buckets
    }

    /// One bucket per trailing week number within the reference year.
    ///
    /// A transaction lands in a bucket when its week number matches and it
    /// falls in the same calendar year as the reference date, so a week 17
    /// from last year never bleeds into this year's chart.
    fn weekly_buckets(
        &self,
        entries: &[(&Transaction, NaiveDate)],
        reference_date: NaiveDate,
    ) -> Vec<PeriodBucket> {
        let reference_year = reference_date.year();
        let current_week = self.calendar.week_number(reference_date);
        let mut buckets = Vec::with_capacity(4);
        for offset in (0..4).rev() {
            let week = current_week - offset;
            let (income_total, expense_total) = bucket_totals(entries, |date| {
                date.year() == reference_year && self.calendar.week_number(date) == week
            });
            buckets.push(PeriodBucket {
                label: format!("W {}", week),
                income_total,
                expense_total,
            });
        }
        buckets
    }

    /// One bucket per trailing calendar month, labeled with the month
    /// abbreviation. Walks backwards through December into the previous
    /// year when the window crosses January.
    fn monthly_buckets(
        &self,
        entries: &[(&Transaction, NaiveDate)],
        reference_date: NaiveDate,
    ) -> Vec<PeriodBucket> {
        let mut buckets = Vec::with_capacity(6);
        for offset in (0..6).rev() {
            let (month, year) =
                self.calendar
                    .months_back(reference_date.month(), reference_date.year(), offset);
            let (income_total, expense_total) =
                bucket_totals(entries, |date| date.month() == month && date.year() == year);
            buckets.push(PeriodBucket {
                label: self.calendar.month_abbrev(month).to_string(),
                income_total,
                expense_total,
            });
        }
        buckets
    }

    /// Pair each transaction with its parsed date, dropping records whose
    /// date cannot be parsed
    fn dated<'a>(&self, transactions: &'a [Transaction]) -> Vec<(&'a Transaction, NaiveDate)> {
        transactions
            .iter()
            .filter_map(|transaction| {
                match self.calendar.parse_transaction_date(&transaction.date) {
                    Some(date) => Some((transaction, date)),
                    None => {
                        warn!(
                            "📊 ANALYSIS: Skipping transaction {} with unparseable date '{}'",
                            transaction.transaction_id, transaction.date
                        );
                        None
                    }
                }
            })
            .collect()
    }
}

impl Default for AnalysisService {
    fn default() -> Self {
        Self::new()
    }
}

/// Sum the income and expense amounts of the entries a bucket predicate
/// accepts. Goal transactions are savings markers, not cash flow, and
/// contribute to neither side.
fn bucket_totals<F>(entries: &[(&Transaction, NaiveDate)], in_bucket: F) -> (f64, f64)
where
    F: Fn(NaiveDate) -> bool,
{
    let mut income_total = 0.0;
    let mut expense_total = 0.0;
    for (transaction, date) in entries {
        if !in_bucket(*date) {
            continue;
        }
        let amount = parse_amount(&transaction.amount);
        match transaction.transaction_type {
            TransactionType::Income => income_total += amount,
            TransactionType::Expense => expense_total += amount,
            TransactionType::Goal => {}
        }
    }
    (income_total, expense_total)
}
