//! Demo driver that runs the domain services over a sample ledger and
//! prints what each screen would show.

use anyhow::Result;
use log::info;
use shared::{Category, Period, PeriodReportRequest, SavingsGoal, Transaction, TransactionType};

use expense_tracker_core::domain::SearchQuery;
use expense_tracker_core::state::ChartState;
use expense_tracker_core::AppServices;

// The backend is inconsistent about numeric fields, so the sample keeps
// a mix of shapes the way real responses look
const SAMPLE_LEDGER: &str = r#"[
    {"transactionID": 1, "userID": 1, "categoryID": 2, "type": "income",
     "amount": 1250, "date": "2024-04-01T00:00:00.000Z", "description": "Paycheck"},
    {"transactionID": 2, "userID": 1, "categoryID": 5, "type": "expense",
     "amount": "84.30", "date": "2024-04-06", "description": "Groceries"},
    {"transactionID": 3, "userID": 1, "categoryID": 5, "type": "expense",
     "amount": "40", "date": "2024-04-29", "description": "Gas"},
    {"transactionID": 4, "userID": 1, "categoryID": 2, "type": "income",
     "amount": "100", "date": "2024-04-30", "description": "Refund"},
    {"transactionID": 5, "userID": 1, "categoryID": 7, "type": "goal",
     "amount": 75, "date": "2024-04-15", "description": "Vacation fund"},
    {"transactionID": 6, "userID": 1, "categoryID": 5, "type": "expense",
     "amount": "abc", "date": "2024-04-28", "description": "Glitched row"},
    {"transactionID": 7, "userID": 1, "categoryID": 3, "type": "expense",
     "amount": "19.99", "date": "2024-03-12", "description": "Streaming"}
]"#;

const SAMPLE_CATEGORIES: &str = r#"[
    {"categoryID": 2, "name": "Salary", "icon": "money-bill-wave", "description": "Regular income"},
    {"categoryID": "3", "name": "Entertainment", "icon": "film", "description": "Fun money"},
    {"categoryID": 5, "name": "Groceries", "icon": "shopping-cart", "description": "Food and household"},
    {"categoryID": 7, "name": "Savings", "icon": "piggy-bank", "description": "Goal deposits"}
]"#;

fn main() -> Result<()> {
    env_logger::init();
    info!("Starting expense tracker demo");

    let transactions: Vec<Transaction> = serde_json::from_str(SAMPLE_LEDGER)?;
    let categories: Vec<Category> = serde_json::from_str(SAMPLE_CATEGORIES)?;
    let services = AppServices::new();

    // Analysis screen: one report per period, pinned to the ledger's era
    for period in Period::all() {
        let request = PeriodReportRequest {
            period,
            reference_date: Some("2024-04-30".to_string()),
        };
        let report = services
            .analysis_service
            .report_for_request(&transactions, &request)?;

        println!("{} report:", period.label());
        for bucket in &report.buckets {
            println!(
                "  {:<4} income {:>8.2}  expense {:>8.2}",
                bucket.label, bucket.income_total, bucket.expense_total
            );
        }
        println!(
            "  window totals: income {:.2}, expense {:.2}",
            report.total_income, report.total_expense
        );

        if period == Period::Daily {
            let bars = services.chart_service.bar_series(&report);
            println!("  chart bars: {}", bars.len());
        }
        println!();
    }

    // Summary cards under the chart
    let summary = services.analysis_service.summarize(&transactions);
    println!(
        "All-time totals: income {:.2}, expense {:.2}, toward goals {:.2}",
        summary.income, summary.expense, summary.goal
    );
    println!(
        "Income card: {}",
        services
            .analysis_service
            .total_for_type(&transactions, TransactionType::Income)
    );
    println!();

    // History screen: month sections, newest first
    for section in services.table_service.group_by_month(&transactions) {
        println!("{}", section.title);
        for row in services
            .table_service
            .format_transactions_for_table(&section.transactions)
        {
            let category_name = categories
                .iter()
                .find(|category| category.category_id == row.category_id)
                .map(|category| category.name.as_str())
                .unwrap_or("Uncategorized");
            println!(
                "  [{}] {} {} ({}) {}",
                row.icon, row.formatted_date, row.description, category_name, row.formatted_amount
            );
        }
    }
    println!();

    // Search screen: only income rows
    let query = SearchQuery {
        category_id: None,
        transaction_type: Some("income".to_string()),
    };
    let matches = services.search_service.filter(&transactions, &query);
    println!("Search 'income' matched {} rows", matches.len());

    // Savings screen
    let goal = SavingsGoal {
        name: "Vacation".to_string(),
        current_amount: services.goal_service.saved_total(&transactions),
        target_amount: 500.0,
    };
    services.goal_service.validate_goal(&goal)?;
    println!(
        "Goal '{}': {:.1}% funded",
        goal.name,
        services.goal_service.progress_for_goal(&goal)
    );
    println!();

    // Rapid period switching: only the latest request may land
    let mut chart_state = ChartState::new();
    let stale = chart_state.begin_load(Period::Daily);
    let current = chart_state.begin_load(Period::Monthly);

    let daily = services.analysis_service.report_for_request(
        &transactions,
        &PeriodReportRequest {
            period: Period::Daily,
            reference_date: Some("2024-04-30".to_string()),
        },
    )?;
    let monthly = services.analysis_service.report_for_request(
        &transactions,
        &PeriodReportRequest {
            period: Period::Monthly,
            reference_date: Some("2024-04-30".to_string()),
        },
    )?;

    let stale_landed = chart_state.complete_load(stale, daily);
    let current_landed = chart_state.complete_load(current, monthly);
    println!(
        "Superseded load landed: {}, latest load landed: {}",
        stale_landed, current_landed
    );

    info!("Demo finished");
    Ok(())
}
