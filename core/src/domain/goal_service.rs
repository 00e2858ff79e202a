//! Savings goal logic for the progress cards.
//!
//! Computes how far along a savings goal is and how much the ledger has
//! put toward goals overall. Goal-typed transactions are the funding
//! records; they never show up in income or expense figures, so this is
//! the only place they are summed.

use shared::{SavingsGoal, Transaction, TransactionType};

use crate::domain::analysis_service::parse_amount;

/// Validation failures for a savings goal
#[derive(Debug, thiserror::Error)]
pub enum GoalValidationError {
    #[error("Goal name cannot be empty")]
    EmptyName,
    #[error("Target amount must be positive")]
    NonPositiveTargetAmount,
    #[error("Current amount cannot be negative")]
    NegativeCurrentAmount,
}

/// Service for savings goal calculations
#[derive(Clone)]
pub struct GoalService;

impl GoalService {
    /// Create a new GoalService instance
    pub fn new() -> Self {
        Self
    }

    /// Percentage of the target reached, clamped to 0..=100.
    ///
    /// A goal with no positive target has no meaningful progress and
    /// reports zero instead of dividing by it.
    pub fn progress_percent(&self, current_amount: f64, target_amount: f64) -> f64 {
        if target_amount <= 0.0 {
            return 0.0;
        }
        ((current_amount / target_amount) * 100.0).clamp(0.0, 100.0)
    }

    /// Progress for a goal card
    pub fn progress_for_goal(&self, goal: &SavingsGoal) -> f64 {
        self.progress_percent(goal.current_amount, goal.target_amount)
    }

    /// Whether the goal has been funded to its target
    pub fn is_complete(&self, goal: &SavingsGoal) -> bool {
        goal.target_amount > 0.0 && goal.current_amount >= goal.target_amount
    }

    /// Total amount the ledger has put toward goals
    pub fn saved_total(&self, transactions: &[Transaction]) -> f64 {
        transactions
            .iter()
            .filter(|transaction| transaction.transaction_type == TransactionType::Goal)
            .map(|transaction| parse_amount(&transaction.amount))
            .sum()
    }

    /// Validate a goal before it is shown or saved
    pub fn validate_goal(&self, goal: &SavingsGoal) -> Result<(), GoalValidationError> {
        if goal.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }
        if goal.target_amount <= 0.0 {
            return Err(GoalValidationError::NonPositiveTargetAmount);
        }
        if goal.current_amount < 0.0 {
            return Err(GoalValidationError::NegativeCurrentAmount);
        }
        Ok(())
    }
}

impl Default for GoalService {
    fn default() -> Self {
        Self::new()
    }
}
