//! Derived values computed from the current state, never stored.

use crate::expense::Expense;
use crate::state::BudgetState;

/// Grand total spent across all expenses. The category filter never applies
/// here.
pub fn total_expenses(state: &BudgetState) -> f64 {
    state.expenses.iter().map(|expense| expense.amount).sum()
}

/// Budget minus total spent. Negative means overspend, which is a meaningful
/// value rather than an error.
pub fn remaining_budget(state: &BudgetState) -> f64 {
    state.budget - total_expenses(state)
}

/// Expenses visible under the active category filter, in insertion order.
pub fn filtered_expenses(state: &BudgetState) -> Vec<&Expense> {
    match &state.current_category {
        None => state.expenses.iter().collect(),
        Some(category) => state
            .expenses
            .iter()
            .filter(|expense| expense.category == *category)
            .collect(),
    }
}

/// Share of the budget already spent, clamped to `[0, 1]` for progress
/// displays. Zero when no budget has been set.
pub fn spent_fraction(state: &BudgetState) -> f64 {
    if state.budget <= 0.0 {
        return 0.0;
    }
    (total_expenses(state) / state.budget).clamp(0.0, 1.0)
}

/// Snapshot of the derived values for a single render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSummary {
    pub budget: f64,
    pub total_expenses: f64,
    pub remaining_budget: f64,
    pub spent_fraction: f64,
}

impl BudgetSummary {
    pub fn of(state: &BudgetState) -> Self {
        let total = total_expenses(state);
        Self {
            budget: state.budget,
            total_expenses: total,
            remaining_budget: state.budget - total,
            spent_fraction: spent_fraction(state),
        }
    }
}
