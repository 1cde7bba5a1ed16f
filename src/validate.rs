//! Pre-dispatch validation: the gate a form submission passes before any
//! action is issued. Checks are synchronous and have no side effects on
//! failure.

use crate::catalog;
use crate::errors::{BudgetError, Result};
use crate::expense::DraftExpense;

/// Rejects drafts with missing fields, a zero or negative amount, or a
/// category that is not in the catalog.
pub fn validate_draft(draft: &DraftExpense) -> Result<()> {
    if draft.name.trim().is_empty() || draft.category.is_empty() || draft.amount == 0.0 {
        return Err(BudgetError::RequiredFields);
    }
    if draft.amount < 0.0 {
        return Err(BudgetError::RequiredFields);
    }
    if catalog::find_category(&draft.category).is_none() {
        return Err(BudgetError::UnknownCategory(draft.category.clone()));
    }
    Ok(())
}

/// Rejects an amount whose increase over `previous_amount` exceeds the
/// remaining budget. For a new expense `previous_amount` is zero; for an edit
/// it is the amount captured when editing began, so only the delta counts
/// against the remainder.
pub fn check_available(amount: f64, previous_amount: f64, remaining: f64) -> Result<()> {
    let increase = amount - previous_amount;
    if increase > remaining {
        return Err(BudgetError::ExceedsBudget {
            amount,
            available: remaining,
        });
    }
    Ok(())
}
