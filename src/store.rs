//! The budget store: single owner of the tracker state, dispatch entry point,
//! and the persistence side of every mutation.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::Result;
use crate::expense::{DraftExpense, Expense};
use crate::state::{reduce, BudgetAction, BudgetState};
use crate::storage::{KeyValueStore, BUDGET_KEY, EXPENSES_KEY};
use crate::summary::{remaining_budget, BudgetSummary};
use crate::validate;

/// Owns the [`BudgetState`] and the key-value store backing it.
///
/// Each dispatch replaces the state wholesale and, when the budget or the
/// expense list changed, writes both back to storage. A failed write is
/// logged and the in-memory state stays authoritative; nothing here is fatal.
pub struct BudgetStore {
    state: BudgetState,
    storage: Box<dyn KeyValueStore>,
}

impl BudgetStore {
    /// Rehydrates the state from storage. Absent or malformed values fall
    /// back to the defaults (budget 0, no expenses) without erroring.
    pub fn initialize(storage: Box<dyn KeyValueStore>) -> Self {
        let budget = match storage.get(BUDGET_KEY) {
            None => 0.0,
            Some(raw) => raw.trim().parse::<f64>().unwrap_or_else(|_| {
                warn!(value = %raw, "Persisted budget is not a number, defaulting to 0");
                0.0
            }),
        };
        let expenses = match storage.get(EXPENSES_KEY) {
            None => Vec::new(),
            Some(raw) => serde_json::from_str::<Vec<Expense>>(&raw).unwrap_or_else(|err| {
                warn!(%err, "Persisted expenses are malformed, defaulting to empty");
                Vec::new()
            }),
        };
        debug!(budget, expense_count = expenses.len(), "Store initialized");
        Self {
            state: BudgetState::new(budget, expenses),
            storage,
        }
    }

    /// The current state snapshot.
    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    /// Derived totals for the current state.
    pub fn summary(&self) -> BudgetSummary {
        BudgetSummary::of(&self.state)
    }

    /// Applies one action and persists the budget and expense list if the
    /// action changed either.
    pub fn dispatch(&mut self, action: BudgetAction) {
        let next = reduce(self.state.clone(), action);
        let changed =
            next.budget != self.state.budget || next.expenses != self.state.expenses;
        self.state = next;
        if changed {
            self.persist();
        }
    }

    /// Loads the expense identified by `id` into the edit form.
    pub fn begin_edit(&mut self, id: Uuid) {
        self.dispatch(BudgetAction::GetExpenseById { id });
    }

    /// Validates and submits a form draft. Routes to an update when an
    /// editing pointer is set, otherwise adds a new expense. The overspend
    /// check is delta-based: only the increase over the amount the edited
    /// expense had counts against the remaining budget.
    pub fn submit(&mut self, draft: DraftExpense) -> Result<()> {
        validate::validate_draft(&draft)?;
        let previous_amount = self
            .state
            .editing_expense()
            .map(|expense| expense.amount)
            .unwrap_or(0.0);
        validate::check_available(draft.amount, previous_amount, remaining_budget(&self.state))?;

        match self.state.editing_id {
            Some(id) => {
                let expense = Expense {
                    id,
                    name: draft.name,
                    amount: draft.amount,
                    category: draft.category,
                    date: draft.date,
                };
                self.dispatch(BudgetAction::UpdateExpense { expense });
            }
            None => self.dispatch(BudgetAction::AddExpense { draft }),
        }
        Ok(())
    }

    fn persist(&mut self) {
        let budget = self.state.budget.to_string();
        if let Err(err) = self.storage.set(BUDGET_KEY, &budget) {
            warn!(%err, "Failed to persist budget");
        }
        match serde_json::to_string(&self.state.expenses) {
            Ok(json) => {
                if let Err(err) = self.storage.set(EXPENSES_KEY, &json) {
                    warn!(%err, "Failed to persist expenses");
                }
            }
            Err(err) => warn!(%err, "Failed to serialize expenses"),
        }
    }
}
