//! The budget state machine: one state value, one pure reducer.

use uuid::Uuid;

use crate::expense::{DraftExpense, Expense};

/// The whole tracker state. Replaced wholesale on every dispatch so readers
/// always see a consistent snapshot. Only the budget and the expense list are
/// persisted; the remaining fields are session-local UI state.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetState {
    pub budget: f64,
    pub modal: bool,
    pub expenses: Vec<Expense>,
    pub editing_id: Option<Uuid>,
    pub current_category: Option<String>,
}

impl BudgetState {
    pub fn new(budget: f64, expenses: Vec<Expense>) -> Self {
        Self {
            budget,
            modal: false,
            expenses,
            editing_id: None,
            current_category: None,
        }
    }

    /// The expense currently loaded into the edit form, if any.
    pub fn editing_expense(&self) -> Option<&Expense> {
        let id = self.editing_id?;
        self.expenses.iter().find(|expense| expense.id == id)
    }
}

impl Default for BudgetState {
    fn default() -> Self {
        Self::new(0.0, Vec::new())
    }
}

/// Every transition the tracker supports.
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetAction {
    AddBudget { amount: f64 },
    ShowModal,
    HideModal,
    AddExpense { draft: DraftExpense },
    DeleteExpense { id: Uuid },
    GetExpenseById { id: Uuid },
    UpdateExpense { expense: Expense },
    ResetApp,
    FilterCategory { id: Option<String> },
}

/// Applies one action to the state and returns the next state.
///
/// Total by construction: every arm yields a fully-formed state and none can
/// fail. Deleting or updating an id that is not present leaves the expense
/// list untouched.
pub fn reduce(state: BudgetState, action: BudgetAction) -> BudgetState {
    let mut next = state;
    match action {
        BudgetAction::AddBudget { amount } => {
            next.budget = amount;
        }
        BudgetAction::ShowModal => {
            next.modal = true;
        }
        BudgetAction::HideModal => {
            next.modal = false;
            next.editing_id = None;
        }
        BudgetAction::AddExpense { draft } => {
            next.expenses.push(Expense::create(draft));
            next.modal = false;
        }
        BudgetAction::DeleteExpense { id } => {
            next.expenses.retain(|expense| expense.id != id);
        }
        BudgetAction::GetExpenseById { id } => {
            next.editing_id = Some(id);
            next.modal = true;
        }
        BudgetAction::UpdateExpense { expense } => {
            if let Some(slot) = next.expenses.iter_mut().find(|e| e.id == expense.id) {
                *slot = expense;
            }
            next.modal = false;
            next.editing_id = None;
        }
        BudgetAction::ResetApp => {
            next = BudgetState::default();
        }
        BudgetAction::FilterCategory { id } => {
            next.current_category = id;
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    fn draft(name: &str, amount: f64, category: &str) -> DraftExpense {
        DraftExpense::new(name, amount, category, sample_date())
    }

    fn state_with(expenses: Vec<Expense>) -> BudgetState {
        BudgetState::new(1000.0, expenses)
    }

    #[test]
    fn add_budget_sets_amount() {
        let next = reduce(BudgetState::default(), BudgetAction::AddBudget { amount: 750.0 });
        assert_eq!(next.budget, 750.0);
        assert!(next.expenses.is_empty());
    }

    #[test]
    fn add_expense_appends_and_closes_modal() {
        let mut state = state_with(vec![Expense::create(draft("Rent", 400.0, "home"))]);
        state.modal = true;
        let prior_ids: Vec<_> = state.expenses.iter().map(|e| e.id).collect();

        let next = reduce(
            state,
            BudgetAction::AddExpense {
                draft: draft("Groceries", 80.0, "food"),
            },
        );

        assert_eq!(next.expenses.len(), 2);
        assert!(!next.modal);
        for id in prior_ids {
            assert!(next.expenses.iter().any(|e| e.id == id));
        }
        let added = next.expenses.last().unwrap();
        assert_eq!(added.name, "Groceries");
        assert_eq!(added.amount, 80.0);
        assert_eq!(added.category, "food");
        assert_eq!(added.date, sample_date());
    }

    #[test]
    fn delete_expense_removes_only_matching_id() {
        let keep = Expense::create(draft("Bus", 2.5, "transport"));
        let remove = Expense::create(draft("Cinema", 12.0, "leisure"));
        let state = state_with(vec![keep.clone(), remove.clone()]);

        let next = reduce(state, BudgetAction::DeleteExpense { id: remove.id });
        assert_eq!(next.expenses, vec![keep]);
    }

    #[test]
    fn delete_unknown_id_is_a_no_op() {
        let expenses = vec![
            Expense::create(draft("Bus", 2.5, "transport")),
            Expense::create(draft("Cinema", 12.0, "leisure")),
        ];
        let state = state_with(expenses.clone());

        let next = reduce(state, BudgetAction::DeleteExpense { id: Uuid::new_v4() });
        assert_eq!(next.expenses, expenses);
    }

    #[test]
    fn get_expense_by_id_opens_edit_form() {
        let expense = Expense::create(draft("Gym", 30.0, "health"));
        let state = state_with(vec![expense.clone()]);

        let next = reduce(state, BudgetAction::GetExpenseById { id: expense.id });
        assert!(next.modal);
        assert_eq!(next.editing_id, Some(expense.id));
        assert_eq!(next.editing_expense(), Some(&expense));
    }

    #[test]
    fn update_replaces_record_in_place() {
        let first = Expense::create(draft("Lunch", 50.0, "food"));
        let second = Expense::create(draft("Train", 70.0, "transport"));
        let mut state = state_with(vec![first.clone(), second.clone()]);
        state.editing_id = Some(first.id);
        state.modal = true;

        let mut edited = first.clone();
        edited.amount = 90.0;
        let next = reduce(state, BudgetAction::UpdateExpense { expense: edited.clone() });

        assert_eq!(next.expenses, vec![edited, second]);
        assert_eq!(next.editing_id, None);
        assert!(!next.modal);
    }

    #[test]
    fn update_unknown_id_leaves_expenses_unchanged() {
        let expenses = vec![Expense::create(draft("Lunch", 50.0, "food"))];
        let state = state_with(expenses.clone());

        let mut stranger = Expense::create(draft("Ghost", 5.0, "misc"));
        stranger.id = Uuid::new_v4();
        let next = reduce(state, BudgetAction::UpdateExpense { expense: stranger });
        assert_eq!(next.expenses, expenses);
    }

    #[test]
    fn hide_modal_is_idempotent() {
        let mut state = state_with(Vec::new());
        state.modal = true;
        state.editing_id = Some(Uuid::new_v4());

        let once = reduce(state, BudgetAction::HideModal);
        let twice = reduce(once.clone(), BudgetAction::HideModal);
        assert_eq!(once, twice);
        assert!(!twice.modal);
        assert_eq!(twice.editing_id, None);
    }

    #[test]
    fn reset_app_clears_everything() {
        let mut state = state_with(vec![Expense::create(draft("Rent", 400.0, "home"))]);
        state.modal = true;
        state.current_category = Some("home".into());

        let next = reduce(state, BudgetAction::ResetApp);
        assert_eq!(next, BudgetState::default());
        assert_eq!(next.budget, 0.0);
        assert!(next.expenses.is_empty());
    }

    #[test]
    fn filter_category_sets_and_clears() {
        let state = state_with(Vec::new());
        let filtered = reduce(
            state,
            BudgetAction::FilterCategory {
                id: Some("food".into()),
            },
        );
        assert_eq!(filtered.current_category.as_deref(), Some("food"));

        let cleared = reduce(filtered, BudgetAction::FilterCategory { id: None });
        assert_eq!(cleared.current_category, None);
    }
}
