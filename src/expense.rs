use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An expense as entered in the form, before an id has been assigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DraftExpense {
    pub name: String,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
}

impl DraftExpense {
    pub fn new(name: impl Into<String>, amount: f64, category: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            amount,
            category: category.into(),
            date,
        }
    }
}

/// A persisted expense. The id is assigned once at creation and never changes;
/// every other field may be replaced through an update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
}

impl Expense {
    /// Promotes a draft to a persisted expense with a fresh v4 id.
    pub fn create(draft: DraftExpense) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            amount: draft.amount,
            category: draft.category,
            date: draft.date,
        }
    }

    /// The draft view of this expense, used to reload the edit form.
    pub fn as_draft(&self) -> DraftExpense {
        DraftExpense {
            name: self.name.clone(),
            amount: self.amount,
            category: self.category.clone(),
            date: self.date,
        }
    }
}
