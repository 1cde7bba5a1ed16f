//! Spendbook is the core of a personal expense tracker: a budget, a list of
//! expenses keyed by category, and the derived totals a UI shell renders.
//!
//! The crate owns a single [`state::BudgetState`] value, transitions it through
//! a pure reducer, and persists the budget and expense list to a key-value
//! store after every mutating dispatch. Rendering, gestures, and form widgets
//! live in the embedding shell and are out of scope here.

pub mod catalog;
pub mod errors;
pub mod expense;
pub mod state;
pub mod storage;
pub mod store;
pub mod summary;
pub mod utils;
pub mod validate;

pub use catalog::{categories, find_category, Category};
pub use errors::{BudgetError, Result};
pub use expense::{DraftExpense, Expense};
pub use state::{BudgetAction, BudgetState};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};
pub use store::BudgetStore;
pub use summary::BudgetSummary;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Spendbook tracing initialized.");
    });
}
