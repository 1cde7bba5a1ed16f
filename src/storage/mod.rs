pub mod json_backend;

use std::collections::HashMap;

use crate::errors::BudgetError;

pub type Result<T> = std::result::Result<T, BudgetError>;

/// Storage key for the budget amount, persisted as a decimal string.
pub const BUDGET_KEY: &str = "budget";
/// Storage key for the expense list, persisted as a JSON array.
pub const EXPENSES_KEY: &str = "expenses";

/// Abstraction over the key-value store that forms the durability boundary.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

pub use json_backend::JsonFileStore;
