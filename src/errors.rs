use thiserror::Error;

/// Error type covering validation and persistence failures.
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error("All fields are required and the amount must be greater than zero")]
    RequiredFields,
    #[error("Expense of {amount} exceeds the available budget of {available}")]
    ExceedsBudget { amount: f64, available: f64 },
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, BudgetError>;

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        BudgetError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        BudgetError::Storage(err.to_string())
    }
}
