pub mod auth_service;
pub mod budget_service;
pub mod category_service;
pub mod summary_service;
pub mod transaction_service;

pub use auth_service::AuthService;
pub use budget_service::{BudgetService, LimitStatus};
pub use category_service::CategoryService;
pub use summary_service::{CategoryBreakdown, CategoryLegendEntry, CategoryTotal, PeriodSummary, SummaryService};
pub use transaction_service::{TransactionFilter, TransactionService};

use crate::errors::LedgerError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("{0}")]
    Invalid(String),
    #[error("Access denied: {0}")]
    Forbidden(String),
}

#[cfg(test)]
mod tests;
