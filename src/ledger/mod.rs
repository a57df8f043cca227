//! Ledger domain models and persistence-friendly types.

pub mod budget;
pub mod budget_data;
pub mod category;
pub mod transaction;
pub mod user;
pub mod window;

pub use budget::{BudgetLimit, BudgetPeriod};
pub use budget_data::{BudgetData, RepairReport};
pub use category::{Category, DEFAULT_CATEGORY_COLOR};
pub use transaction::{Transaction, TransactionType};
pub use user::{Permission, User, UserRole};
pub use window::DateRange;
