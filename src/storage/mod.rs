pub mod json_backend;
pub mod memory;

use crate::{errors::LedgerError, ledger::BudgetData};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over persistence backends holding the single budget document.
pub trait StorageBackend: Send + Sync {
    /// Reads the stored document. `Ok(None)` means nothing has been stored yet.
    fn load(&self) -> Result<Option<BudgetData>>;

    /// Replaces the stored document with `data`.
    fn save(&self, data: &BudgetData) -> Result<()>;

    /// Human readable location used in log output.
    fn describe(&self) -> String;
}

impl<T: StorageBackend + ?Sized> StorageBackend for std::sync::Arc<T> {
    fn load(&self) -> Result<Option<BudgetData>> {
        (**self).load()
    }

    fn save(&self, data: &BudgetData) -> Result<()> {
        (**self).save(data)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

pub use json_backend::JsonStorage;
pub use memory::MemoryStorage;
