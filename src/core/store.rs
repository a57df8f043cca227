use tracing::{debug, info, warn};

use crate::config::ConfigManager;
use crate::errors::LedgerError;
use crate::ledger::{
    BudgetData, BudgetLimit, BudgetPeriod, Category, RepairReport, Transaction, TransactionType,
    User,
};
use crate::storage::{JsonStorage, StorageBackend};

/// Outcome of [`Store::ensure_loaded`]. Never an error: failures fall back to
/// the in-memory defaults and are only reported here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// A previous call already ran the load.
    AlreadyLoaded,
    /// The stored document was adopted; `repairs` lists what was re-seeded.
    Loaded { repairs: RepairReport },
    /// Nothing stored yet; defaults kept.
    Missing,
    /// The document could not be read or parsed; defaults kept.
    Failed { reason: String },
}

impl LoadStatus {
    pub fn is_fallback(&self) -> bool {
        matches!(self, LoadStatus::Missing | LoadStatus::Failed { .. })
    }
}

/// Owns the in-memory [`BudgetData`] and writes it through a storage backend
/// after every mutation.
///
/// Mutations return `Err` only when the follow-up write fails. The in-memory
/// change is kept in that case and goes out with the next successful write.
pub struct Store {
    data: BudgetData,
    loaded: bool,
    storage: Box<dyn StorageBackend>,
}

impl Store {
    /// Creates a store holding the default categories and accounts. Nothing is
    /// read until [`Store::ensure_loaded`].
    pub fn new(storage: Box<dyn StorageBackend>) -> Self {
        Self {
            data: BudgetData::seeded(),
            loaded: false,
            storage,
        }
    }

    pub fn with_storage<S: StorageBackend + 'static>(storage: S) -> Self {
        Self::new(Box::new(storage))
    }

    /// Store backed by the JSON document in the per-user application directory.
    pub fn open_default() -> Result<Self, LedgerError> {
        let manager = ConfigManager::new();
        let config = manager.load()?;
        let storage = JsonStorage::from_config(&config, manager.base_dir());
        Ok(Self::with_storage(storage))
    }

    pub fn storage(&self) -> &dyn StorageBackend {
        self.storage.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Loads the stored document once. Later calls are no-ops.
    pub fn ensure_loaded(&mut self) -> LoadStatus {
        if self.loaded {
            return LoadStatus::AlreadyLoaded;
        }
        self.loaded = true;

        match self.storage.load() {
            Ok(Some(data)) => {
                self.data = data;
                let repairs = self.repair();
                info!(
                    location = %self.storage.describe(),
                    transactions = self.data.transactions.len(),
                    categories = self.data.categories.len(),
                    "budget data loaded"
                );
                LoadStatus::Loaded { repairs }
            }
            Ok(None) => {
                info!(location = %self.storage.describe(), "no stored budget data, using defaults");
                LoadStatus::Missing
            }
            Err(err) => {
                warn!(
                    location = %self.storage.describe(),
                    error = %err,
                    "failed to load budget data, using defaults"
                );
                LoadStatus::Failed {
                    reason: err.to_string(),
                }
            }
        }
    }

    /// Re-seeds empty user or category collections and writes the result.
    ///
    /// Write failures here are logged, not returned.
    pub fn repair(&mut self) -> RepairReport {
        let report = self.data.repair();
        if report.seeded_users {
            info!("user list empty, restored default accounts");
        }
        if report.seeded_categories {
            info!("category list empty, restored default categories");
        }
        if report.changed() {
            self.persist_quietly();
        }
        report
    }

    pub fn data(&self) -> &BudgetData {
        &self.data
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.data.transactions
    }

    pub fn categories(&self) -> &[Category] {
        &self.data.categories
    }

    pub fn budget_limits(&self) -> &[BudgetLimit] {
        &self.data.budget_limits
    }

    pub fn users(&self) -> &[User] {
        &self.data.users
    }

    pub fn transaction(&self, id: u32) -> Option<&Transaction> {
        self.data.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn category(&self, name: &str, kind: TransactionType) -> Option<&Category> {
        self.data
            .categories
            .iter()
            .find(|category| category.matches(name, kind))
    }

    /// Appends `transaction`, assigning the next id when its id is zero.
    /// Returns the id it was stored under, or `InvalidInput` without any change
    /// when no id is left above the current maximum.
    pub fn add_transaction(&mut self, mut transaction: Transaction) -> Result<u32, LedgerError> {
        if transaction.id == 0 {
            transaction.id = self
                .data
                .next_transaction_id()
                .ok_or_else(|| LedgerError::InvalidInput("transaction ids exhausted".into()))?;
        }
        let id = transaction.id;
        self.data.transactions.push(transaction);
        self.persist()?;
        Ok(id)
    }

    /// Replaces the transaction with the same id. `false` when none matched.
    pub fn update_transaction(&mut self, transaction: Transaction) -> Result<bool, LedgerError> {
        let Some(slot) = self
            .data
            .transactions
            .iter_mut()
            .find(|txn| txn.id == transaction.id)
        else {
            return Ok(false);
        };
        *slot = transaction;
        self.persist()?;
        Ok(true)
    }

    pub fn delete_transaction(&mut self, id: u32) -> Result<bool, LedgerError> {
        let Some(index) = self.data.transactions.iter().position(|txn| txn.id == id) else {
            return Ok(false);
        };
        self.data.transactions.remove(index);
        self.persist()?;
        Ok(true)
    }

    /// Adds `category` unless one with the same name and type exists.
    pub fn add_category(&mut self, category: Category) -> Result<bool, LedgerError> {
        if self.category(&category.name, category.kind).is_some() {
            return Ok(false);
        }
        self.data.categories.push(category);
        self.persist()?;
        Ok(true)
    }

    /// Removes the category keyed by `(name, kind)`.
    ///
    /// Transactions that still reference it are left alone; see
    /// [`CategoryService::remove_unused`](crate::core::services::CategoryService::remove_unused)
    /// for the checked variant.
    pub fn delete_category(
        &mut self,
        name: &str,
        kind: TransactionType,
    ) -> Result<bool, LedgerError> {
        let Some(index) = self
            .data
            .categories
            .iter()
            .position(|category| category.matches(name, kind))
        else {
            return Ok(false);
        };
        self.data.categories.remove(index);
        self.persist()?;
        Ok(true)
    }

    /// Inserts `limit`, or overwrites the amount of the entry with the same
    /// `(category_name, kind, period)` key.
    pub fn add_budget_limit(&mut self, limit: BudgetLimit) -> Result<(), LedgerError> {
        match self
            .data
            .budget_limits
            .iter_mut()
            .find(|existing| existing.same_key(&limit.category_name, limit.kind, &limit.period))
        {
            Some(existing) => existing.limit = limit.limit,
            None => self.data.budget_limits.push(limit),
        }
        self.persist()
    }

    pub fn delete_budget_limit(
        &mut self,
        category_name: &str,
        kind: TransactionType,
        period: &BudgetPeriod,
    ) -> Result<bool, LedgerError> {
        let Some(index) = self
            .data
            .budget_limits
            .iter()
            .position(|limit| limit.same_key(category_name, kind, period))
        else {
            return Ok(false);
        };
        self.data.budget_limits.remove(index);
        self.persist()?;
        Ok(true)
    }

    /// Registers `user` under the next free id. `false` when the username is
    /// already taken, compared case-insensitively. `InvalidInput` when the id
    /// space is exhausted.
    pub fn add_user(&mut self, mut user: User) -> Result<bool, LedgerError> {
        if self
            .data
            .users
            .iter()
            .any(|existing| existing.has_username(&user.username))
        {
            return Ok(false);
        }
        user.id = self
            .data
            .next_user_id()
            .ok_or_else(|| LedgerError::InvalidInput("user ids exhausted".into()))?;
        self.data.users.push(user);
        self.persist()?;
        Ok(true)
    }

    /// First user whose username matches case-insensitively and whose
    /// password matches exactly.
    pub fn authenticate(&self, username: &str, password: &str) -> Option<&User> {
        self.data
            .users
            .iter()
            .find(|user| user.has_username(username) && user.password == password)
    }

    /// Writes the current state.
    pub fn flush(&self) -> Result<(), LedgerError> {
        self.persist()
    }

    /// Flushes and releases the store.
    pub fn close(self) -> Result<(), LedgerError> {
        self.flush()
    }

    fn persist(&self) -> Result<(), LedgerError> {
        self.storage.save(&self.data)?;
        debug!(location = %self.storage.describe(), "budget data saved");
        Ok(())
    }

    fn persist_quietly(&self) {
        if let Err(err) = self.persist() {
            warn!(error = %err, "failed to save repaired budget data");
        }
    }
}
