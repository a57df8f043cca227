use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Mutex,
};

use crate::{errors::LedgerError, ledger::BudgetData};

use super::{Result, StorageBackend};

/// In-process backend. Useful for embedding and for tests that count writes.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    document: Mutex<Option<BudgetData>>,
    saves: AtomicUsize,
    fail_saves: AtomicBool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(data: BudgetData) -> Self {
        Self {
            document: Mutex::new(Some(data)),
            ..Self::default()
        }
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Makes every following save fail with a persistence error.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    pub fn document(&self) -> Option<BudgetData> {
        self.document.lock().ok().and_then(|guard| guard.clone())
    }
}

impl StorageBackend for MemoryStorage {
    fn load(&self) -> Result<Option<BudgetData>> {
        let guard = self
            .document
            .lock()
            .map_err(|_| LedgerError::Persistence("memory storage poisoned".into()))?;
        Ok(guard.clone())
    }

    fn save(&self, data: &BudgetData) -> Result<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(LedgerError::Persistence("memory storage rejects writes".into()));
        }
        let mut guard = self
            .document
            .lock()
            .map_err(|_| LedgerError::Persistence("memory storage poisoned".into()))?;
        *guard = Some(data.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".into()
    }
}
