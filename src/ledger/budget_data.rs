use serde::{Deserialize, Deserializer, Serialize};

use super::{budget::BudgetLimit, category::Category, transaction::Transaction, user::User};

/// Aggregate root persisted as a single document.
///
/// Every collection tolerates being absent or `null` in the stored document and
/// comes back as an empty vector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BudgetData {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub transactions: Vec<Transaction>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub categories: Vec<Category>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub budget_limits: Vec<BudgetLimit>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub users: Vec<User>,
}

/// What [`BudgetData::repair`] had to re-seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RepairReport {
    pub seeded_users: bool,
    pub seeded_categories: bool,
}

impl RepairReport {
    pub fn changed(&self) -> bool {
        self.seeded_users || self.seeded_categories
    }
}

impl BudgetData {
    /// Fresh dataset with the built-in categories and default accounts.
    pub fn seeded() -> Self {
        let mut data = Self::default();
        data.repair();
        data
    }

    /// Re-seeds the default users and categories when either collection is empty.
    pub fn repair(&mut self) -> RepairReport {
        let mut report = RepairReport::default();
        if self.users.is_empty() {
            self.users = User::defaults();
            report.seeded_users = true;
        }
        if self.categories.is_empty() {
            self.categories = Category::defaults();
            report.seeded_categories = true;
        }
        report
    }

    /// Highest transaction id plus one, or 1 for an empty ledger. `None` once
    /// the id space is exhausted.
    pub fn next_transaction_id(&self) -> Option<u32> {
        next_id(self.transactions.iter().map(|txn| txn.id))
    }

    pub fn next_user_id(&self) -> Option<u32> {
        next_id(self.users.iter().map(|user| user.id))
    }
}

fn next_id(ids: impl Iterator<Item = u32>) -> Option<u32> {
    match ids.max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
