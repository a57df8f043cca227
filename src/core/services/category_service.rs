use tracing::info;

use crate::core::store::Store;
use crate::ledger::{Category, Transaction, TransactionType};

use super::{ServiceError, ServiceResult};

pub struct CategoryService;

impl CategoryService {
    pub fn is_in_use(transactions: &[Transaction], name: &str, kind: TransactionType) -> bool {
        transactions
            .iter()
            .any(|txn| txn.category == name && txn.kind == kind)
    }

    /// Deletes the category only when no transaction references it.
    pub fn remove_unused(store: &mut Store, name: &str, kind: TransactionType) -> ServiceResult<()> {
        if Self::is_in_use(store.transactions(), name, kind) {
            return Err(ServiceError::Invalid(format!(
                "Category `{}` is used by transactions",
                name
            )));
        }
        if !store.delete_category(name, kind)? {
            return Err(ServiceError::Invalid(format!("Category `{}` not found", name)));
        }
        Ok(())
    }

    /// Replaces the category keyed by `(old_name, old_kind)` with `changes`.
    ///
    /// When the key changes, referencing transactions move to the new name and
    /// type. Budget limits keep their old category name.
    pub fn edit(
        store: &mut Store,
        old_name: &str,
        old_kind: TransactionType,
        changes: Category,
    ) -> ServiceResult<()> {
        if store.category(old_name, old_kind).is_none() {
            return Err(ServiceError::Invalid(format!(
                "Category `{}` not found",
                old_name
            )));
        }
        let key_changed = changes.name != old_name || changes.kind != old_kind;
        if key_changed && store.category(&changes.name, changes.kind).is_some() {
            return Err(ServiceError::Invalid(format!(
                "Category `{}` already exists",
                changes.name
            )));
        }

        if key_changed {
            let retargeted: Vec<Transaction> = store
                .transactions()
                .iter()
                .filter(|txn| txn.category == old_name && txn.kind == old_kind)
                .map(|txn| Transaction {
                    category: changes.name.clone(),
                    kind: changes.kind,
                    ..txn.clone()
                })
                .collect();
            let moved = retargeted.len();
            for txn in retargeted {
                store.update_transaction(txn)?;
            }
            if moved > 0 {
                info!(from = old_name, to = %changes.name, moved, "retargeted transactions");
            }
        }

        store.delete_category(old_name, old_kind)?;
        store.add_category(changes)?;
        Ok(())
    }
}
