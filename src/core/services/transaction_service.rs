use crate::ledger::{Category, DateRange, Transaction, TransactionType};

/// Criteria for listing transactions. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub kind: Option<TransactionType>,
    pub category: Option<String>,
    /// Case-insensitive substring of the description.
    pub search: Option<String>,
    pub range: DateRange,
}

impl TransactionFilter {
    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn search(mut self, needle: impl Into<String>) -> Self {
        self.search = Some(needle.into());
        self
    }

    pub fn range(mut self, range: DateRange) -> Self {
        self.range = range;
        self
    }

    pub fn matches(&self, txn: &Transaction) -> bool {
        if self.kind.is_some_and(|kind| txn.kind != kind) {
            return false;
        }
        if self
            .category
            .as_deref()
            .is_some_and(|category| txn.category != category)
        {
            return false;
        }
        if let Some(needle) = self.search.as_deref().map(str::trim) {
            if !needle.is_empty()
                && !txn
                    .description
                    .to_lowercase()
                    .contains(&needle.to_lowercase())
            {
                return false;
            }
        }
        self.range.contains(txn.date)
    }
}

pub struct TransactionService;

impl TransactionService {
    /// Matching transactions, newest first.
    pub fn list<'a>(transactions: &'a [Transaction], filter: &TransactionFilter) -> Vec<&'a Transaction> {
        let mut matched: Vec<&Transaction> = transactions
            .iter()
            .filter(|txn| filter.matches(txn))
            .collect();
        Self::sort_newest_first(&mut matched);
        matched
    }

    pub fn sort_newest_first(transactions: &mut [&Transaction]) {
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
    }

    /// Distinct category names across both types, sorted, for filter pickers.
    pub fn category_names(categories: &[Category]) -> Vec<String> {
        let mut names: Vec<String> = categories.iter().map(|c| c.name.clone()).collect();
        names.sort();
        names.dedup();
        names
    }

    pub fn categories_of_kind(categories: &[Category], kind: TransactionType) -> Vec<&Category> {
        categories.iter().filter(|c| c.kind == kind).collect()
    }
}
