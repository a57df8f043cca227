//! Aggregation over transaction snapshots: totals, balance, and per-category
//! breakdowns within an optional date range.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::ledger::{Category, DateRange, Transaction, TransactionType, DEFAULT_CATEGORY_COLOR};

const INCOME_FALLBACK_COLOR: &str = "#4ECDC4";

/// Summed amount for one category name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Decimal,
}

impl CategoryTotal {
    /// Percentage of `total` this entry represents. A non-positive total is
    /// treated as 1 so empty periods do not divide by zero.
    pub fn share_of(&self, total: Decimal) -> Decimal {
        let base = if total > Decimal::ZERO {
            total
        } else {
            Decimal::ONE
        };
        self.amount / base * Decimal::ONE_HUNDRED
    }
}

/// Per-category sums for one transaction type, largest first.
///
/// Categories without matching transactions are absent. Ties keep the order in
/// which the categories were first seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBreakdown {
    pub kind: TransactionType,
    entries: Vec<CategoryTotal>,
}

impl CategoryBreakdown {
    pub fn entries(&self) -> &[CategoryTotal] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.entries.iter()
    }

    pub fn get(&self, category: &str) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.amount)
    }

    pub fn total(&self) -> Decimal {
        self.entries.iter().map(|entry| entry.amount).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Breakdown entry decorated for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLegendEntry {
    pub category: String,
    pub amount: Decimal,
    pub share: Decimal,
    pub color: String,
    /// False when no category with this name and type exists any more.
    pub known: bool,
}

/// Everything a period report shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodSummary {
    pub range: DateRange,
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
    pub expense_by_category: CategoryBreakdown,
    pub income_by_category: CategoryBreakdown,
}

/// Stateless aggregation utilities that operate over transaction snapshots.
pub struct SummaryService;

impl SummaryService {
    pub fn in_range<'a>(
        transactions: &'a [Transaction],
        range: &'a DateRange,
    ) -> impl Iterator<Item = &'a Transaction> + 'a {
        transactions.iter().filter(move |txn| range.contains(txn.date))
    }

    pub fn total_of(transactions: &[Transaction], range: &DateRange, kind: TransactionType) -> Decimal {
        Self::in_range(transactions, range)
            .filter(|txn| txn.kind == kind)
            .map(|txn| txn.amount)
            .sum()
    }

    pub fn total_income(transactions: &[Transaction], range: &DateRange) -> Decimal {
        Self::total_of(transactions, range, TransactionType::Income)
    }

    pub fn total_expenses(transactions: &[Transaction], range: &DateRange) -> Decimal {
        Self::total_of(transactions, range, TransactionType::Expense)
    }

    pub fn balance(transactions: &[Transaction], range: &DateRange) -> Decimal {
        Self::total_income(transactions, range) - Self::total_expenses(transactions, range)
    }

    pub fn by_category(
        transactions: &[Transaction],
        range: &DateRange,
        kind: TransactionType,
    ) -> CategoryBreakdown {
        let mut entries: Vec<CategoryTotal> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for txn in Self::in_range(transactions, range).filter(|txn| txn.kind == kind) {
            match index.get(txn.category.as_str()) {
                Some(&slot) => entries[slot].amount += txn.amount,
                None => {
                    index.insert(txn.category.as_str(), entries.len());
                    entries.push(CategoryTotal {
                        category: txn.category.clone(),
                        amount: txn.amount,
                    });
                }
            }
        }

        entries.sort_by(|a, b| b.amount.cmp(&a.amount));
        CategoryBreakdown { kind, entries }
    }

    pub fn summarize(transactions: &[Transaction], range: DateRange) -> PeriodSummary {
        let income = Self::total_income(transactions, &range);
        let expenses = Self::total_expenses(transactions, &range);
        PeriodSummary {
            range,
            income,
            expenses,
            balance: income - expenses,
            expense_by_category: Self::by_category(transactions, &range, TransactionType::Expense),
            income_by_category: Self::by_category(transactions, &range, TransactionType::Income),
        }
    }

    /// Attaches colours and shares to a breakdown. Orphaned category names get
    /// the type's fallback colour and `known == false`.
    pub fn legend(breakdown: &CategoryBreakdown, categories: &[Category]) -> Vec<CategoryLegendEntry> {
        let total = breakdown.total();
        let fallback = match breakdown.kind {
            TransactionType::Expense => DEFAULT_CATEGORY_COLOR,
            TransactionType::Income => INCOME_FALLBACK_COLOR,
        };
        breakdown
            .iter()
            .map(|entry| {
                let category = categories
                    .iter()
                    .find(|category| category.matches(&entry.category, breakdown.kind));
                CategoryLegendEntry {
                    category: entry.category.clone(),
                    amount: entry.amount,
                    share: entry.share_of(total),
                    color: category
                        .map(|category| category.color.clone())
                        .unwrap_or_else(|| fallback.to_string()),
                    known: category.is_some(),
                }
            })
            .collect()
    }
}
