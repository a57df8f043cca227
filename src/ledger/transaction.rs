use std::fmt;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of money flow. Shared by transactions, categories, and limits.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn label(self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single income or expense entry.
///
/// `category` is a by-name reference to a [`Category`](super::Category) of the
/// same type. The reference is not enforced; aggregation treats unknown names
/// as their own bucket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Zero until the store assigns an id.
    #[serde(default)]
    pub id: u32,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub date: NaiveDateTime,
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

impl Transaction {
    pub fn new(
        kind: TransactionType,
        amount: Decimal,
        category: impl Into<String>,
        date: NaiveDateTime,
    ) -> Self {
        Self {
            id: 0,
            amount,
            description: String::new(),
            category: category.into(),
            date,
            kind,
        }
    }

    pub fn income(amount: Decimal, category: impl Into<String>, date: NaiveDateTime) -> Self {
        Self::new(TransactionType::Income, amount, category, date)
    }

    pub fn expense(amount: Decimal, category: impl Into<String>, date: NaiveDateTime) -> Self {
        Self::new(TransactionType::Expense, amount, category, date)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }
}
