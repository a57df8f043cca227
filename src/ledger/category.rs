use serde::{Deserialize, Serialize};

use super::transaction::TransactionType;

pub const DEFAULT_CATEGORY_COLOR: &str = "#FF6B6B";

/// Classifies ledger activity for reporting and limits.
///
/// Categories are keyed by `(name, kind)`; the same name may exist once per type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(default = "default_color")]
    pub color: String,
}

impl Category {
    pub fn new(name: impl Into<String>, kind: TransactionType) -> Self {
        Self {
            name: name.into(),
            kind,
            color: default_color(),
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn matches(&self, name: &str, kind: TransactionType) -> bool {
        self.name == name && self.kind == kind
    }

    /// Built-in categories installed on a fresh or repaired dataset.
    pub fn defaults() -> Vec<Category> {
        use TransactionType::{Expense, Income};
        [
            ("Salary", Income, "#4ECDC4"),
            ("Gifts", Income, "#95E1D3"),
            ("Other", Income, "#F38181"),
            ("Groceries", Expense, "#FF6B6B"),
            ("Transport", Expense, "#4ECDC4"),
            ("Entertainment", Expense, "#95E1D3"),
            ("Health", Expense, "#F38181"),
            ("Clothing", Expense, "#AA96DA"),
            ("Utilities", Expense, "#FCBAD3"),
            ("Other", Expense, "#C7CEEA"),
        ]
        .into_iter()
        .map(|(name, kind, color)| Category::new(name, kind).with_color(color))
        .collect()
    }
}

fn default_color() -> String {
    DEFAULT_CATEGORY_COLOR.to_string()
}
