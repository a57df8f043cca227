use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::transaction::TransactionType;

/// Symbolic period a limit is measured over.
///
/// Persisted as a plain string. Unrecognised strings survive a round trip in
/// [`BudgetPeriod::Other`] and are evaluated like [`BudgetPeriod::Month`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum BudgetPeriod {
    Week,
    #[default]
    Month,
    Year,
    Other(String),
}

impl BudgetPeriod {
    pub fn as_str(&self) -> &str {
        match self {
            BudgetPeriod::Week => "Week",
            BudgetPeriod::Month => "Month",
            BudgetPeriod::Year => "Year",
            BudgetPeriod::Other(raw) => raw,
        }
    }
}

impl From<String> for BudgetPeriod {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Week" => BudgetPeriod::Week,
            "Month" => BudgetPeriod::Month,
            "Year" => BudgetPeriod::Year,
            _ => BudgetPeriod::Other(raw),
        }
    }
}

impl From<&str> for BudgetPeriod {
    fn from(raw: &str) -> Self {
        BudgetPeriod::from(raw.to_string())
    }
}

impl From<BudgetPeriod> for String {
    fn from(period: BudgetPeriod) -> Self {
        match period {
            BudgetPeriod::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A spending (or earning) threshold for one category over a rolling period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetLimit {
    pub category_name: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub limit: Decimal,
    #[serde(default)]
    pub period: BudgetPeriod,
}

impl BudgetLimit {
    pub fn new(
        category_name: impl Into<String>,
        kind: TransactionType,
        period: BudgetPeriod,
        limit: Decimal,
    ) -> Self {
        Self {
            category_name: category_name.into(),
            kind,
            limit,
            period,
        }
    }

    /// True when `self` shares the `(category_name, kind, period)` key.
    pub fn same_key(&self, category_name: &str, kind: TransactionType, period: &BudgetPeriod) -> bool {
        self.category_name == category_name && self.kind == kind && &self.period == period
    }
}
