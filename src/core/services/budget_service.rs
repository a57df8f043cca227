//! Evaluates configured budget limits against ledger activity.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::core::clock::Clock;
use crate::ledger::{BudgetLimit, DateRange, Transaction};

use super::SummaryService;

/// Usage of one limit within its resolved period window. Computed on demand,
/// never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct LimitStatus {
    pub limit: BudgetLimit,
    pub window: DateRange,
    pub used: Decimal,
}

impl LimitStatus {
    /// Limit minus usage; negative once the limit is exceeded.
    pub fn remaining(&self) -> Decimal {
        self.limit.limit - self.used
    }

    pub fn is_over_limit(&self) -> bool {
        self.used > self.limit.limit
    }
}

/// Stateless limit evaluation that operates over ledger snapshots.
pub struct BudgetService;

impl BudgetService {
    /// Sum of transactions matching the limit's category and type inside
    /// `window`.
    pub fn used_in_window(
        limit: &BudgetLimit,
        transactions: &[Transaction],
        window: &DateRange,
    ) -> Decimal {
        SummaryService::in_range(transactions, window)
            .filter(|txn| txn.kind == limit.kind && txn.category == limit.category_name)
            .map(|txn| txn.amount)
            .sum()
    }

    pub fn evaluate_limit(
        limit: &BudgetLimit,
        transactions: &[Transaction],
        now: NaiveDateTime,
    ) -> LimitStatus {
        let window = limit.period.window(now);
        LimitStatus {
            used: Self::used_in_window(limit, transactions, &window),
            limit: limit.clone(),
            window,
        }
    }

    /// Statuses for every limit, in configuration order.
    pub fn evaluate(
        limits: &[BudgetLimit],
        transactions: &[Transaction],
        now: NaiveDateTime,
    ) -> Vec<LimitStatus> {
        limits
            .iter()
            .map(|limit| Self::evaluate_limit(limit, transactions, now))
            .collect()
    }

    pub fn evaluate_with_clock(
        limits: &[BudgetLimit],
        transactions: &[Transaction],
        clock: &dyn Clock,
    ) -> Vec<LimitStatus> {
        Self::evaluate(limits, transactions, clock.now())
    }

    /// Only the limits whose usage exceeds the threshold.
    pub fn over_limit(
        limits: &[BudgetLimit],
        transactions: &[Transaction],
        now: NaiveDateTime,
    ) -> Vec<LimitStatus> {
        Self::evaluate(limits, transactions, now)
            .into_iter()
            .filter(LimitStatus::is_over_limit)
            .collect()
    }
}
