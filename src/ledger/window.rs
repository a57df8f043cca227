use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

use super::budget::BudgetPeriod;

/// Inclusive date-time range. A missing bound is unbounded on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl DateRange {
    /// Range that matches every date.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Self {
        Self { start, end }
    }

    pub fn between(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self::new(Some(start), Some(end))
    }

    pub fn since(start: NaiveDateTime) -> Self {
        Self::new(Some(start), None)
    }

    pub fn until(end: NaiveDateTime) -> Self {
        Self::new(None, Some(end))
    }

    /// Whole calendar days: `start` at midnight through the last instant of `end`.
    pub fn days(start: NaiveDate, end: NaiveDate) -> Self {
        let start = start.and_hms_opt(0, 0, 0);
        let end = end.and_hms_nano_opt(23, 59, 59, 999_999_999);
        Self::new(start, end)
    }

    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.start.map_or(true, |start| at >= start) && self.end.map_or(true, |end| at <= end)
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

impl BudgetPeriod {
    /// First instant of the window this period covers at `now`.
    ///
    /// `Week` steps back to the most recent Sunday keeping the time of day of
    /// `now`; `Month` and `Year` start at midnight. Unrecognised periods use
    /// the `Month` rule.
    pub fn window_start(&self, now: NaiveDateTime) -> NaiveDateTime {
        match self {
            BudgetPeriod::Week => {
                let since_sunday = now.weekday().num_days_from_sunday() as i64;
                now - Duration::days(since_sunday)
            }
            BudgetPeriod::Year => start_of_day(now.date().with_ordinal(1), now),
            BudgetPeriod::Month | BudgetPeriod::Other(_) => {
                start_of_day(now.date().with_day(1), now)
            }
        }
    }

    /// Concrete `[window_start, now]` range for this period.
    pub fn window(&self, now: NaiveDateTime) -> DateRange {
        DateRange::between(self.window_start(now), now)
    }
}

fn start_of_day(date: Option<NaiveDate>, fallback: NaiveDateTime) -> NaiveDateTime {
    date.and_then(|day| day.and_hms_opt(0, 0, 0))
        .unwrap_or(fallback)
}
