use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::errors::LedgerError;

/// Parses a user supplied amount using `.` as the decimal separator.
///
/// Rejects empty input, non-numeric text, and negative values.
pub fn parse_amount(raw: &str) -> Result<Decimal, LedgerError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::InvalidInput("amount is required".into()));
    }
    let value = Decimal::from_str(trimmed)
        .map_err(|_| LedgerError::InvalidInput(format!("`{trimmed}` is not a valid amount")))?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(LedgerError::InvalidInput(format!(
            "amount must not be negative, got {trimmed}"
        )));
    }
    Ok(value)
}

/// Two decimal places, half away from zero, `.` separator, no grouping.
pub fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}
