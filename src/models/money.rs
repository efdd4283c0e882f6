use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use crate::errors::ReportError;

/// Fractional digits carried by every currency amount.
pub const CURRENCY_SCALE: u32 = 2;

/// Convert stored minor units into a currency amount with exactly two fractional digits.
pub fn amount_from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, CURRENCY_SCALE)
}

/// Convert a currency amount into minor units for storage.
///
/// Rejects negative amounts and amounts with sub-cent precision rather than rounding them.
pub fn amount_to_cents(amount: Decimal) -> Result<i64, ReportError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ReportError::Validation(format!("Amount must not be negative: {}", amount)));
    }
    if amount.round_dp(CURRENCY_SCALE) != amount {
        return Err(ReportError::Validation(format!(
            "Amount has more than {} fractional digits: {}",
            CURRENCY_SCALE, amount
        )));
    }
    (amount * Decimal::from(100))
        .to_i64()
        .ok_or_else(|| ReportError::Validation(format!("Amount out of range: {}", amount)))
}
