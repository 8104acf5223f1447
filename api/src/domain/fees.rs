//! Platform fee computation for simulated USDT payments.
//!
//! Money is fixed-point: amounts carry at most [`MONEY_SCALE`] fractional
//! digits and the fee is rounded to the same scale, midpoint away from zero.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use thiserror::Error;

/// Flat platform fee rate (3%)
pub const PLATFORM_FEE_RATE: Decimal = Decimal::from_parts(3, 0, 0, false, 2);

/// Fractional digits supported for USDT amounts
pub const MONEY_SCALE: u32 = 6;

/// Exclusive upper bound for amounts, 10^14, the integer range of a
/// `decimal(20, 6)` column
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(276_447_232, 23_283, 0, false, 0);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeeError {
    #[error("amount must not be negative")]
    NegativeAmount,
    #[error("amount supports at most 6 decimal places")]
    TooPrecise,
    #[error("amount must be less than 100000000000000")]
    TooLarge,
    #[error("amount is out of range")]
    Overflow,
}

/// Amount, fee and total for a single payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeeBreakdown {
    pub amount: Decimal,
    pub fee_rate: Decimal,
    pub fee: Decimal,
    pub total: Decimal,
}

/// Computes `fee = amount * 3%` and `total = amount + fee`
pub fn compute_fee(amount: Decimal) -> Result<FeeBreakdown, FeeError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(FeeError::NegativeAmount);
    }
    if amount.normalize().scale() > MONEY_SCALE {
        return Err(FeeError::TooPrecise);
    }
    if amount >= MAX_AMOUNT {
        return Err(FeeError::TooLarge);
    }

    let fee = amount
        .checked_mul(PLATFORM_FEE_RATE)
        .ok_or(FeeError::Overflow)?
        .round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    let total = amount.checked_add(fee).ok_or(FeeError::Overflow)?;

    Ok(FeeBreakdown {
        amount,
        fee_rate: PLATFORM_FEE_RATE,
        fee,
        total,
    })
}

/// Converts `value` with `rate`, rounded to money scale. `None` on overflow.
pub fn convert(value: Decimal, rate: Decimal) -> Option<Decimal> {
    value
        .checked_mul(rate)
        .map(|v| v.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_fee_rate_is_three_percent() {
        assert_eq!(PLATFORM_FEE_RATE, dec("0.03"));
    }

    #[test]
    fn test_fee_is_exact_for_cent_amounts() {
        for raw in ["0", "1", "100", "2500.50", "1234.5678", "0.01", "999999.99"] {
            let amount = dec(raw);
            let breakdown = compute_fee(amount).unwrap();
            assert_eq!(breakdown.fee, amount * dec("0.03"), "fee for {raw}");
            assert_eq!(breakdown.total, amount + breakdown.fee, "total for {raw}");
        }
    }

    #[test]
    fn test_fee_examples() {
        let breakdown = compute_fee(dec("100")).unwrap();
        assert_eq!(breakdown.fee, dec("3"));
        assert_eq!(breakdown.total, dec("103"));

        let breakdown = compute_fee(dec("1234.5678")).unwrap();
        assert_eq!(breakdown.fee, dec("37.037034"));
        assert_eq!(breakdown.total, dec("1271.604834"));
    }

    #[test]
    fn test_fee_rounds_to_money_scale() {
        // 0.000050 * 0.03 = 0.0000015 -> rounds up to 0.000002
        let breakdown = compute_fee(dec("0.00005")).unwrap();
        assert_eq!(breakdown.fee, dec("0.000002"));
        assert_eq!(breakdown.total, dec("0.000052"));
    }

    #[test]
    fn test_negative_amount_rejected() {
        assert_eq!(compute_fee(dec("-1")), Err(FeeError::NegativeAmount));
    }

    #[test]
    fn test_too_precise_amount_rejected() {
        assert_eq!(compute_fee(dec("1.0000001")), Err(FeeError::TooPrecise));
        // Trailing zeros do not count against the scale
        assert!(compute_fee(dec("1.50000000")).is_ok());
    }

    #[test]
    fn test_max_amount_is_ten_to_the_fourteenth() {
        assert_eq!(MAX_AMOUNT, dec("100000000000000"));
    }

    #[test]
    fn test_amount_at_or_above_bound_rejected() {
        assert_eq!(compute_fee(MAX_AMOUNT), Err(FeeError::TooLarge));
        assert_eq!(compute_fee(Decimal::MAX), Err(FeeError::TooLarge));

        let largest = compute_fee(dec("99999999999999.999999")).unwrap();
        assert_eq!(largest.fee, dec("3000000000000.000000"));
        assert_eq!(largest.total, dec("102999999999999.999999"));
    }

    #[test]
    fn test_convert() {
        assert_eq!(convert(dec("103"), dec("1350.5")), Some(dec("139101.5")));
    }

    #[test]
    fn test_convert_overflow_is_none() {
        assert_eq!(convert(Decimal::MAX, dec("2")), None);
        assert_eq!(convert(dec("102999999999999.999999"), Decimal::MAX), None);
    }
}
