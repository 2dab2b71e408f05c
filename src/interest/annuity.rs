use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::decimal::{Money, Rate};
use crate::interest::compound_factor;

/// future value of an ordinary annuity of fixed monthly contributions
///
/// c * ((1 + i)^n - 1) / i at monthly rate i over n = years * 12 periods.
/// contributions always compound monthly; the lump-sum leg keeps its own
/// frequency and the two legs are summed by the investment projector
pub fn contributions_future_value(
    contribution: Money,
    annual_rate: Rate,
    years: Decimal,
) -> Money {
    let monthly_rate = annual_rate.monthly_rate().as_decimal();
    let periods = (years * dec!(12)).round().to_u32().unwrap_or(0);

    // the closed form divides by the rate; at zero rate the annuity is a plain sum
    if monthly_rate.is_zero() {
        return Money::from_decimal(contribution.as_decimal() * Decimal::from(periods));
    }

    let factor = compound_factor(monthly_rate, periods);
    Money::from_decimal(contribution.as_decimal() * (factor - Decimal::ONE) / monthly_rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rate_is_plain_sum() {
        // 500/month at 0% for 3 years = 500 * 36
        let fv = contributions_future_value(Money::from_major(500), Rate::ZERO, dec!(3));
        assert_eq!(fv, Money::from_major(18_000));
    }

    #[test]
    fn test_zero_contribution() {
        let fv = contributions_future_value(Money::ZERO, Rate::from_percentage(8), dec!(10));
        assert_eq!(fv, Money::ZERO);
    }

    #[test]
    fn test_one_year_of_contributions() {
        // 1000/month at 12% for one year: 1000 * ((1.01)^12 - 1) / 0.01 ~ 12682.50
        let fv = contributions_future_value(
            Money::from_major(1_000),
            Rate::from_percentage(12),
            Decimal::ONE,
        );
        assert!((fv - Money::from_str_exact("12682.50").unwrap()).abs() < Money::from_str_exact("0.05").unwrap());
    }

    #[test]
    fn test_exceeds_plain_sum_at_positive_rate() {
        let contribution = Money::from_major(2_000);
        let fv = contributions_future_value(contribution, Rate::from_percentage(8), dec!(10));
        let plain_sum = Money::from_decimal(contribution.as_decimal() * dec!(120));
        assert!(fv > plain_sum);
    }

    #[test]
    fn test_monotonic_in_rate() {
        let contribution = Money::from_major(1_500);
        let at_six = contributions_future_value(contribution, Rate::from_percentage(6), dec!(5));
        let at_nine = contributions_future_value(contribution, Rate::from_percentage(9), dec!(5));
        assert!(at_nine > at_six);
    }

    #[test]
    fn test_months_denominated_horizon() {
        // 2.5 years rounds to exactly 30 monthly periods
        let fv = contributions_future_value(Money::from_major(100), Rate::ZERO, dec!(2.5));
        assert_eq!(fv, Money::from_major(3_000));
    }
}
