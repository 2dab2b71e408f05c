pub mod accrual;
pub mod annuity;
pub mod compound;

use rust_decimal::Decimal;

use crate::decimal::Rate;

pub use accrual::{accrue, accrue_phase, PhaseAccrual};
pub use annuity::contributions_future_value;
pub use compound::{future_value, CompoundingFrequency};

/// (1 + rate)^periods by repeated multiplication; exact for integer exponents
pub(crate) fn compound_factor(period_rate: Decimal, periods: u32) -> Decimal {
    let base = Decimal::ONE + period_rate;
    let mut factor = Decimal::ONE;
    for _ in 0..periods {
        factor *= base;
    }
    factor
}

/// effective annual rate for a nominal rate compounded n times per year
///
/// (1 + r/n)^n - 1
pub fn effective_annual_rate(nominal: Rate, frequency: CompoundingFrequency) -> Rate {
    let n = frequency.periods_per_year();
    let factor = compound_factor(nominal.periodic_rate(n).as_decimal(), n);
    Rate::from_decimal(factor - Decimal::ONE)
}
