use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::interest::compound_factor;

/// compounding frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CompoundingFrequency {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Annual,
}

impl CompoundingFrequency {
    /// get number of compounding periods per year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Daily => 365,
            CompoundingFrequency::Weekly => 52,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Annual => 1,
        }
    }

    /// parse a periods-per-year count into the supported set
    pub fn from_periods_per_year(n: u32) -> Option<Self> {
        match n {
            365 => Some(CompoundingFrequency::Daily),
            52 => Some(CompoundingFrequency::Weekly),
            12 => Some(CompoundingFrequency::Monthly),
            4 => Some(CompoundingFrequency::Quarterly),
            1 => Some(CompoundingFrequency::Annual),
            _ => None,
        }
    }
}

/// future value of a lump sum under periodic compounding
///
/// P * (1 + r/n)^(n*t), with n*t rounded to the nearest whole period
pub fn future_value(
    principal: Money,
    annual_rate: Rate,
    years: Decimal,
    frequency: CompoundingFrequency,
) -> Money {
    let n = frequency.periods_per_year();
    let periods = (Decimal::from(n) * years).round().to_u32().unwrap_or(0);
    let period_rate = annual_rate.periodic_rate(n).as_decimal();

    let factor = compound_factor(period_rate, periods);
    Money::from_decimal(principal.as_decimal() * factor)
}
