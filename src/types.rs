use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// grace period between the end of the study phase and the first repayment
///
/// only these durations are offered; anything else is unrepresentable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GracePeriod {
    #[default]
    None,
    ThreeMonths,
    SixMonths,
    NineMonths,
    TwelveMonths,
}

impl GracePeriod {
    /// duration in months
    pub fn months(&self) -> u32 {
        match self {
            GracePeriod::None => 0,
            GracePeriod::ThreeMonths => 3,
            GracePeriod::SixMonths => 6,
            GracePeriod::NineMonths => 9,
            GracePeriod::TwelveMonths => 12,
        }
    }

    /// parse a month count into the supported set
    pub fn from_months(months: u32) -> Option<Self> {
        match months {
            0 => Some(GracePeriod::None),
            3 => Some(GracePeriod::ThreeMonths),
            6 => Some(GracePeriod::SixMonths),
            9 => Some(GracePeriod::NineMonths),
            12 => Some(GracePeriod::TwelveMonths),
            _ => None,
        }
    }
}

/// investment horizon, entered in years or months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvestmentTerm {
    Years(u32),
    Months(u32),
}

impl InvestmentTerm {
    /// total duration in months
    pub fn total_months(&self) -> u32 {
        match self {
            InvestmentTerm::Years(y) => y * 12,
            InvestmentTerm::Months(m) => *m,
        }
    }

    /// duration in years, fractional for month-denominated terms
    pub fn years(&self) -> Decimal {
        Decimal::from(self.total_months()) / Decimal::from(12)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_grace_period_months() {
        assert_eq!(GracePeriod::None.months(), 0);
        assert_eq!(GracePeriod::SixMonths.months(), 6);
        assert_eq!(GracePeriod::TwelveMonths.months(), 12);
    }

    #[test]
    fn test_grace_period_from_months() {
        assert_eq!(GracePeriod::from_months(0), Some(GracePeriod::None));
        assert_eq!(GracePeriod::from_months(9), Some(GracePeriod::NineMonths));
        assert_eq!(GracePeriod::from_months(4), None);
        assert_eq!(GracePeriod::from_months(24), None);
    }

    #[test]
    fn test_investment_term_conversion() {
        assert_eq!(InvestmentTerm::Years(10).total_months(), 120);
        assert_eq!(InvestmentTerm::Months(30).total_months(), 30);
        assert_eq!(InvestmentTerm::Years(10).years(), dec!(10));
        assert_eq!(InvestmentTerm::Months(30).years(), dec!(2.5));
    }
}
