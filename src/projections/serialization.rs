/// serialization support for projection reports
///
/// the report views are the presentation boundary: every amount is rounded
/// to currency minor units (2 places) and every rate is restated as a
/// percentage here, and only here
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::interest::CompoundingFrequency;
use crate::projections::investment::{InvestmentProjection, InvestmentProjectionInput};
use crate::projections::loan::{LoanProjection, LoanProjectionInput};

/// flat loan report for rendering layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanReport {
    pub principal: Money,
    pub annual_rate_percent: Decimal,
    pub study_period_months: Decimal,
    pub grace_period_months: u32,
    pub repayment_months: u32,
    pub monthly_installment: Money,
    pub total_payable: Money,
    pub total_interest: Money,
    pub principal_restated: Money,
    pub study_phase_interest: Money,
    pub grace_phase_interest: Money,
    pub interest_share_percent: Decimal,
    pub total_elapsed_months: Decimal,
}

impl LoanReport {
    pub fn new(input: &LoanProjectionInput, projection: &LoanProjection) -> Self {
        Self {
            principal: input.principal.round_dp(2),
            annual_rate_percent: input.annual_rate.as_percentage().round_dp(2),
            study_period_months: input.study_period_months,
            grace_period_months: input.grace_period.months(),
            repayment_months: input.repayment_months,
            monthly_installment: projection.monthly_installment.round_dp(2),
            total_payable: projection.total_payable.round_dp(2),
            total_interest: projection.total_interest.round_dp(2),
            principal_restated: projection.principal_restated.round_dp(2),
            study_phase_interest: projection.study_phase.interest_accrued.round_dp(2),
            grace_phase_interest: projection.grace_phase.interest_accrued.round_dp(2),
            interest_share_percent: projection.interest_share.as_percentage().round_dp(2),
            total_elapsed_months: projection.total_elapsed_months,
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// flat investment report for rendering layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentReport {
    pub initial_amount: Money,
    pub monthly_contribution: Money,
    pub annual_rate_percent: Decimal,
    pub duration_months: u32,
    pub compounding: CompoundingFrequency,
    pub final_value: Money,
    pub total_contributed: Money,
    pub total_return: Money,
    pub absolute_return_percent: Decimal,
    pub annualized_return_percent: Decimal,
    pub roi_percent: Decimal,
    pub effective_annual_rate_percent: Decimal,
    pub real_value: Option<Money>,
}

impl InvestmentReport {
    pub fn new(input: &InvestmentProjectionInput, projection: &InvestmentProjection) -> Self {
        Self {
            initial_amount: input.initial_amount.round_dp(2),
            monthly_contribution: input.monthly_contribution.round_dp(2),
            annual_rate_percent: input.annual_rate.as_percentage().round_dp(2),
            duration_months: input.term.total_months(),
            compounding: input.compounding,
            final_value: projection.final_value.round_dp(2),
            total_contributed: projection.total_contributed.round_dp(2),
            total_return: projection.total_return.round_dp(2),
            absolute_return_percent: projection.absolute_return.as_percentage().round_dp(2),
            annualized_return_percent: projection.annualized_return.as_percentage().round_dp(2),
            roi_percent: projection.roi.as_percentage().round_dp(2),
            effective_annual_rate_percent: projection
                .effective_annual_rate
                .as_percentage()
                .round_dp(2),
            real_value: projection.real_value.map(|v| v.round_dp(2)),
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Rate;
    use crate::projections::investment::project_investment;
    use crate::projections::loan::project_loan;
    use crate::types::{GracePeriod, InvestmentTerm};
    use rust_decimal_macros::dec;

    #[test]
    fn test_loan_report_rounds_to_minor_units() {
        let input = LoanProjectionInput::new(
            Money::from_major(100_000),
            Rate::from_percentage(8),
            dec!(48),
            GracePeriod::SixMonths,
            120,
        );
        let projection = project_loan(&input).unwrap();
        let report = LoanReport::new(&input, &projection);

        assert_eq!(report.monthly_installment, projection.monthly_installment.round_dp(2));
        assert_eq!(report.total_payable, projection.total_payable.round_dp(2));
        assert_eq!(report.grace_period_months, 6);
        assert_eq!(report.annual_rate_percent, dec!(8.00));
    }

    #[test]
    fn test_loan_report_json_round_trip() {
        let input = LoanProjectionInput::new(
            Money::from_major(50_000),
            Rate::from_percentage(10),
            dec!(36),
            GracePeriod::ThreeMonths,
            60,
        );
        let projection = project_loan(&input).unwrap();
        let report = LoanReport::new(&input, &projection);

        let json = report.to_json_pretty().unwrap();
        let parsed: LoanReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_investment_report_json_round_trip() {
        let input = InvestmentProjectionInput::new(
            Money::from_major(10_000),
            Money::from_major(500),
            Rate::from_percentage(8),
            InvestmentTerm::Years(10),
            CompoundingFrequency::Monthly,
        )
        .with_inflation(Rate::from_percentage(3));
        let projection = project_investment(&input).unwrap();
        let report = InvestmentReport::new(&input, &projection);

        assert_eq!(report.duration_months, 120);
        assert!(report.real_value.is_some());
        assert_eq!(report.roi_percent, report.absolute_return_percent);

        let json = report.to_json_pretty().unwrap();
        let parsed: InvestmentReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
