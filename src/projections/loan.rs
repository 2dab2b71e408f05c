use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{ProjectionError, Result};
use crate::interest::{accrue_phase, PhaseAccrual};
use crate::payments::{solve_installment, InstallmentSchedule};
use crate::types::GracePeriod;

/// inputs for an education-loan projection
///
/// the loan defers through a study phase and an optional grace phase, both
/// accruing simple interest, before amortizing over the repayment term
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanProjectionInput {
    pub principal: Money,
    pub annual_rate: Rate,
    pub study_period_months: Decimal,
    pub grace_period: GracePeriod,
    pub repayment_months: u32,
}

impl LoanProjectionInput {
    pub fn new(
        principal: Money,
        annual_rate: Rate,
        study_period_months: Decimal,
        grace_period: GracePeriod,
        repayment_months: u32,
    ) -> Self {
        Self {
            principal,
            annual_rate,
            study_period_months,
            grace_period,
            repayment_months,
        }
    }

    /// check every input invariant; upstream widget bounds are not trusted
    pub fn validate(&self) -> Result<()> {
        if !self.principal.is_positive() {
            return Err(ProjectionError::NonPositivePrincipal {
                amount: self.principal,
            });
        }

        if self.annual_rate.is_negative() || self.annual_rate > Rate::ONE {
            return Err(ProjectionError::RateOutOfRange {
                rate: self.annual_rate,
            });
        }

        if self.study_period_months.is_sign_negative() && !self.study_period_months.is_zero() {
            return Err(ProjectionError::NegativeStudyPeriod {
                months: self.study_period_months,
            });
        }

        if self.repayment_months == 0 {
            return Err(ProjectionError::EmptyRepaymentTerm);
        }

        Ok(())
    }
}

/// computed loan projection, discarded on reset or the next calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanProjection {
    pub monthly_installment: Money,
    pub total_payable: Money,
    /// measured against the amount originally borrowed, so deferment-phase
    /// accrual counts toward the figure
    pub total_interest: Money,
    /// principal after study and grace accrual, the amount actually amortized
    pub principal_restated: Money,
    /// share of the total payable that is interest
    pub interest_share: Rate,
    pub total_elapsed_months: Decimal,
    pub study_phase: PhaseAccrual,
    pub grace_phase: PhaseAccrual,
}

/// project a deferred loan: accrue both phases, solve the installment,
/// derive the summary figures
pub fn project_loan(input: &LoanProjectionInput) -> Result<LoanProjection> {
    input.validate()?;

    let study_phase = accrue_phase(input.principal, input.annual_rate, input.study_period_months);
    let grace_phase = accrue_phase(
        study_phase.closing_principal,
        input.annual_rate,
        Decimal::from(input.grace_period.months()),
    );
    let principal_restated = grace_phase.closing_principal;

    let monthly_installment =
        solve_installment(principal_restated, input.annual_rate, input.repayment_months);
    let total_payable = monthly_installment * Decimal::from(input.repayment_months);

    // the installment total must cover the restated principal; a shortfall
    // past rounding noise means the solver broke down
    if principal_restated - total_payable > Money::from_minor(1, 2) {
        return Err(ProjectionError::NumericFault {
            message: format!(
                "total payable {} fails to cover restated principal {}",
                total_payable, principal_restated
            ),
        });
    }

    let total_interest = total_payable - input.principal;
    let interest_share =
        Rate::from_decimal(total_interest.as_decimal() / total_payable.as_decimal());
    let total_elapsed_months = input.study_period_months
        + Decimal::from(input.grace_period.months())
        + Decimal::from(input.repayment_months);

    Ok(LoanProjection {
        monthly_installment,
        total_payable,
        total_interest,
        principal_restated,
        interest_share,
        total_elapsed_months,
        study_phase,
        grace_phase,
    })
}

/// month-by-month repayment schedule over the restated principal
pub fn repayment_schedule(
    input: &LoanProjectionInput,
    first_payment_date: NaiveDate,
) -> Result<InstallmentSchedule> {
    input.validate()?;

    let after_study = accrue_phase(input.principal, input.annual_rate, input.study_period_months);
    let after_grace = accrue_phase(
        after_study.closing_principal,
        input.annual_rate,
        Decimal::from(input.grace_period.months()),
    );

    InstallmentSchedule::generate(
        after_grace.closing_principal,
        input.annual_rate,
        input.repayment_months,
        first_payment_date,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn scenario_a() -> LoanProjectionInput {
        // 100000 at 8%, 4 years of study, 6 months grace, 10 years repayment
        LoanProjectionInput::new(
            Money::from_major(100_000),
            Rate::from_percentage(8),
            dec!(48),
            GracePeriod::SixMonths,
            120,
        )
    }

    #[test]
    fn test_scenario_phase_restatement() {
        let projection = project_loan(&scenario_a()).unwrap();

        assert_eq!(projection.study_phase.closing_principal, Money::from_major(132_000));
        assert_eq!(projection.grace_phase.closing_principal, Money::from_major(137_280));
        assert_eq!(projection.principal_restated, Money::from_major(137_280));
        assert_eq!(projection.total_elapsed_months, dec!(174));
    }

    #[test]
    fn test_scenario_installment() {
        let projection = project_loan(&scenario_a()).unwrap();

        // 137280 amortized at 8%/12 over 120 months: ~1665.59/month
        assert!(projection.monthly_installment > Money::from_str_exact("1665.50").unwrap());
        assert!(projection.monthly_installment < Money::from_str_exact("1665.70").unwrap());

        assert_eq!(
            projection.total_payable,
            projection.monthly_installment * dec!(120)
        );
        assert_eq!(
            projection.total_interest,
            projection.total_payable - Money::from_major(100_000)
        );
        // roughly half of every repaid unit is interest here
        assert!(projection.interest_share.as_percentage() > dec!(49));
        assert!(projection.interest_share.as_percentage() < dec!(51));
    }

    #[test]
    fn test_total_payable_covers_restated_principal() {
        let projection = project_loan(&scenario_a()).unwrap();
        assert!(projection.total_payable >= projection.principal_restated);
    }

    #[test]
    fn test_zero_rate_loan() {
        let input = LoanProjectionInput::new(
            Money::from_major(100_000),
            Rate::ZERO,
            dec!(48),
            GracePeriod::SixMonths,
            120,
        );
        let projection = project_loan(&input).unwrap();

        // no accrual, and the installment is a straight division
        assert_eq!(projection.principal_restated, Money::from_major(100_000));
        assert_eq!(
            projection.monthly_installment.round_dp(2),
            Money::from_str_exact("833.33").unwrap()
        );
        assert_eq!(projection.total_interest.round_dp(2), Money::ZERO);
        assert_eq!(projection.interest_share.as_percentage().round_dp(2), Decimal::ZERO);
    }

    #[test]
    fn test_no_deferment_phases() {
        let input = LoanProjectionInput::new(
            Money::from_major(20_000),
            Rate::from_percentage(10),
            Decimal::ZERO,
            GracePeriod::None,
            60,
        );
        let projection = project_loan(&input).unwrap();

        assert_eq!(projection.principal_restated, Money::from_major(20_000));
        assert_eq!(projection.study_phase.interest_accrued, Money::ZERO);
        assert_eq!(projection.grace_phase.interest_accrued, Money::ZERO);
    }

    #[test]
    fn test_single_month_repayment() {
        let input = LoanProjectionInput::new(
            Money::from_major(10_000),
            Rate::from_percentage(12),
            Decimal::ZERO,
            GracePeriod::None,
            1,
        );
        let projection = project_loan(&input).unwrap();

        // one period collapses the annuity formula to P * (1 + r)
        assert_eq!(projection.monthly_installment, Money::from_str_exact("10100").unwrap());
        assert_eq!(projection.total_payable, Money::from_str_exact("10100").unwrap());
    }

    #[test]
    fn test_validation_failures() {
        let valid = scenario_a();

        let mut input = valid;
        input.principal = Money::ZERO;
        assert!(matches!(
            project_loan(&input),
            Err(ProjectionError::NonPositivePrincipal { .. })
        ));

        let mut input = valid;
        input.annual_rate = Rate::from_decimal(dec!(-0.01));
        assert!(matches!(
            project_loan(&input),
            Err(ProjectionError::RateOutOfRange { .. })
        ));

        let mut input = valid;
        input.annual_rate = Rate::from_decimal(dec!(1.5));
        assert!(matches!(
            project_loan(&input),
            Err(ProjectionError::RateOutOfRange { .. })
        ));

        let mut input = valid;
        input.study_period_months = dec!(-1);
        assert!(matches!(
            project_loan(&input),
            Err(ProjectionError::NegativeStudyPeriod { .. })
        ));

        let mut input = valid;
        input.repayment_months = 0;
        assert!(matches!(
            project_loan(&input),
            Err(ProjectionError::EmptyRepaymentTerm)
        ));
    }

    #[test]
    fn test_idempotence() {
        let input = scenario_a();
        let first = project_loan(&input).unwrap();
        let second = project_loan(&input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_total_interest_monotonic_in_rate() {
        let mut input = scenario_a();
        input.annual_rate = Rate::from_percentage(6);
        let at_six = project_loan(&input).unwrap();
        input.annual_rate = Rate::from_percentage(8);
        let at_eight = project_loan(&input).unwrap();
        input.annual_rate = Rate::from_percentage(10);
        let at_ten = project_loan(&input).unwrap();

        assert!(at_six.total_interest < at_eight.total_interest);
        assert!(at_eight.total_interest < at_ten.total_interest);
    }

    #[test]
    fn test_repayment_schedule_matches_projection() {
        let input = scenario_a();
        let projection = project_loan(&input).unwrap();
        let schedule = repayment_schedule(
            &input,
            chrono::NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        )
        .unwrap();

        assert_eq!(schedule.principal, projection.principal_restated);
        assert_eq!(schedule.payments.len(), 120);
        assert_eq!(
            schedule.payments[0].payment_amount,
            projection.monthly_installment
        );
    }
}
