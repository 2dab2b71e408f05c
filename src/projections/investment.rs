use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{ProjectionError, Result};
use crate::interest::{
    contributions_future_value, effective_annual_rate, future_value, CompoundingFrequency,
};
use crate::types::InvestmentTerm;

/// inputs for an investment-growth projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentProjectionInput {
    pub initial_amount: Money,
    /// zero means no recurring contributions
    pub monthly_contribution: Money,
    pub annual_rate: Rate,
    pub term: InvestmentTerm,
    pub compounding: CompoundingFrequency,
    /// when set, a real (inflation-discounted) value is reported alongside
    /// the nominal figures
    pub inflation_rate: Option<Rate>,
}

impl InvestmentProjectionInput {
    pub fn new(
        initial_amount: Money,
        monthly_contribution: Money,
        annual_rate: Rate,
        term: InvestmentTerm,
        compounding: CompoundingFrequency,
    ) -> Self {
        Self {
            initial_amount,
            monthly_contribution,
            annual_rate,
            term,
            compounding,
            inflation_rate: None,
        }
    }

    pub fn with_inflation(mut self, inflation_rate: Rate) -> Self {
        self.inflation_rate = Some(inflation_rate);
        self
    }

    /// check every input invariant; upstream widget bounds are not trusted
    pub fn validate(&self) -> Result<()> {
        if self.initial_amount.is_negative() {
            return Err(ProjectionError::NegativeInitialAmount {
                amount: self.initial_amount,
            });
        }

        if self.monthly_contribution.is_negative() {
            return Err(ProjectionError::NegativeContribution {
                amount: self.monthly_contribution,
            });
        }

        if self.annual_rate.is_negative() {
            return Err(ProjectionError::RateOutOfRange {
                rate: self.annual_rate,
            });
        }

        if let Some(inflation) = self.inflation_rate {
            if inflation.is_negative() {
                return Err(ProjectionError::NegativeInflationRate { rate: inflation });
            }
        }

        if self.term.total_months() == 0 {
            return Err(ProjectionError::EmptyDuration);
        }

        // every derived percentage divides by the contributed total
        if self.initial_amount.is_zero() && self.monthly_contribution.is_zero() {
            return Err(ProjectionError::NothingInvested);
        }

        Ok(())
    }
}

/// computed investment projection, discarded on reset or the next calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentProjection {
    pub final_value: Money,
    pub lump_sum_value: Money,
    pub contribution_value: Money,
    pub total_contributed: Money,
    pub total_return: Money,
    pub absolute_return: Rate,
    /// geometric yearly growth rate implied by the total return
    pub annualized_return: Rate,
    pub roi: Rate,
    /// nominal rate restated at the chosen compounding frequency
    pub effective_annual_rate: Rate,
    /// inflation-discounted final value; the nominal figures above are
    /// never substituted by it
    pub real_value: Option<Money>,
}

/// project an investment: compound the lump sum, compound the contribution
/// stream, sum the legs, derive the summary figures
pub fn project_investment(input: &InvestmentProjectionInput) -> Result<InvestmentProjection> {
    input.validate()?;

    let years = input.term.years();
    let lump_sum_value =
        future_value(input.initial_amount, input.annual_rate, years, input.compounding);
    let contribution_value =
        contributions_future_value(input.monthly_contribution, input.annual_rate, years);
    let final_value = lump_sum_value + contribution_value;

    let months = Decimal::from(input.term.total_months());
    let total_contributed = input.initial_amount
        + Money::from_decimal(input.monthly_contribution.as_decimal() * months);
    let total_return = final_value - total_contributed;

    let absolute_return =
        Rate::from_decimal(total_return.as_decimal() / total_contributed.as_decimal());
    let growth_ratio = final_value.as_decimal() / total_contributed.as_decimal();
    let annualized_return =
        Rate::from_decimal(growth_ratio.powd(Decimal::ONE / years) - Decimal::ONE);

    let real_value = input.inflation_rate.map(|inflation| {
        let discount = (Decimal::ONE + inflation.as_decimal()).powd(years);
        Money::from_decimal(final_value.as_decimal() / discount)
    });

    Ok(InvestmentProjection {
        final_value,
        lump_sum_value,
        contribution_value,
        total_contributed,
        total_return,
        absolute_return,
        annualized_return,
        roi: absolute_return, // same figure, reported under both labels
        effective_annual_rate: effective_annual_rate(input.annual_rate, input.compounding),
        real_value,
    })
}

/// value and contributed-to-date at each elapsed year, ending at the term
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyBalance {
    pub year: u32,
    pub months_elapsed: u32,
    pub contributed_to_date: Money,
    pub value: Money,
}

/// year-end growth breakdown; the last entry lands on the exact term end
pub fn growth_schedule(input: &InvestmentProjectionInput) -> Result<Vec<YearlyBalance>> {
    input.validate()?;

    let total_months = input.term.total_months();
    let mut balances = Vec::new();
    let mut year = 1;

    loop {
        let months_elapsed = (year * 12).min(total_months);
        let years_elapsed = Decimal::from(months_elapsed) / Decimal::from(12);

        let value = future_value(
            input.initial_amount,
            input.annual_rate,
            years_elapsed,
            input.compounding,
        ) + contributions_future_value(
            input.monthly_contribution,
            input.annual_rate,
            years_elapsed,
        );
        let contributed_to_date = input.initial_amount
            + Money::from_decimal(
                input.monthly_contribution.as_decimal() * Decimal::from(months_elapsed),
            );

        balances.push(YearlyBalance {
            year,
            months_elapsed,
            contributed_to_date,
            value,
        });

        if months_elapsed >= total_months {
            break;
        }
        year += 1;
    }

    Ok(balances)
}
