use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{ProjectionError, Result};
use crate::interest::compound_factor;

/// scheduled payment in a repayment schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledPayment {
    pub payment_number: u32,
    pub payment_date: NaiveDate,
    pub beginning_balance: Money,
    pub payment_amount: Money,
    pub principal_portion: Money,
    pub interest_portion: Money,
    pub ending_balance: Money,
    pub cumulative_interest: Money,
    pub cumulative_principal: Money,
}

/// month-by-month repayment schedule at a fixed installment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallmentSchedule {
    pub principal: Money,
    pub annual_rate: Rate,
    pub term_months: u32,
    pub first_payment_date: NaiveDate,
    pub payments: Vec<ScheduledPayment>,
    pub total_interest: Money,
    pub total_payment: Money,
}

impl InstallmentSchedule {
    /// generate the schedule for a fixed monthly installment
    pub fn generate(
        principal: Money,
        annual_rate: Rate,
        term_months: u32,
        first_payment_date: NaiveDate,
    ) -> Result<Self> {
        if !principal.is_positive() {
            return Err(ProjectionError::NonPositivePrincipal { amount: principal });
        }
        if term_months == 0 {
            return Err(ProjectionError::EmptyRepaymentTerm);
        }

        let monthly_rate = annual_rate.monthly_rate().as_decimal();
        let installment = solve_installment(principal, annual_rate, term_months);

        let mut payments = Vec::with_capacity(term_months as usize);
        let mut balance = principal;
        let mut cumulative_interest = Money::ZERO;
        let mut cumulative_principal = Money::ZERO;

        for i in 1..=term_months {
            let payment_date = add_months(first_payment_date, i - 1);
            let interest_portion = Money::from_decimal(balance.as_decimal() * monthly_rate);
            let principal_portion = installment - interest_portion;

            cumulative_interest += interest_portion;
            cumulative_principal += principal_portion;

            let ending_balance = (balance - principal_portion).max(Money::ZERO);

            payments.push(ScheduledPayment {
                payment_number: i,
                payment_date,
                beginning_balance: balance,
                payment_amount: installment,
                principal_portion,
                interest_portion,
                ending_balance,
                cumulative_interest,
                cumulative_principal,
            });

            balance = ending_balance;
        }

        // fold the residual rounding balance into the last payment
        if let Some(last) = payments.last_mut() {
            if last.ending_balance > Money::ZERO && last.ending_balance < Money::from_major(1) {
                last.principal_portion += last.ending_balance;
                last.payment_amount += last.ending_balance;
                last.cumulative_principal += last.ending_balance;
                last.ending_balance = Money::ZERO;
            }
        }

        let total_interest = payments
            .iter()
            .map(|p| p.interest_portion)
            .fold(Money::ZERO, |acc, x| acc + x);

        let total_payment = payments
            .iter()
            .map(|p| p.payment_amount)
            .fold(Money::ZERO, |acc, x| acc + x);

        Ok(Self {
            principal,
            annual_rate,
            term_months,
            first_payment_date,
            payments,
            total_interest,
            total_payment,
        })
    }

    /// get payment for a specific period (1-based)
    pub fn payment(&self, payment_number: u32) -> Option<&ScheduledPayment> {
        self.payments.get((payment_number as usize).checked_sub(1)?)
    }

    /// get remaining balance after a payment
    pub fn balance_after(&self, payment_number: u32) -> Money {
        self.payment(payment_number)
            .map(|p| p.ending_balance)
            .unwrap_or(self.principal)
    }
}

/// solve the annuity-amortization equation for a fixed monthly installment
///
/// EMI = P * r * (1 + r)^n / ((1 + r)^n - 1) at monthly rate r over n months.
/// the closed form is undefined at r = 0, where the installment is P / n
pub fn solve_installment(principal: Money, annual_rate: Rate, term_months: u32) -> Money {
    if term_months == 0 {
        // a zero-month term degenerates to immediate repayment in full
        return principal;
    }

    let monthly_rate = annual_rate.monthly_rate().as_decimal();

    if monthly_rate.is_zero() {
        return principal / Decimal::from(term_months);
    }

    let compound = compound_factor(monthly_rate, term_months);
    let numerator = principal.as_decimal() * monthly_rate * compound;
    let denominator = compound - Decimal::ONE;

    Money::from_decimal(numerator / denominator)
}

/// add whole months to a date, clamping the day to the target month's length
fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    let zero_based = date.month0() + months;
    let year = date.year() + (zero_based / 12) as i32;
    let month = zero_based % 12 + 1;
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
