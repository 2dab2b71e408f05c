use rust_decimal::Decimal;
use thiserror::Error;

use crate::decimal::{Money, Rate};

#[derive(Error, Debug)]
pub enum ProjectionError {
    #[error("principal must be positive: {amount}")]
    NonPositivePrincipal {
        amount: Money,
    },

    #[error("initial amount cannot be negative: {amount}")]
    NegativeInitialAmount {
        amount: Money,
    },

    #[error("contribution cannot be negative: {amount}")]
    NegativeContribution {
        amount: Money,
    },

    #[error("annual rate out of range: {rate}")]
    RateOutOfRange {
        rate: Rate,
    },

    #[error("inflation rate cannot be negative: {rate}")]
    NegativeInflationRate {
        rate: Rate,
    },

    #[error("study period cannot be negative: {months} months")]
    NegativeStudyPeriod {
        months: Decimal,
    },

    #[error("repayment term must be at least one month")]
    EmptyRepaymentTerm,

    #[error("investment duration must be at least one month")]
    EmptyDuration,

    #[error("nothing invested: initial amount and contribution are both zero")]
    NothingInvested,

    #[error("numeric fault: {message}")]
    NumericFault {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
