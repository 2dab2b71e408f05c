use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};

/// interest accumulated over a deferment phase, capitalized at the boundary
///
/// during a deferment phase no payments are made: simple interest builds on
/// the opening principal and becomes part of the base for the next phase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseAccrual {
    pub phase_months: Decimal,
    pub opening_principal: Money,
    pub interest_accrued: Money,
    pub closing_principal: Money,
}

/// accrue simple interest over a phase and return the new principal
///
/// P + P * r * months/12; a zero-month phase returns the principal unchanged
pub fn accrue(principal: Money, annual_rate: Rate, phase_months: Decimal) -> Money {
    accrue_phase(principal, annual_rate, phase_months).closing_principal
}

/// accrue simple interest over a phase with the full breakdown
pub fn accrue_phase(principal: Money, annual_rate: Rate, phase_months: Decimal) -> PhaseAccrual {
    let interest =
        principal.as_decimal() * annual_rate.as_decimal() * phase_months / Decimal::from(12);
    let interest_accrued = Money::from_decimal(interest);

    PhaseAccrual {
        phase_months,
        opening_principal: principal,
        interest_accrued,
        closing_principal: principal + interest_accrued,
    }
}
