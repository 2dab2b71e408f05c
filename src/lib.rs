pub mod decimal;
pub mod errors;
pub mod interest;
pub mod payments;
pub mod projections;
pub mod types;

// re-export key types
pub use decimal::{Money, Rate};
pub use errors::{ProjectionError, Result};
pub use interest::{
    accrue, accrue_phase, contributions_future_value, effective_annual_rate, future_value,
    CompoundingFrequency, PhaseAccrual,
};
pub use payments::{solve_installment, InstallmentSchedule, ScheduledPayment};
pub use projections::{
    growth_schedule, project_investment, project_loan, repayment_schedule, InvestmentProjection,
    InvestmentProjectionInput, InvestmentReport, LoanProjection, LoanProjectionInput, LoanReport,
    YearlyBalance,
};
pub use types::{GracePeriod, InvestmentTerm};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
