pub mod investment;
pub mod loan;
pub mod serialization;

pub use investment::{
    growth_schedule, project_investment, InvestmentProjection, InvestmentProjectionInput,
    YearlyBalance,
};
pub use loan::{project_loan, repayment_schedule, LoanProjection, LoanProjectionInput};
pub use serialization::{InvestmentReport, LoanReport};
