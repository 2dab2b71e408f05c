pub mod installment;

pub use installment::{solve_installment, InstallmentSchedule, ScheduledPayment};
