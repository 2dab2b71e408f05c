/// education loan walkthrough - phase accrual and summary figures
use financial_projection_rs::{
    project_loan, GracePeriod, LoanProjectionInput, Money, Rate,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = LoanProjectionInput::new(
        Money::from_major(250_000),
        Rate::from_decimal(dec!(0.095)),
        dec!(36),
        GracePeriod::TwelveMonths,
        84,
    );

    let projection = project_loan(&input)?;

    println!("== deferment phases ==");
    println!(
        "study phase:  {} months, {} interest, principal now {}",
        projection.study_phase.phase_months,
        projection.study_phase.interest_accrued.round_dp(2),
        projection.study_phase.closing_principal.round_dp(2),
    );
    println!(
        "grace phase:  {} months, {} interest, principal now {}",
        projection.grace_phase.phase_months,
        projection.grace_phase.interest_accrued.round_dp(2),
        projection.grace_phase.closing_principal.round_dp(2),
    );

    println!("== repayment ==");
    println!("restated principal: {}", projection.principal_restated.round_dp(2));
    println!("monthly installment: {}", projection.monthly_installment.round_dp(2));
    println!("total payable: {}", projection.total_payable.round_dp(2));
    println!("total interest: {}", projection.total_interest.round_dp(2));
    println!("interest share: {}%", projection.interest_share.as_percentage().round_dp(2));
    println!("elapsed months: {}", projection.total_elapsed_months);

    Ok(())
}
